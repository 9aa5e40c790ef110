use crate::domain::listing::value_objects::ListingSlug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TITLE_KEY: &str = "title";
pub const LOCATION_KEY: &str = "location";
pub const SLUG_KEY: &str = "slug";

/// A persisted listing. Only `title`, `location` and `slug` are interpreted;
/// every other key is carried through untouched and in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingRecord(Map<String, Value>);

impl ListingRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn title(&self) -> Option<String> {
        self.text_field(TITLE_KEY)
    }

    pub fn location(&self) -> Option<String> {
        self.text_field(LOCATION_KEY)
    }

    pub fn slug(&self) -> Option<&str> {
        self.0.get(SLUG_KEY).and_then(Value::as_str)
    }

    /// Replaces the slug in place, or appends the key when the record has none.
    pub fn set_slug(&mut self, slug: ListingSlug) {
        self.0.insert(SLUG_KEY.to_string(), Value::String(slug.into()));
    }

    // Scalars coerce to their JSON text; null, arrays and objects do not.
    fn text_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<Map<String, Value>> for ListingRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
