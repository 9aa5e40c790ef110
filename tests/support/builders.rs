// tests/support/builders.rs
use listing_slugs::domain::listing::ListingRecord;
use serde_json::{Map, Value};

pub struct ListingBuilder {
    fields: Map<String, Value>,
}

impl ListingBuilder {
    pub fn new(title: &str, location: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), Value::from(1));
        fields.insert("title".into(), Value::from(title));
        fields.insert("location".into(), Value::from(location));
        Self { fields }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.fields.insert("id".into(), Value::from(id));
        self
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.shift_remove(key);
        self
    }

    pub fn build(self) -> ListingRecord {
        ListingRecord::new(self.fields)
    }
}

/// Every field except `slug`, for pass-through comparisons.
pub fn without_slug(record: &ListingRecord) -> Map<String, Value> {
    let mut fields = record.fields().clone();
    fields.shift_remove("slug");
    fields
}
