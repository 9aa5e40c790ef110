use crate::application::ports::util::SlugGenerator;
use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
// Word characters are ASCII only; accented letters are dropped, not transliterated.
static RE_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]").expect("valid charset regex"));
static RE_HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid hyphen regex"));

/// Lower-cased, hyphen-separated form of `input` containing only
/// `[a-z0-9_-]`, without leading, trailing or doubled hyphens.
/// Returns an empty string when nothing survives.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let hyphenated = RE_WHITESPACE.replace_all(lowered.trim(), "-");
    let filtered = RE_DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = RE_HYPHEN_RUN.replace_all(&filtered, "-");
    let slug: &str = &collapsed;
    let slug = slug.strip_prefix('-').unwrap_or(slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        normalize(input)
    }
}
