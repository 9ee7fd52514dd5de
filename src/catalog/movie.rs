use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category assigned to enriched movies whose details list no genre.
pub const DEFAULT_CATEGORY: &str = "Filme";

/// Category marking an entry that was seeded as a placeholder.
pub const PLACEHOLDER_CATEGORY: &str = "Placeholder";

/// Title prefix of seeded placeholder entries.
pub const PLACEHOLDER_TITLE_PREFIX: &str = "Filme Placeholder";

/// A movie as stored in the catalog file.
///
/// The JSON keys are the ones the catalog frontend reads, and the field
/// order here is the key order written to disk.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct MovieRecord {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "diretor")]
    pub director: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "avaliacao")]
    pub rating: f64,
    pub link: String,
    pub poster: String,
}

impl Default for MovieRecord {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            year: 0,
            director: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            rating: 0.0,
            link: String::new(),
            poster: String::new(),
        }
    }
}

/// Returns true if a raw catalog entry is a placeholder waiting for real data.
///
/// An entry is a placeholder when any of these hold:
/// - its `categoria` is [`PLACEHOLDER_CATEGORY`]
/// - its `titulo` starts with [`PLACEHOLDER_TITLE_PREFIX`]
/// - its `link` is missing or blank (null, `""`, `0`, `false`, empty container)
///
/// Entries that are not JSON objects carry no link, so they count as placeholders.
pub fn is_placeholder(entry: &Value) -> bool {
    let category_is_placeholder =
        entry.get("categoria").and_then(Value::as_str) == Some(PLACEHOLDER_CATEGORY);

    let title_is_placeholder = match entry.get("titulo") {
        None | Some(Value::Null) => false,
        Some(Value::String(title)) => title.starts_with(PLACEHOLDER_TITLE_PREFIX),
        Some(other) => other.to_string().starts_with(PLACEHOLDER_TITLE_PREFIX),
    };

    category_is_placeholder || title_is_placeholder || is_blank(entry.get("link"))
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(fields)) => fields.is_empty(),
    }
}
