use serde::{de, Deserialize, Deserializer};

use itemstore_items::ItemFilter;

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /items/search`. Every parameter is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "query_bool")]
    pub is_active: Option<bool>,
}

/// Accepts the usual query-string spellings of a boolean, case-insensitively.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn query_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_bool(&raw)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid boolean {raw:?}")))
}

impl From<SearchQuery> for ItemFilter {
    fn from(q: SearchQuery) -> Self {
        ItemFilter::new()
            .name(q.name)
            .min_price(q.min_price)
            .max_price(q.max_price)
            .is_active(q.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_spellings() {
        for raw in ["1", "true", "True", "TRUE", "t", "yes", "Y", "on"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "false", "False", "f", "no", "N", "off", "OFF"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        for raw in ["", "2", "maybe", "tru"] {
            assert_eq!(parse_bool(raw), None, "{raw}");
        }
    }

    #[test]
    fn empty_query_is_unconstrained() {
        let filter: ItemFilter = SearchQuery::default().into();
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn empty_name_parameter_is_unconstrained() {
        let filter: ItemFilter = SearchQuery {
            name: Some(String::new()),
            ..SearchQuery::default()
        }
        .into();
        assert!(filter.is_unconstrained());
    }
}
