//! Generic stored documents.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{PokedexError, Result};

/// A stored document: the source payload kept as a JSON object, plus any
/// fields the pipeline adds.
pub type Document = Map<String, Value>;

/// Normalizes an entity name for keying and lookup.
///
/// Names are compared case-insensitively, so every key is lowercase.
///
/// ```
/// assert_eq!(pokedex_types::normalize_name("PiKaChU"), "pikachu");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Decodes a stored document into a typed view.
///
/// # Errors
///
/// Returns [`PokedexError::Decode`] if the document does not fit the view.
pub fn decode_document<T: DeserializeOwned>(document: &Document, view: &'static str) -> Result<T> {
    serde_json::from_value(Value::Object(document.clone()))
        .map_err(|source| PokedexError::Decode { view, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Pikachu"), "pikachu");
        assert_eq!(normalize_name("PIKACHU"), "pikachu");
        assert_eq!(normalize_name("mr-mime"), "mr-mime");
    }

    #[test]
    fn test_decode_document() {
        let Value::Object(doc) = json!({ "name": "chikorita", "extra": [1, 2] }) else {
            unreachable!()
        };
        let named: Named = decode_document(&doc, "named").unwrap();
        assert_eq!(named.name, "chikorita");
    }

    #[test]
    fn test_decode_document_error_names_view() {
        let Value::Object(doc) = json!({ "name": 42 }) else {
            unreachable!()
        };
        let err = decode_document::<Named>(&doc, "named").unwrap_err();
        assert!(err.to_string().contains("named"));
    }
}
