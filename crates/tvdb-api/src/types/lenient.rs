//! Serde helpers for fields the API sends inconsistently.

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing field.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(deserialize_with = "null_default")]
        items: Vec<u32>,
    }

    #[test]
    fn test_null_becomes_default() {
        // Arrange & Act
        let holder: Holder = serde_json::from_str(r#"{"items":null}"#).unwrap();

        // Assert
        assert!(holder.items.is_empty());
    }

    #[test]
    fn test_missing_becomes_default() {
        // Arrange & Act
        let holder: Holder = serde_json::from_str("{}").unwrap();

        // Assert
        assert!(holder.items.is_empty());
    }

    #[test]
    fn test_value_is_kept() {
        // Arrange & Act
        let holder: Holder = serde_json::from_str(r#"{"items":[1,2]}"#).unwrap();

        // Assert
        assert_eq!(holder.items, vec![1, 2]);
    }
}
