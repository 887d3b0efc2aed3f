//! Update records (`/updates`).

use serde::Deserialize;

/// A change to one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityUpdate {
    /// Entity type, e.g. `series`.
    pub entity_type: Option<String>,
    /// Change method code.
    pub method_int: Option<i64>,
    /// Change method, e.g. `update`.
    pub method: Option<String>,
    /// Free-form details.
    pub extra_info: Option<String>,
    /// User who made the change.
    pub user_id: Option<u64>,
    /// Record type code.
    pub record_type: Option<String>,
    /// Changed record ID.
    pub record_id: Option<u64>,
    /// Unix timestamp of the change.
    pub time_stamp: Option<i64>,
    /// Series the record belongs to.
    pub series_id: Option<u64>,
    /// Target of a merge.
    pub merge_to_id: Option<u64>,
    /// Entity type of the merge target.
    pub merge_to_entity_type: Option<String>,
}

impl EntityUpdate {
    /// Change time, if the timestamp is present and valid.
    #[must_use]
    pub fn changed_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.time_stamp?, 0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_changed_at() {
        // Arrange
        let update: EntityUpdate =
            serde_json::from_str(r#"{"entityType":"series","recordId":81189,"timeStamp":1700000000}"#)
                .unwrap();

        // Act
        let changed = update.changed_at().unwrap();

        // Assert
        assert_eq!(changed.to_rfc3339(), "2023-11-14T22:13:20+00:00");
        assert_eq!(update.record_id, Some(81_189));
    }
}
