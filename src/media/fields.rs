//! Graph API field sets requested per call.

/// Every field, requested by the flat list call.
pub const FLAT_LIST_FIELDS: &[&str] = &[
    "id",
    "caption",
    "media_type",
    "media_url",
    "username",
    "timestamp",
];

/// Ids only, requested by the list call in detailed mode.
pub const ID_ONLY_FIELDS: &[&str] = &["id"];

/// Fields requested per item in detailed mode. Caption is not included.
pub const DETAIL_FIELDS: &[&str] = &["id", "media_type", "media_url", "username", "timestamp"];

/// Join a field set into the `fields` query value.
pub fn join_fields(fields: &[&str]) -> String {
    fields.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_fields() {
        assert_eq!(
            join_fields(FLAT_LIST_FIELDS),
            "id,caption,media_type,media_url,username,timestamp"
        );
        assert_eq!(join_fields(ID_ONLY_FIELDS), "id");
        assert!(!DETAIL_FIELDS.contains(&"caption"));
    }
}
