//! Domain factories for creating record identifiers.

/// Factory for generating record identifiers.
///
/// Encapsulates id generation so record construction sites do not decide
/// the id format themselves. The store only requires ids to be unique
/// within one store instance; callers with their own id scheme can skip
/// this factory entirely.
pub struct RecordIdFactory;

impl RecordIdFactory {
    /// Generate a new record id from a random UUID v4.
    pub fn generate() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_uuid_format() {
        // when (operation):
        let id = RecordIdFactory::generate();

        // then (expected result): standard hyphenated UUID length
        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generate_produces_distinct_ids() {
        // when (operation):
        let id1 = RecordIdFactory::generate();
        let id2 = RecordIdFactory::generate();

        // then (expected result):
        assert_ne!(id1, id2);
    }
}
