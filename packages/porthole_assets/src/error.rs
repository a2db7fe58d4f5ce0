/// Errors from asset store lookups.
///
/// Lookups either succeed with in-memory bytes or fail immediately; there
/// is no retry or partial-failure state to represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let err = AssetError::NotFound("/missing/path".to_string());
        assert_eq!(err.to_string(), "asset not found: /missing/path");
    }
}
