//! Unit tests for search error types

#[cfg(test)]
mod tests {
    use crate::search::error::SearchError;
    use std::error::Error;

    #[test]
    fn test_unavailable_display() {
        let error = SearchError::ProviderUnavailable {
            program: "rg".to_string(),
            reason: "cannot find binary path".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "'rg' is unavailable: cannot find binary path"
        );
    }

    #[test]
    fn test_failed_display_with_code() {
        let error = SearchError::ProviderFailed {
            program: "rg".to_string(),
            code: Some(2),
            stderr: "regex parse error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "'rg' failed with exit code 2: regex parse error"
        );
    }

    #[test]
    fn test_failed_display_without_code() {
        let error = SearchError::ProviderFailed {
            program: "fd".to_string(),
            code: None,
            stderr: String::new(),
        };
        let display = format!("{error}");
        assert!(display.starts_with("'fd' failed:"));
        assert!(!display.contains("exit code"));
    }

    #[test]
    fn test_error_debug() {
        let error = SearchError::ProviderUnavailable {
            program: "fd".to_string(),
            reason: "missing".to_string(),
        };
        let debug = format!("{error:?}");
        assert!(debug.contains("ProviderUnavailable"));
    }

    #[test]
    fn test_error_source_none() {
        let error = SearchError::ProviderFailed {
            program: "rg".to_string(),
            code: Some(2),
            stderr: String::new(),
        };
        assert!(error.source().is_none());
    }
}
