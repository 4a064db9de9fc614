//! Integration tests for error types

#[cfg(test)]
mod tests {
    use cstore_errors::*;
    use std::path::Path;

    #[test]
    fn test_error_conversion() {
        let state_err = StateError::QualifierNotFound {
            namespace: "http://www.alfresco.org/model/content/1.0".into(),
            local_name: "content".into(),
        };
        let err: Error = state_err.into();
        assert!(matches!(err, Error::State(_)));
        assert_eq!(err.user_code(), Some("state.qualifier_not_found"));
    }

    #[test]
    fn test_error_display() {
        let err = StateError::ConnectionFailed {
            host: "127.0.0.1".into(),
            port: 5432,
            dbname: "alfresco".into(),
            message: "connection refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "unable to connect to database alfresco at 127.0.0.1:5432: connection refused"
        );
    }

    #[test]
    fn test_query_failed_keeps_query_name() {
        let err = StateError::query_failed("stores", &"relation \"alf_store\" does not exist");
        assert_eq!(
            err.to_string(),
            "query stores failed: relation \"alf_store\" does not exist"
        );
    }

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err = StorageError::from_io_with_path(&io_err, Path::new("/srv/contentstore/a.bin"));
        assert!(matches!(err, StorageError::PermissionDenied { ref path } if path == "/srv/contentstore/a.bin"));
        assert!(!err.is_not_found());

        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(StorageError::from_io_with_path(&missing, Path::new("/x")).is_not_found());
    }

    #[test]
    fn test_user_hint_for_connection() {
        let err: Error = StateError::ConnectionFailed {
            host: "db".into(),
            port: 5432,
            dbname: "alfresco".into(),
            message: "timeout".into(),
        }
        .into();
        assert!(err.user_hint().is_some());
    }
}
