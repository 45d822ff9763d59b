//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use wallmaze::io::error::{WithPath, invalid_parameter, malformed_row};
    use wallmaze::{MapDefect, MazeError};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MazeError::FileSystem {
            path: "/tmp/test.maze".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.maze"));
        assert!(!error.is_malformed_map());
    }

    // Tests even-length maps mention the odd-length requirement
    // Verified by omitting the row count from the message
    #[test]
    fn test_even_length_message() {
        let error = MazeError::MalformedMap {
            row: None,
            defect: MapDefect::EvenLength { rows: 4 },
        };

        let message = error.to_string();
        assert!(message.contains("odd-length array required"));
        assert!(message.contains("4 rows"));
        assert!(error.is_malformed_map());
        assert!(error.source().is_none());
    }

    // Tests row length mismatches name the row and both lengths
    // Verified by omitting the row index from the message
    #[test]
    fn test_inconsistent_length_message() {
        let error = malformed_row(
            3,
            MapDefect::InconsistentLength {
                expected: 11,
                found: 9,
            },
        );

        let message = error.to_string();
        assert!(message.contains("row 3"));
        assert!(message.contains("inconsistent element length"));
        assert!(message.contains("expected 11"));
        assert!(message.contains("found 9"));
    }

    // Tests file context wraps map errors and keeps them classifiable
    // Verified by discarding the wrapped error
    #[test]
    fn test_with_path_wraps_map_errors() {
        let result: Result<(), MazeError> = Err(malformed_row(0, MapDefect::EmptyRow));

        let error = result.with_path(Path::new("levels/one.maze")).unwrap_err();

        assert!(error.is_malformed_map());
        assert!(error.to_string().starts_with("levels/one.maze: "));
        assert!(
            error
                .source()
                .is_some_and(|source| source.to_string().contains("row 0"))
        );
    }

    // Tests file system errors keep their own path under file context
    // Verified by wrapping every error type
    #[test]
    fn test_with_path_keeps_file_system_errors() {
        let result: Result<(), MazeError> = Err(MazeError::FileSystem {
            path: PathBuf::from("inner.maze"),
            operation: "read",
            source: std::io::Error::other("boom"),
        });

        match result.with_path(Path::new("outer.maze")) {
            Err(MazeError::FileSystem { path, .. }) => assert_eq!(path, PathBuf::from("inner.maze")),
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("heading", &"sideways", &"unknown heading");

        let message = error.to_string();
        assert!(message.contains("heading"));
        assert!(message.contains("sideways"));
        assert!(message.contains("unknown heading"));
    }

    // Tests query error messages carry coordinates and dimensions
    // Verified by printing height before width
    #[test]
    fn test_query_error_messages() {
        let bounds = MazeError::OutOfBounds {
            position: [12, 3],
            width: 10,
            height: 9,
        };
        assert!(bounds.to_string().contains("(12, 3)"));
        assert!(bounds.to_string().contains("10x9"));

        let direction = MazeError::InvalidDirection { i: 1, j: 1 };
        assert!(direction.to_string().contains("(1, 1)"));

        let batch = MazeError::BatchFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(batch.to_string(), "2 of 5 maps failed to load or query");
    }
}
