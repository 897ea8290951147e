//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use algosketch::SketchError;
    use algosketch::io::error::{file_error, invalid_parameter, script_error};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SketchError::FileSystem {
            path: "/tmp/script.txt".into(),
            operation: "read script",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read script"));
        assert!(message.contains("/tmp/script.txt"));
        assert!(message.contains("file not found"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("width", &0, &"must be between 1 and 8192");

        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be between 1 and 8192"));
        assert!(error.source().is_none());
    }

    // Tests script errors name the offending line
    // Verified by omitting the line number from the message
    #[test]
    fn test_script_error_names_line() {
        let error = script_error(7, &"unknown event 'jump'");
        assert!(matches!(error, SketchError::Script { line: 7, .. }));
        let message = error.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("jump"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = SketchError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests the map_err adapter keeps path and operation
    // Verified by dropping the path in the adapter
    #[test]
    fn test_file_error_adapter() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let error = result
            .map_err(file_error(Path::new("out/frames"), "create directory"))
            .unwrap_err();

        match &error {
            SketchError::FileSystem { path, operation, .. } => {
                assert_eq!(path, Path::new("out/frames"));
                assert_eq!(*operation, "create directory");
            }
            other => panic!("Expected file system error, got {other:?}"),
        }
        assert!(error.to_string().starts_with("Failed to create directory"));
    }
}
