//! Markdown validation without writing output.

use crate::error::{Error, IoAction, Result};
use crate::options::ConversionOptions;
use crate::render::{Converter, MarkdownConverter};
use std::fs;
use std::path::Path;

/// Checks that Markdown content can be converted.
pub trait Validator {
    /// Validates Markdown content.
    fn validate(&self, content: &[u8]) -> Result<()>;

    /// Reads and validates a Markdown file.
    fn validate_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::InputNotExist(path.to_path_buf()));
        }
        let content = fs::read(path).map_err(|e| Error::io(path, IoAction::Reading, e))?;
        self.validate(&content).map_err(|e| Error::Validation {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }
}

/// Validator that runs a converter and discards its output.
pub struct MarkdownValidator<C = MarkdownConverter> {
    converter: C,
}

impl MarkdownValidator {
    /// Creates a validator using the Markdown converter with `options`.
    pub fn new(options: ConversionOptions) -> Self {
        Self::with_converter(MarkdownConverter::new(options))
    }
}

impl Default for MarkdownValidator {
    fn default() -> Self {
        Self::new(ConversionOptions::default())
    }
}

impl<C: Converter> MarkdownValidator<C> {
    /// Creates a validator around any converter.
    pub fn with_converter(converter: C) -> Self {
        Self { converter }
    }
}

impl<C: Converter> Validator for MarkdownValidator<C> {
    fn validate(&self, content: &[u8]) -> Result<()> {
        self.converter.convert(content).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FailingConverter;

    impl Converter for FailingConverter {
        fn convert(&self, _input: &[u8]) -> Result<String> {
            Err(Error::Conversion("mock engine failure".into()))
        }
    }

    #[test]
    fn test_valid_markdown() {
        let validator = MarkdownValidator::default();
        assert!(validator.validate(b"# Title\n\n- a\n- b\n").is_ok());
    }

    #[test]
    fn test_empty_and_whitespace_are_valid() {
        let validator = MarkdownValidator::default();
        assert!(validator.validate(b"").is_ok());
        assert!(validator.validate(b"  \n\t\n").is_ok());
    }

    #[test]
    fn test_binary_content_is_valid() {
        let validator = MarkdownValidator::new(ConversionOptions::plain());
        assert!(validator.validate(&[0xFF, 0xFE, 0x00, 0x80, b'#']).is_ok());
    }

    #[test]
    fn test_converter_failure() {
        let validator = MarkdownValidator::with_converter(FailingConverter);
        assert!(matches!(
            validator.validate(b"anything"),
            Err(Error::Conversion(_))
        ));
    }

    #[test]
    fn test_validate_file_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Doc\n\ntext").unwrap();

        let validator = MarkdownValidator::default();
        assert!(validator.validate_file(&path).is_ok());
        assert!(validator.validate_file(&path).is_ok());

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Doc\n\ntext");
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = MarkdownValidator::default().validate_file(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(Error::InputNotExist(_))));
    }

    #[test]
    fn test_validate_file_wraps_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "x").unwrap();

        let result = MarkdownValidator::with_converter(FailingConverter).validate_file(&path);
        match result {
            Err(Error::Validation { path: p, source }) => {
                assert_eq!(p, path);
                assert!(matches!(*source, Error::Conversion(_)));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
