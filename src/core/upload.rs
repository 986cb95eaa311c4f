use crate::domain::model::FileMeta;
use thiserror::Error;

pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileRejection {
    #[error("File \"{name}\" is too large. Maximum size is {max_mb}MB.")]
    TooLarge { name: String, max_mb: u64 },

    #[error("File \"{name}\" has an invalid format.")]
    InvalidFormat { name: String },
}

/// Constraints of one file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRule {
    pub field: String,
    pub display: String,
    /// Empty means any MIME type.
    pub allowed: Vec<String>,
    pub max_bytes: u64,
}

impl UploadRule {
    pub fn new(field: &str, display: &str, allowed: &[&str]) -> Self {
        Self {
            field: field.to_string(),
            display: display.to_string(),
            allowed: allowed.iter().map(|m| m.to_string()).collect(),
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }

    pub fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// All-or-nothing: the first offending file rejects the whole selection.
    pub fn check(&self, files: &[FileMeta]) -> Result<(), FileRejection> {
        for file in files {
            if file.size > self.max_bytes {
                return Err(FileRejection::TooLarge {
                    name: file.name.clone(),
                    max_mb: self.max_bytes / (1024 * 1024),
                });
            }

            if !self.allowed.is_empty() && !self.allowed.iter().any(|m| *m == file.mime) {
                return Err(FileRejection::InvalidFormat {
                    name: file.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Text next to the upload button.
pub fn selection_label(files: &[FileMeta]) -> String {
    match files {
        [] => String::new(),
        [single] => single.name.clone(),
        many => format!("{} files selected", many.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license_rule() -> UploadRule {
        UploadRule::new(
            "licenseUpload",
            "licenseFileName",
            &["application/pdf", "image/jpeg", "image/png"],
        )
    }

    #[test]
    fn test_size_limit() {
        let big = FileMeta::new("scan.pdf", "application/pdf", MAX_UPLOAD_BYTES + 1);
        assert_eq!(
            license_rule().check(&[big]).unwrap_err().to_string(),
            "File \"scan.pdf\" is too large. Maximum size is 5MB."
        );

        let exact = FileMeta::new("scan.pdf", "application/pdf", MAX_UPLOAD_BYTES);
        assert!(license_rule().check(&[exact]).is_ok());
    }

    #[test]
    fn test_one_bad_type_rejects_all() {
        let files = vec![
            FileMeta::new("a.png", "image/png", 10),
            FileMeta::new("b.gif", "image/gif", 10),
        ];
        assert_eq!(
            license_rule().check(&files),
            Err(FileRejection::InvalidFormat {
                name: "b.gif".to_string()
            })
        );
    }

    #[test]
    fn test_empty_allow_list_accepts_any_type() {
        let rule = UploadRule::new("attachments", "attachmentsName", &[]);
        assert!(rule.check(&[FileMeta::new("x.zip", "application/zip", 1)]).is_ok());
    }

    #[test]
    fn test_selection_label() {
        assert_eq!(selection_label(&[]), "");
        assert_eq!(
            selection_label(&[FileMeta::new("a.png", "image/png", 1)]),
            "a.png"
        );
        assert_eq!(
            selection_label(&[
                FileMeta::new("a.png", "image/png", 1),
                FileMeta::new("b.png", "image/png", 1)
            ]),
            "2 files selected"
        );
    }
}
