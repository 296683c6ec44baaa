//! File attachment intake: extension allow-lists and size caps.
//!
//! Rejection never mutates state: validation runs before anything is stored,
//! and a failed upload leaves the form slot untouched. The caps are
//! configurable; defaults are 10 MB for documents and 2 MB for photos.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Allow-list plus size cap for one attachment slot.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub label: &'static str,
    pub allowed_extensions: &'static [&'static str],
    pub max_size_mb: u64,
}

impl UploadPolicy {
    /// Resume documents: PDF, DOC, or DOCX.
    pub fn document(max_size_mb: u64) -> Self {
        UploadPolicy {
            label: "resume",
            allowed_extensions: &[".pdf", ".doc", ".docx"],
            max_size_mb,
        }
    }

    /// Profile photos: JPG, PNG, or GIF.
    pub fn photo(max_size_mb: u64) -> Self {
        UploadPolicy {
            label: "profile photo",
            allowed_extensions: &[".jpg", ".jpeg", ".png", ".gif"],
            max_size_mb,
        }
    }

    pub fn allowed_list(&self) -> String {
        self.allowed_extensions.join(", ")
    }

    /// Validates a candidate file against the allow-list and the size cap.
    /// Extension matching is case-insensitive on the file name's last suffix.
    pub fn validate(&self, file_name: &str, size_bytes: u64) -> Result<(), AppError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        if !self.allowed_extensions.contains(&extension.as_str()) {
            warn!(file_name, slot = self.label, "rejected upload: file type");
            return Err(AppError::InvalidFileType {
                allowed: self.allowed_list(),
            });
        }

        if size_bytes > self.max_size_mb * BYTES_PER_MB {
            warn!(
                file_name,
                size_bytes,
                cap_mb = self.max_size_mb,
                "rejected upload: size"
            );
            return Err(AppError::FileTooLarge {
                max_mb: self.max_size_mb,
            });
        }

        Ok(())
    }
}

/// A validated in-memory attachment. The payload lives only for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub size_bytes: u64,
    #[serde(skip)]
    pub content: Bytes,
}

impl Attachment {
    /// Reads a file from disk, enforcing `policy` before the contents are
    /// kept. The size check runs against metadata so an oversized file is
    /// rejected without buffering it.
    pub async fn load(path: &std::path::Path, policy: &UploadPolicy) -> Result<Self, AppError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot read '{file_name}': {e}")))?;
        policy.validate(&file_name, metadata.len())?;

        let content = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot read '{file_name}': {e}")))?;

        Ok(Attachment {
            file_name,
            size_bytes: content.len() as u64,
            content: Bytes::from(content),
        })
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── policy validation ───────────────────────────────────────────────────

    #[test]
    fn test_document_accepts_allowed_extensions() {
        let policy = UploadPolicy::document(10);
        for name in ["resume.pdf", "resume.doc", "resume.docx", "RESUME.PDF"] {
            assert!(policy.validate(name, 1024).is_ok(), "{name} should pass");
        }
    }

    #[test]
    fn test_document_rejects_unknown_extension() {
        let policy = UploadPolicy::document(10);
        let err = policy.validate("resume.txt", 1024);
        assert!(matches!(err, Err(AppError::InvalidFileType { .. })));
    }

    #[test]
    fn test_rejects_extensionless_name() {
        let policy = UploadPolicy::document(10);
        assert!(matches!(
            policy.validate("resume", 1024),
            Err(AppError::InvalidFileType { .. })
        ));
    }

    #[test]
    fn test_size_cap_boundary() {
        let policy = UploadPolicy::document(10);
        assert!(policy.validate("resume.pdf", 10 * BYTES_PER_MB).is_ok());
        assert!(matches!(
            policy.validate("resume.pdf", 10 * BYTES_PER_MB + 1),
            Err(AppError::FileTooLarge { max_mb: 10 })
        ));
    }

    #[test]
    fn test_fifteen_mb_file_against_ten_mb_cap() {
        let policy = UploadPolicy::document(10);
        let err = policy.validate("resume.pdf", 15 * BYTES_PER_MB);
        assert!(matches!(err, Err(AppError::FileTooLarge { max_mb: 10 })));
    }

    #[test]
    fn test_photo_policy_allows_images_only() {
        let policy = UploadPolicy::photo(2);
        assert!(policy.validate("me.png", 1024).is_ok());
        assert!(matches!(
            policy.validate("me.pdf", 1024),
            Err(AppError::InvalidFileType { .. })
        ));
    }

    // ── attachment loading ──────────────────────────────────────────────────

    #[tokio::test]
    async fn test_load_reads_valid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.pdf");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(b"%PDF-1.4 fake"))
            .expect("write fixture");

        let attachment = Attachment::load(&path, &UploadPolicy::document(10))
            .await
            .expect("valid file should load");
        assert_eq!(attachment.file_name, "resume.pdf");
        assert_eq!(attachment.size_bytes, 13);
    }

    #[tokio::test]
    async fn test_load_rejects_oversized_without_buffering() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("big.pdf");
        let file = std::fs::File::create(&path).expect("create fixture");
        file.set_len(15 * BYTES_PER_MB).expect("grow fixture");

        let err = Attachment::load(&path, &UploadPolicy::document(10)).await;
        assert!(matches!(err, Err(AppError::FileTooLarge { max_mb: 10 })));
    }

    #[tokio::test]
    async fn test_oversized_rejection_leaves_form_slot_unset() {
        use crate::notify::{CapturingNotifier, Notifier, Severity};
        use crate::wizard::OnboardingForm;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.pdf");
        let file = std::fs::File::create(&path).expect("create fixture");
        file.set_len(15 * BYTES_PER_MB).expect("grow fixture");

        let notifier = CapturingNotifier::new();
        let mut form = OnboardingForm::new();
        match Attachment::load(&path, &UploadPolicy::document(10)).await {
            Ok(attachment) => form.resume = Some(attachment),
            Err(err) => notifier.notify(err.to_notice()),
        }

        assert!(form.resume.is_none(), "rejection must not touch the slot");
        let notices = notifier.drain();
        assert_eq!(notices.len(), 1, "the notice is the only observable effect");
        assert_eq!(notices[0].severity, Severity::Destructive);
        assert_eq!(notices[0].title, "File too large");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_internal_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Attachment::load(&dir.path().join("gone.pdf"), &UploadPolicy::document(10)).await;
        assert!(matches!(err, Err(AppError::Internal(_))));
    }
}
