use std::sync::Arc;

use crate::config::Config;
use crate::notify::Notifier;
use crate::upload::UploadPolicy;

/// Shared application state threaded through every screen.
/// The notifier is pluggable so tests can capture toasts instead of printing.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn resume_policy(&self) -> UploadPolicy {
        UploadPolicy::document(self.config.resume_max_mb)
    }

    pub fn photo_policy(&self) -> UploadPolicy {
        UploadPolicy::photo(self.config.photo_max_mb)
    }
}
