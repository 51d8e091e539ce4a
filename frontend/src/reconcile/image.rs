use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config;

/// Bundled placeholder shown when a profile image cannot be loaded.
pub const DEFAULT_AVATAR: &str = "/assets/default-avatar.png";

/// A file picked locally that has not been uploaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn data_url(&self) -> String {
        let mime = if self.mime.is_empty() {
            "application/octet-stream"
        } else {
            &self.mime
        };
        format!("data:{};base64,{}", mime, STANDARD.encode(&self.bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileImage {
    /// Path or URL of an image the server already stores.
    Remote(String),
    PendingUpload(PendingFile),
}

impl ProfileImage {
    pub fn from_remote(path: Option<&str>) -> Option<Self> {
        path.map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| ProfileImage::Remote(p.to_string()))
    }

    pub fn src_with_base(&self, api_base_url: &str) -> String {
        match self {
            ProfileImage::Remote(path) => config::asset_url_with_base(api_base_url, path),
            ProfileImage::PendingUpload(file) => file.data_url(),
        }
    }

    pub fn src(&self) -> String {
        self.src_with_base(&config::api_base_url())
    }

    /// Only locally picked files are sent on submit.
    pub fn pending_upload(&self) -> Option<&PendingFile> {
        match self {
            ProfileImage::Remote(_) => None,
            ProfileImage::PendingUpload(file) => Some(file),
        }
    }
}

/// Render-time fallback for an `<img>`: one switch to the placeholder per source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFallback {
    failed_src: Option<String>,
}

impl ImageFallback {
    pub fn resolve(&self, src: &str) -> String {
        if src.is_empty() || self.failed_src.as_deref() == Some(src) {
            DEFAULT_AVATAR.to_string()
        } else {
            src.to_string()
        }
    }

    /// Returns whether the image switched to the placeholder.
    pub fn record_error(&mut self, src: &str) -> bool {
        if self.failed_src.as_deref() == Some(src) {
            return false;
        }
        self.failed_src = Some(src.to_string());
        true
    }
}
