//! Generated illustration handle.

use serde::{Deserialize, Serialize};

/// A generated scene illustration as a URI-embeddable blob.
///
/// The engine treats the image as opaque; the presentation layer can hand
/// the URI directly to whatever renders it.
///
/// # Examples
///
/// ```
/// use aesop_core::SceneImage;
///
/// let image = SceneImage::from_base64_png("iVBORw0KGgo");
/// assert!(image.uri().starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneImage {
    uri: String,
}

impl SceneImage {
    /// Wrap base64-encoded PNG bytes as a data URI.
    pub fn from_base64_png(data: impl AsRef<str>) -> Self {
        Self {
            uri: format!("data:image/png;base64,{}", data.as_ref()),
        }
    }

    /// Wrap an already-formed URI.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// The URI-embeddable form of the image.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}
