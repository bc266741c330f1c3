use crate::assets::store::AssetKind;

/// Convenience result type used across Cardsmith.
pub type CardsmithResult<T> = Result<T, CardsmithError>;

/// Top-level error taxonomy used by render APIs.
///
/// Every variant stems from external input; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum CardsmithError {
    /// A referenced illustration, font or back page does not exist in the asset library.
    #[error("asset not found: {kind} '{name}'")]
    AssetNotFound {
        /// Logical location that was searched.
        kind: AssetKind,
        /// Requested asset name.
        name: String,
    },

    /// Zoom factor that is not positive or not in the supported set.
    #[error("invalid zoom: {0}")]
    InvalidZoom(String),

    /// Layout name missing from the registry.
    #[error("unsupported layout: '{0}'")]
    UnsupportedLayout(String),

    /// Invalid user-provided configuration or asset data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while compositing or rasterizing a canvas.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardsmithError {
    /// Build a [`CardsmithError::AssetNotFound`] value.
    pub fn asset_not_found(kind: AssetKind, name: impl Into<String>) -> Self {
        Self::AssetNotFound {
            kind,
            name: name.into(),
        }
    }

    /// Build a [`CardsmithError::InvalidZoom`] value.
    pub fn invalid_zoom(msg: impl Into<String>) -> Self {
        Self::InvalidZoom(msg.into())
    }

    /// Build a [`CardsmithError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardsmithError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for CardsmithError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
