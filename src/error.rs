//! Error types shared by every composition module.

use std::error::Error;

/// Boxed error returned by a subscriber's update hook.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Result type alias for composition operations
pub type CompositionResult<T> = Result<T, CompositionError>;

/// Common error type for composition operations
#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
    /// A host or chain was assembled without one of its required parts
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A subscriber failed and the fan-out was stopped
    #[error("Notification aborted at observer '{observer}': {source}")]
    NotificationAborted {
        observer: String,
        #[source]
        source: BoxError,
    },

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A player was asked for a media type it cannot handle
    #[error("Invalid media type: {0}. MP3, VLC, and MP4 formats supported.")]
    UnsupportedMedia(String),
}

impl CompositionError {
    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn unsupported_media(media_type: impl Into<String>) -> Self {
        Self::UnsupportedMedia(media_type.into())
    }

    /// Wrap a subscriber failure
    pub fn notification_aborted(observer: impl Into<String>, source: BoxError) -> Self {
        Self::NotificationAborted {
            observer: observer.into(),
            source,
        }
    }
}
