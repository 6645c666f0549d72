//! # Object Adapter
//!
//! A client-facing [`MediaPlayer`] interface in front of players whose own
//! interfaces don't match it. The adapter owns the adaptee and forwards to
//! its native method; nothing is inherited.
//!
//! ```rust
//! use composition_rs::adapter::*;
//!
//! let player = AudioPlayer::new();
//! assert_eq!(player.play("mp4", "video.mp4")?, "Playing MP4 file: video.mp4");
//! assert!(player.play("avi", "clip.avi").is_err());
//! # Ok::<(), composition_rs::CompositionError>(())
//! ```

pub mod players;

pub use players::*;

use crate::error::{CompositionError, CompositionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media types the audio player understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaFormat {
    Mp3,
    Mp4,
    Vlc,
}

impl FromStr for MediaFormat {
    type Err = CompositionError;

    /// Case-insensitive: `"MP4"` and `"mp4"` are the same format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp3" => Ok(MediaFormat::Mp3),
            "mp4" => Ok(MediaFormat::Mp4),
            "vlc" => Ok(MediaFormat::Vlc),
            _ => Err(CompositionError::unsupported_media(s)),
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaFormat::Mp3 => "MP3",
            MediaFormat::Mp4 => "MP4",
            MediaFormat::Vlc => "VLC",
        };
        f.write_str(name)
    }
}

/// Target interface the client code is written against
pub trait MediaPlayer: Send + Sync {
    /// Play `file_name` as `media_type` and return the line describing it
    fn play(&self, media_type: &str, file_name: &str) -> CompositionResult<String>;
}
