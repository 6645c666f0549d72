//! Adaptees, the adapter that wraps them, and the client-facing player

use super::{MediaFormat, MediaPlayer};
use crate::error::{CompositionError, CompositionResult};

/// Third-party player with its own MP4-only interface
#[derive(Debug, Clone, Copy, Default)]
pub struct Mp4Player;

impl Mp4Player {
    pub fn play_mp4(&self, file_name: &str) -> String {
        format!("Playing MP4 file: {file_name}")
    }
}

/// Third-party player with its own VLC-only interface
#[derive(Debug, Clone, Copy, Default)]
pub struct VlcPlayer;

impl VlcPlayer {
    pub fn play_vlc(&self, file_name: &str) -> String {
        format!("Playing VLC file: {file_name}")
    }
}

#[derive(Debug, Clone, Copy)]
enum AdvancedPlayer {
    Mp4(Mp4Player),
    Vlc(VlcPlayer),
}

/// Presents an advanced player through [`MediaPlayer`]
#[derive(Debug, Clone, Copy)]
pub struct MediaAdapter {
    player: AdvancedPlayer,
}

impl MediaAdapter {
    /// Pick the adaptee for `format`. MP3 has no adaptee and is rejected.
    pub fn new(format: MediaFormat) -> CompositionResult<Self> {
        let player = match format {
            MediaFormat::Mp4 => AdvancedPlayer::Mp4(Mp4Player),
            MediaFormat::Vlc => AdvancedPlayer::Vlc(VlcPlayer),
            MediaFormat::Mp3 => return Err(CompositionError::unsupported_media(format.to_string())),
        };
        Ok(Self { player })
    }

    pub fn format(&self) -> MediaFormat {
        match self.player {
            AdvancedPlayer::Mp4(_) => MediaFormat::Mp4,
            AdvancedPlayer::Vlc(_) => MediaFormat::Vlc,
        }
    }
}

impl MediaPlayer for MediaAdapter {
    /// Forwards to the adaptee chosen at construction; `media_type` must match it
    fn play(&self, media_type: &str, file_name: &str) -> CompositionResult<String> {
        let requested: MediaFormat = media_type.parse()?;
        if requested != self.format() {
            return Err(CompositionError::unsupported_media(media_type));
        }
        Ok(match self.player {
            AdvancedPlayer::Mp4(player) => player.play_mp4(file_name),
            AdvancedPlayer::Vlc(player) => player.play_vlc(file_name),
        })
    }
}

/// Plays MP3 itself and hands MP4 and VLC to a [`MediaAdapter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioPlayer;

impl AudioPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl MediaPlayer for AudioPlayer {
    fn play(&self, media_type: &str, file_name: &str) -> CompositionResult<String> {
        let format: MediaFormat = media_type.parse().inspect_err(|_| {
            tracing::warn!(media_type, file_name, "unsupported media type");
        })?;
        match format {
            MediaFormat::Mp3 => Ok(format!("Playing MP3 file: {file_name}")),
            MediaFormat::Mp4 | MediaFormat::Vlc => {
                tracing::debug!(%format, file_name, "delegating to media adapter");
                MediaAdapter::new(format)?.play(media_type, file_name)
            }
        }
    }
}
