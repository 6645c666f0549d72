//! Media player: MP4 and VLC players adapted behind one interface

use composition_rs::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("composition_rs=info")),
        )
        .init();

    let player = AudioPlayer::new();
    for (media_type, file_name) in [
        ("mp3", "song.mp3"),
        ("mp4", "video.mp4"),
        ("vlc", "movie.vlc"),
        ("avi", "clip.avi"),
    ] {
        match player.play(media_type, file_name) {
            Ok(line) => println!("{line}"),
            Err(error) => println!("{error}"),
        }
    }
}
