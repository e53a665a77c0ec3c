//! Audio cue playback
//!
//! The surprise popups come with an error "ding". Playback is best-effort:
//! a machine without an output device, or a missing/corrupt file, only ever
//! produces a debug log line.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, PlayError, Sink, StreamError};
use thiserror::Error;
use tokio::task;

/// Volume the surprise cue is played at (0.0 - 1.0)
pub const CUE_VOLUME: f32 = 0.3;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("cannot open audio cue: {0}")]
    Io(#[from] io::Error),
    #[error("no audio output: {0}")]
    Stream(#[from] StreamError),
    #[error("cannot start playback: {0}")]
    Play(#[from] PlayError),
    #[error("cannot decode audio cue: {0}")]
    Decode(#[from] DecoderError),
    #[error("audio worker failed: {0}")]
    Worker(#[from] task::JoinError),
}

/// Play an audio file once at `volume`
///
/// Spawns blocking because rodio holds the output stream for the whole
/// playback; the returned future resolves when the cue has finished.
pub async fn play_cue(path: PathBuf, volume: f32) -> Result<(), String> {
    task::spawn_blocking(move || play_blocking(&path, volume))
        .await
        .map_err(AudioError::from)
        .and_then(|result| result)
        .map_err(|e| e.to_string())
}

/// Tracks whether a cue is still playing so surprises don't stack sounds
#[derive(Debug, Default)]
pub struct CuePlayer {
    playing: bool,
}

impl CuePlayer {
    /// Claim the output for a new cue; `false` while one is already playing
    pub fn try_start(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.playing = true;
        true
    }

    /// Release the output once playback has ended (successfully or not)
    pub fn finish(&mut self) {
        self.playing = false;
    }
}

/// Blocking implementation of cue playback
fn play_blocking(path: &Path, volume: f32) -> Result<(), AudioError> {
    let file = File::open(path)?;
    let source = Decoder::new(BufReader::new(file))?;

    // The stream must outlive the sink, keep it bound until the end
    let (_stream, handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&handle)?;

    sink.set_volume(volume.clamp(0.0, 1.0));
    sink.append(source);
    sink.sleep_until_end();

    log::debug!("🔊 Played {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_player_skips_while_playing() {
        let mut player = CuePlayer::default();

        assert!(player.try_start());
        assert!(!player.try_start());
        assert!(!player.try_start());

        player.finish();
        assert!(player.try_start());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = play_blocking(&dir.path().join("missing.mp3"), CUE_VOLUME);

        assert!(matches!(result, Err(AudioError::Io(_))));
    }

    #[test]
    fn test_garbage_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-audio.mp3");
        std::fs::write(&path, b"definitely not an mp3").unwrap();

        let result = play_blocking(&path, CUE_VOLUME);

        assert!(matches!(result, Err(AudioError::Decode(_))));
    }
}
