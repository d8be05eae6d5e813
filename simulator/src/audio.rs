//! `rodio` backed tone player.
//!
//! Holds both clips in memory and at most one looping `Sink`. A tone with no
//! clip, or a player with no output device, plays nothing.

use std::io::Cursor;
use std::sync::Arc;

use cluster_common::config::TONE_VOLUME;
use cluster_common::{Tone, ToneSink};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, info, warn};

use crate::assets::{AssetError, AssetPaths, read_clip};

pub struct TonePlayer {
    // Dropping the stream silences every sink, so it lives as long as the player
    output: Option<(OutputStream, OutputStreamHandle)>,
    blinker: Option<Arc<[u8]>>,
    hazard: Option<Arc<[u8]>>,
    active: Option<(Tone, Sink)>,
}

impl TonePlayer {
    /// Open the default output device and read both clips. Failures are
    /// logged and leave the player silent for the affected tone.
    pub fn open(paths: &AssetPaths) -> Self {
        let output = match OutputStream::try_default() {
            Ok(output) => Some(output),
            Err(e) => {
                warn!("Audio disabled: {}", AssetError::from(e));
                None
            }
        };

        Self {
            output,
            blinker: load_clip(paths, Tone::Blinker),
            hazard: load_clip(paths, Tone::Hazard),
            active: None,
        }
    }

    /// A player that never makes a sound.
    pub fn silent() -> Self {
        Self {
            output: None,
            blinker: None,
            hazard: None,
            active: None,
        }
    }

    fn clip(
        &self,
        tone: Tone,
    ) -> Option<&Arc<[u8]>> {
        match tone {
            Tone::Blinker => self.blinker.as_ref(),
            Tone::Hazard => self.hazard.as_ref(),
        }
    }

    /// Start `tone` from the beginning, looping at the configured volume.
    fn start(
        &self,
        tone: Tone,
    ) -> Result<Option<Sink>, AssetError> {
        let (Some((_, handle)), Some(clip)) = (self.output.as_ref(), self.clip(tone)) else {
            return Ok(None);
        };

        let source = Decoder::new(Cursor::new(Arc::clone(clip))).map_err(|source| AssetError::Decode {
            tone: tone.label(),
            source,
        })?;
        let sink = Sink::try_new(handle)?;
        sink.set_volume(TONE_VOLUME);
        sink.append(source.repeat_infinite());
        Ok(Some(sink))
    }
}

impl ToneSink for TonePlayer {
    fn play(
        &mut self,
        tone: Tone,
    ) {
        // Replacing the sink drops (and stops) whatever was playing
        self.active = None;
        match self.start(tone) {
            Ok(Some(sink)) => {
                debug!("Tone {} started", tone.label());
                self.active = Some((tone, sink));
            }
            Ok(None) => {}
            Err(e) => warn!("{e}"),
        }
    }

    fn stop(
        &mut self,
        tone: Tone,
    ) {
        if self.active.as_ref().is_some_and(|(t, _)| *t == tone) {
            if let Some((_, sink)) = self.active.take() {
                sink.stop();
            }
            debug!("Tone {} stopped", tone.label());
        }
    }
}

fn load_clip(
    paths: &AssetPaths,
    tone: Tone,
) -> Option<Arc<[u8]>> {
    match read_clip(paths.tone(tone)) {
        Ok(clip) => {
            info!("Loaded {} tone ({} bytes)", tone.label(), clip.len());
            Some(clip)
        }
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}
