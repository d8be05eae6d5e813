//! Tone selection for the turn signal and hazard sounds.
//!
//! The library decides *which* tone should be sounding; a [`ToneSink`]
//! implemented by the front-end does the playing. [`ToneSync`] remembers
//! what the sink was last told so it only issues commands on a change.
//!
//! # Sync Rule
//!
//! | sound active | hazard | wanted tone |
//! |--------------|--------|-------------|
//! | no | - | none |
//! | yes | no | `Blinker` |
//! | yes | yes | `Hazard` |
//!
//! Hazard is a switch, not a queue: switching category stops the old tone
//! before the new one starts from the beginning, so at most one plays.

/// A looping tone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    /// Ordinary turn signal click.
    Blinker,
    /// Hazard flasher tone.
    Hazard,
}

impl Tone {
    /// Tone category for the current hazard flag.
    #[inline]
    pub const fn for_hazard(hazard: bool) -> Self { if hazard { Self::Hazard } else { Self::Blinker } }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Blinker => "blinker",
            Self::Hazard => "hazard",
        }
    }
}

/// Plays and stops looping tones.
///
/// `play` must start the tone from its beginning. Implementations that
/// cannot play sound (missing assets, no output device) simply do nothing.
pub trait ToneSink {
    fn play(
        &mut self,
        tone: Tone,
    );

    fn stop(
        &mut self,
        tone: Tone,
    );
}

/// Sink that discards every command.
impl ToneSink for () {
    fn play(
        &mut self,
        _tone: Tone,
    ) {
    }

    fn stop(
        &mut self,
        _tone: Tone,
    ) {
    }
}

/// Tracks the tone currently sounding and keeps a sink in step with it.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ToneSync {
    playing: Option<Tone>,
}

impl ToneSync {
    pub const fn new() -> Self { Self { playing: None } }

    #[inline]
    pub const fn playing(&self) -> Option<Tone> { self.playing }

    /// Bring `sink` in line with the sync rule.
    ///
    /// Returns `true` if any command was sent.
    pub fn sync<S: ToneSink + ?Sized>(
        &mut self,
        sink: &mut S,
        sound_active: bool,
        hazard: bool,
    ) -> bool {
        let wanted = if sound_active { Some(Tone::for_hazard(hazard)) } else { None };
        if wanted == self.playing {
            return false;
        }

        if let Some(current) = self.playing.take() {
            sink.stop(current);
        }
        if let Some(tone) = wanted {
            sink.play(tone);
        }
        self.playing = wanted;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSink, ToneEvent};

    #[test]
    fn test_tone_for_hazard() {
        assert_eq!(Tone::for_hazard(true), Tone::Hazard);
        assert_eq!(Tone::for_hazard(false), Tone::Blinker);
    }

    #[test]
    fn test_starts_blinker_when_active() {
        let mut sync = ToneSync::new();
        let mut sink = RecordingSink::default();

        assert!(sync.sync(&mut sink, true, false));
        assert_eq!(sync.playing(), Some(Tone::Blinker));
        assert_eq!(sink.events, vec![ToneEvent::Play(Tone::Blinker)]);
    }

    #[test]
    fn test_keeps_looping_same_tone() {
        let mut sync = ToneSync::new();
        let mut sink = RecordingSink::default();

        sync.sync(&mut sink, true, false);
        assert!(!sync.sync(&mut sink, true, false));
        assert_eq!(sink.events.len(), 1);
    }

    #[test]
    fn test_stops_when_inactive() {
        let mut sync = ToneSync::new();
        let mut sink = RecordingSink::default();

        sync.sync(&mut sink, true, false);
        assert!(sync.sync(&mut sink, false, false));
        assert_eq!(sync.playing(), None);
        assert_eq!(
            sink.events,
            vec![ToneEvent::Play(Tone::Blinker), ToneEvent::Stop(Tone::Blinker)]
        );
    }

    #[test]
    fn test_category_switch_restarts() {
        let mut sync = ToneSync::new();
        let mut sink = RecordingSink::default();

        sync.sync(&mut sink, true, false);
        sync.sync(&mut sink, true, true);
        assert_eq!(sync.playing(), Some(Tone::Hazard));
        assert_eq!(
            sink.events,
            vec![
                ToneEvent::Play(Tone::Blinker),
                ToneEvent::Stop(Tone::Blinker),
                ToneEvent::Play(Tone::Hazard),
            ]
        );
        assert!(sink.at_most_one_playing());
    }

    #[test]
    fn test_idle_inactive_sends_nothing() {
        let mut sync = ToneSync::new();
        let mut sink = RecordingSink::default();
        assert!(!sync.sync(&mut sink, false, false));
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_unit_sink_accepts_commands() {
        let mut sync = ToneSync::new();
        assert!(sync.sync(&mut (), true, true));
        assert_eq!(sync.playing(), Some(Tone::Hazard));
    }
}
