//! Host-side test doubles: a recording tone sink and an in-memory framebuffer.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::audio::{Tone, ToneSink};
use crate::colors::BLACK;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToneEvent {
    Play(Tone),
    Stop(Tone),
}

/// Sink that records every command it receives.
#[derive(Default, Debug)]
pub struct RecordingSink {
    pub events: Vec<ToneEvent>,
}

impl RecordingSink {
    /// Replay the log and check that no two tones ever overlapped.
    pub fn at_most_one_playing(&self) -> bool {
        let mut playing: Option<Tone> = None;
        for event in &self.events {
            match *event {
                ToneEvent::Play(tone) => {
                    if playing.is_some_and(|p| p != tone) {
                        return false;
                    }
                    playing = Some(tone);
                }
                ToneEvent::Stop(tone) => {
                    if playing == Some(tone) {
                        playing = None;
                    }
                }
            }
        }
        true
    }

    /// Tone left sounding after the last command.
    pub fn now_playing(&self) -> Option<Tone> {
        let mut playing = None;
        for event in &self.events {
            match *event {
                ToneEvent::Play(tone) => playing = Some(tone),
                ToneEvent::Stop(tone) if playing == Some(tone) => playing = None,
                ToneEvent::Stop(_) => {}
            }
        }
        playing
    }
}

impl ToneSink for RecordingSink {
    fn play(
        &mut self,
        tone: Tone,
    ) {
        self.events.push(ToneEvent::Play(tone));
    }

    fn stop(
        &mut self,
        tone: Tone,
    ) {
        self.events.push(ToneEvent::Stop(tone));
    }
}

/// Heap-backed Rgb565 framebuffer for render tests.
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![BLACK; (size.width * size.height) as usize],
        }
    }

    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Number of pixels inside `area` that have exactly `color`.
    pub fn count_in(
        &self,
        area: &Rectangle,
        color: Rgb565,
    ) -> usize {
        area.points().filter(|&p| self.pixel(p) == Some(color)).count()
    }

    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        let (x, y) = (point.x, point.y);
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
