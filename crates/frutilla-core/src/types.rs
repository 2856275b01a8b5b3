//! Common types for Frutilla
//!
//! This module contains the fundamental audio types shared across the
//! Frutilla frontend, most importantly the channel-planar [`AudioBuffer`]
//! consumed by the waveform renderer.

use std::ops::Index;
use std::sync::Arc;
use thiserror::Error;

/// Default sample rate (44.1kHz - CD standard, matches decoded file content)
/// This is a fallback; the actual rate always travels with the buffer.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Audio sample type (32-bit float, nominal range -1.0..=1.0)
pub type Sample = f32;

/// Errors raised when constructing an audio buffer with an invalid shape.
///
/// Shape problems are constructor errors on purpose: once a buffer exists,
/// consumers can rely on equal-length channel planes and never re-validate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Audio buffer must have at least one channel")]
    NoChannels,
    #[error("Channel {channel} has {got} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        got: usize,
    },
    #[error("Interleaved data length {len} is not a multiple of {channels} channels")]
    InterleavedRemainder { len: usize, channels: usize },
    #[error("Sample rate must be greater than zero")]
    InvalidSampleRate,
}

/// A decoded block of audio: one `f32` plane per channel plus a sample rate.
///
/// Planes always have equal length; channel 0 is left (or mono). The buffer
/// is immutable once built - callers that need different content construct a
/// new buffer and rebind it, typically through an [`Arc`].
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    channels: Vec<Vec<Sample>>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Build a buffer from channel planes, validating the shape.
    pub fn new(channels: Vec<Vec<Sample>>, sample_rate: u32) -> Result<Self, BufferError> {
        if sample_rate == 0 {
            return Err(BufferError::InvalidSampleRate);
        }
        let first_len = match channels.first() {
            Some(plane) => plane.len(),
            None => return Err(BufferError::NoChannels),
        };
        for (idx, plane) in channels.iter().enumerate().skip(1) {
            if plane.len() != first_len {
                return Err(BufferError::ChannelLengthMismatch {
                    channel: idx,
                    expected: first_len,
                    got: plane.len(),
                });
            }
        }
        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Build a single-channel buffer.
    pub fn from_mono(samples: Vec<Sample>, sample_rate: u32) -> Self {
        assert!(sample_rate > 0, "Sample rate must be greater than zero");
        Self {
            channels: vec![samples],
            sample_rate,
        }
    }

    /// Build a two-channel buffer from separate left/right planes.
    pub fn from_stereo(
        left: Vec<Sample>,
        right: Vec<Sample>,
        sample_rate: u32,
    ) -> Result<Self, BufferError> {
        Self::new(vec![left, right], sample_rate)
    }

    /// Build a buffer from interleaved frames (L R L R ... for stereo).
    pub fn from_interleaved(
        interleaved: &[Sample],
        channel_count: usize,
        sample_rate: u32,
    ) -> Result<Self, BufferError> {
        if channel_count == 0 {
            return Err(BufferError::NoChannels);
        }
        if interleaved.len() % channel_count != 0 {
            return Err(BufferError::InterleavedRemainder {
                len: interleaved.len(),
                channels: channel_count,
            });
        }
        let frames = interleaved.len() / channel_count;
        let mut channels = vec![Vec::with_capacity(frames); channel_count];
        for frame in interleaved.chunks_exact(channel_count) {
            for (ch, &sample) in frame.iter().enumerate() {
                channels[ch].push(sample);
            }
        }
        Self::new(channels, sample_rate)
    }

    /// A silent buffer of the given shape, handy for tests and placeholders.
    pub fn silence(channel_count: usize, len: usize, sample_rate: u32) -> Result<Self, BufferError> {
        Self::new(vec![vec![0.0; len]; channel_count], sample_rate)
    }

    /// Per-channel sample count (all planes share it).
    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Sample plane for a channel, `None` when the index is out of range.
    ///
    /// Renderer-side code goes through this accessor so a channel-count
    /// mismatch degrades instead of panicking.
    pub fn channel(&self, idx: usize) -> Option<&[Sample]> {
        self.channels.get(idx).map(|plane| plane.as_slice())
    }

    /// Buffer duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Interleave the planes back into frames (L R L R ... for stereo).
    pub fn to_interleaved(&self) -> Vec<Sample> {
        let mut out = Vec::with_capacity(self.len() * self.channel_count());
        for frame in 0..self.len() {
            for plane in &self.channels {
                out.push(plane[frame]);
            }
        }
        out
    }

    /// Wrap in an [`Arc`] for sharing with a renderer.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Index<usize> for AudioBuffer {
    type Output = [Sample];

    fn index(&self, channel: usize) -> &Self::Output {
        &self.channels[channel]
    }
}
