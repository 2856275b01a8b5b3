//! WAV file loading
//!
//! Decodes WAV files into [`AudioBuffer`]s for the rendering layer. This is
//! a deliberately small surface: integer and float PCM from `hound`,
//! normalized to f32 planes. Anything fancier (FLAC, MP3, resampling) lives
//! with the host application's loader.

use crate::types::{AudioBuffer, BufferError};
use hound::SampleFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioFileError {
    #[error("Failed to open WAV file '{path}': {reason}")]
    OpenFailed { path: PathBuf, reason: String },
    #[error("Failed to decode WAV samples: {0}")]
    DecodeFailed(#[from] hound::Error),
    #[error("WAV data has an invalid shape: {0}")]
    InvalidShape(#[from] BufferError),
}

pub type AudioFileResult<T> = Result<T, AudioFileError>;

/// Load a WAV file into an [`AudioBuffer`].
///
/// Integer PCM (8/16/24/32 bit) is normalized into -1.0..=1.0; float PCM is
/// passed through unclamped, matching the buffer's nominal-range contract.
pub fn load_wav(path: &Path) -> AudioFileResult<AudioBuffer> {
    let mut reader = hound::WavReader::open(path).map_err(|e| AudioFileError::OpenFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let spec = reader.spec();
    log::debug!(
        "load_wav: {:?} - {} ch, {} Hz, {} bit {:?}",
        path,
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            // Full-scale for signed integers of this bit depth
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let buffer = AudioBuffer::from_interleaved(&interleaved, spec.channels as usize, spec.sample_rate)?;
    log::debug!(
        "load_wav: Decoded {} samples per channel ({:.2}s)",
        buffer.len(),
        buffer.duration_secs()
    );
    Ok(buffer)
}
