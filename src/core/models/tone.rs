//! Feedback tones
//!
//! A tone request handed to the feedback collaborator. Adapters decide how
//! (or whether) to make it audible.

use serde::{Deserialize, Serialize};

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Soft tone, used for success
    Sine,
    /// Harsh tone, used for rejections
    Square,
}

/// A tone request: frequency, duration and waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    /// Pitch in hertz
    pub frequency_hz: u32,
    /// Length in milliseconds
    pub duration_ms: u32,
    /// Waveform
    pub waveform: Waveform,
}

impl Tone {
    /// Short high tone for an accepted scan
    pub const SUCCESS: Self = Self {
        frequency_hz: 440,
        duration_ms: 180,
        waveform: Waveform::Sine,
    };

    /// Long low tone for any rejection
    pub const ERROR: Self = Self {
        frequency_hz: 220,
        duration_ms: 400,
        waveform: Waveform::Square,
    };
}
