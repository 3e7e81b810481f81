//! Terminal feedback
//!
//! A terminal cannot play a 440 Hz sine, but it can ring its bell. Success
//! rings once, rejections ring twice so the operator can tell them apart
//! without looking.

use std::io::{self, Write};

use crate::core::models::{Tone, Waveform};
use crate::core::ports::Feedback;

const BELL: &str = "\x07";

/// Rings the terminal bell on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalFeedback;

impl TerminalFeedback {
    /// Bell characters for a tone
    #[must_use]
    pub fn bells(tone: Tone) -> String {
        match tone.waveform {
            Waveform::Sine => BELL.to_string(),
            Waveform::Square => BELL.repeat(2),
        }
    }
}

impl Feedback for TerminalFeedback {
    fn play(&self, tone: Tone) {
        let mut stderr = io::stderr().lock();
        // feedback is best effort
        let _ = stderr.write_all(Self::bells(tone).as_bytes());
        let _ = stderr.flush();
    }
}

/// Feedback that does nothing (JSON output, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl Feedback for SilentFeedback {
    fn play(&self, _tone: Tone) {}
}
