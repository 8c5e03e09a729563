//! Terminal bell audio.

use serpent::{AudioCue, AudioSink};
use std::io::{self, Write};

/// Rings the terminal bell for cues worth interrupting the player for.
pub struct BellAudio {
    enabled: bool,
}

impl BellAudio {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Number of bells for a cue.
    pub fn rings(cue: AudioCue) -> usize {
        match cue {
            AudioCue::Ate => 0,
            AudioCue::EnergyLow | AudioCue::LifeLost => 1,
            AudioCue::NewRecord | AudioCue::GameOver => 2,
        }
    }
}

impl AudioSink for BellAudio {
    fn play(&mut self, cue: AudioCue) {
        let rings = Self::rings(cue);
        if !self.enabled || rings == 0 {
            return;
        }
        let mut stdout = io::stdout();
        // Audio is best effort
        let _ = stdout.write_all(&[0x07].repeat(rings));
        let _ = stdout.flush();
    }
}
