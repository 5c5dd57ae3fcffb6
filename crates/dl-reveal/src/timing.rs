//! Timing profiles for reveal sequencing

use serde::{Deserialize, Serialize};

/// Pacing profile for a reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RevealProfile {
    /// Broadcast pacing
    #[default]
    Normal,
    /// Fast mode for rehearsals
    Turbo,
    /// No delays (for testing)
    Instant,
    /// Custom timing
    Custom,
}

impl RevealProfile {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Turbo => "Turbo",
            Self::Instant => "Instant",
            Self::Custom => "Custom",
        }
    }
}

/// Timing constants for one reveal sequence
///
/// This is the single source of truth for pacing: the scheduler's firing
/// schedule and every caller-visible duration estimate are derived from the
/// same instance, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTiming {
    /// Profile type
    pub profile: RevealProfile,

    /// Delay before the first reveal begins (ms)
    pub pre_delay_ms: f64,

    /// Slide-in transition for one reveal card (ms)
    pub slide_in_ms: f64,

    /// Time a reveal card stays centered on screen (ms)
    pub hold_ms: f64,

    /// Slide-out transition (ms)
    pub slide_out_ms: f64,

    /// Pause between one card leaving and the next entering (ms)
    pub step_gap_ms: f64,

    /// Trailing celebration time after the last elimination (ms). The
    /// scheduler never waits on this; it exists here so the caller's
    /// winner-dialog countdown is derived from the same profile.
    pub winner_flourish_ms: f64,
}

impl RevealTiming {
    /// Broadcast pacing
    pub fn normal() -> Self {
        Self {
            profile: RevealProfile::Normal,
            pre_delay_ms: 500.0,
            slide_in_ms: 800.0,
            hold_ms: 3000.0,
            slide_out_ms: 800.0,
            step_gap_ms: 800.0,
            winner_flourish_ms: 4000.0,
        }
    }

    /// Rehearsal pacing
    pub fn turbo() -> Self {
        Self {
            profile: RevealProfile::Turbo,
            pre_delay_ms: 250.0,
            slide_in_ms: 300.0,
            hold_ms: 1200.0,
            slide_out_ms: 300.0,
            step_gap_ms: 300.0,
            winner_flourish_ms: 1500.0,
        }
    }

    /// Zero-delay pacing (for testing)
    pub fn instant() -> Self {
        Self {
            profile: RevealProfile::Instant,
            pre_delay_ms: 0.0,
            slide_in_ms: 0.0,
            hold_ms: 0.0,
            slide_out_ms: 0.0,
            step_gap_ms: 0.0,
            winner_flourish_ms: 0.0,
        }
    }

    /// Get timing for a profile
    pub fn from_profile(profile: RevealProfile) -> Self {
        match profile {
            RevealProfile::Normal => Self::normal(),
            RevealProfile::Turbo => Self::turbo(),
            RevealProfile::Instant => Self::instant(),
            RevealProfile::Custom => Self::normal(),
        }
    }

    /// Scale all pacing by a factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: RevealProfile::Custom,
            pre_delay_ms: self.pre_delay_ms * factor,
            slide_in_ms: self.slide_in_ms * factor,
            hold_ms: self.hold_ms * factor,
            slide_out_ms: self.slide_out_ms * factor,
            step_gap_ms: self.step_gap_ms * factor,
            winner_flourish_ms: self.winner_flourish_ms * factor,
        }
    }

    /// On-screen time for a single reveal card
    pub fn display_duration_ms(&self) -> f64 {
        self.slide_in_ms + self.hold_ms + self.slide_out_ms
    }

    /// Start-to-start spacing between consecutive reveals
    pub fn step_interval_ms(&self) -> f64 {
        self.display_duration_ms() + self.step_gap_ms
    }

    /// Time from start until `n` reveals have fully played out, including
    /// the final card's gap
    pub fn sequence_duration_ms(&self, n: usize) -> f64 {
        self.pre_delay_ms + n as f64 * self.step_interval_ms()
    }

    /// When the caller may present the winner dialog: the full sequence
    /// plus the trailing flourish
    pub fn presentation_duration_ms(&self, n: usize) -> f64 {
        self.sequence_duration_ms(n) + self.winner_flourish_ms
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::normal()
    }
}
