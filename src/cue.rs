//! Phase-boundary cue configuration.
//!
//! The engine only signals that a boundary was crossed; emitting the actual
//! sound is the audio collaborator's job. [`CueSettings`] gates that signal
//! and selects which named cue to play, and is shared as an `Arc` so a
//! settings screen can flip it while a session is live.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

/// The enumerated cue sounds the audio collaborator can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CueSound {
    #[default]
    Ding,
    Beep,
    Whistle,
    Tick,
    Camera,
}

impl CueSound {
    pub const ALL: [CueSound; 5] = [
        CueSound::Ding,
        CueSound::Beep,
        CueSound::Whistle,
        CueSound::Tick,
        CueSound::Camera,
    ];

    /// Display name for settings UIs.
    pub fn name(&self) -> &'static str {
        match self {
            CueSound::Ding => "Ding",
            CueSound::Beep => "Beep",
            CueSound::Whistle => "Whistle",
            CueSound::Tick => "Tick",
            CueSound::Camera => "Camera",
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            CueSound::Ding => 0,
            CueSound::Beep => 1,
            CueSound::Whistle => 2,
            CueSound::Tick => 3,
            CueSound::Camera => 4,
        }
    }

    fn from_u8(val: u8) -> Self {
        match val {
            1 => CueSound::Beep,
            2 => CueSound::Whistle,
            3 => CueSound::Tick,
            4 => CueSound::Camera,
            _ => CueSound::Ding,
        }
    }
}

/// Shared cue configuration: enabled flag plus the selected sound.
#[derive(Debug)]
pub struct CueSettings {
    enabled: AtomicBool,
    sound: AtomicU8,
}

impl Default for CueSettings {
    fn default() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            sound: AtomicU8::new(CueSound::default().to_u8()),
        }
    }
}

impl CueSettings {
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub fn sound(&self) -> CueSound {
        CueSound::from_u8(self.sound.load(Ordering::Acquire))
    }

    pub fn set_sound(&self, sound: CueSound) {
        self.sound.store(sound.to_u8(), Ordering::Release);
    }

    /// The cue to play at a boundary, or `None` when cues are disabled.
    pub fn active_cue(&self) -> Option<CueSound> {
        self.enabled().then(|| self.sound())
    }
}
