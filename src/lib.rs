//! Workout playback engine: a phase state machine, a progress clock, and
//! bidirectional navigation over a static workout definition.
//!
//! # Primary API
//!
//! - [`WorkoutDefinition`] / [`RoundDefinition`]: the static description of
//!   rounds, exercises, and timings
//! - [`PlaybackEngine`]: phase cursor, countdown, and the
//!   play/pause/next/previous/restart commands
//! - [`PhaseSchedule`]: the flattened timed phase sequence of a workout
//! - [`CueSettings`] / [`CueSound`]: gating and selection of the
//!   phase-boundary cue the audio collaborator plays
//!
//! The engine owns no timer: the host delivers ticks on a fixed schedule via
//! [`PlaybackEngine::tick`] and reads the derived display properties after
//! each one. Presentation and audio layers subscribe to [`EngineEvent`]s.
//!
//! # Example
//!
//! ```
//! use hiit_core::{EngineConfig, PlaybackEngine, WorkoutDefinition};
//!
//! let workout = WorkoutDefinition::example();
//! let mut engine = PlaybackEngine::new(workout, EngineConfig::default())?;
//!
//! engine.play();
//! engine.tick();
//! assert!(engine.remaining_fraction() < 1.0);
//! # Ok::<(), hiit_core::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::EngineConfig;

mod workout;
pub use workout::{RoundDefinition, WorkoutDefinition};

mod cue;
pub use cue::{CueSettings, CueSound};

mod schedule;
pub use schedule::{PhaseSchedule, ScheduledPhase};

pub(crate) mod playback;
pub use playback::{
    EngineEvent, PlaybackEngine, PlaybackPhase, ProgressClock, COMPLETED_LABEL, REST_LABEL,
};
