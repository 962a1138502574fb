//! Playback engine: the phase cursor, its progress clock, and the
//! deferred-resume scheduling around navigation commands.
//!
//! All mutation happens inside [`PlaybackEngine::tick`] or the explicit
//! command methods; drive both from one sequential context. The engine never
//! spawns threads or timers itself - the host delivers ticks on a fixed
//! schedule and the engine does the rest.

use std::sync::Arc;

use crossbeam_channel::Receiver;
use tracing::debug;

use super::clock::ProgressClock;
use super::events::{EngineEvent, EventHub};
use super::fsm;
use super::phase::PlaybackPhase;
use crate::config::EngineConfig;
use crate::cue::CueSettings;
use crate::workout::{RoundDefinition, WorkoutDefinition};
use crate::Result;

/// Display label for rest phases.
pub const REST_LABEL: &str = "REST";
/// Display label for the completed state.
pub const COMPLETED_LABEL: &str = "Completed";

/// A scheduled clock resume, keyed by the generation at which it was issued.
/// Every command bumps the engine's generation, so a resume left over from an
/// earlier command can never start the clock.
#[derive(Debug, Clone, Copy)]
struct PendingResume {
    generation: u64,
    remaining: f64,
}

/// Walks a [`WorkoutDefinition`] through its timed phases.
///
/// One engine owns one definition for one session; the definition is
/// validated up front and read-only afterwards.
pub struct PlaybackEngine {
    workout: WorkoutDefinition,
    config: EngineConfig,
    phase: PlaybackPhase,
    clock: ProgressClock,
    pending_resume: Option<PendingResume>,
    generation: u64,
    events: EventHub,
    cues: Arc<CueSettings>,
}

impl PlaybackEngine {
    /// Build an engine for one playback session. Refuses degenerate
    /// definitions and configs outright rather than misbehaving later.
    pub fn new(workout: WorkoutDefinition, config: EngineConfig) -> Result<Self> {
        workout.validate()?;
        config.validate()?;
        let clock = ProgressClock::new(config.tick_interval);
        Ok(Self {
            workout,
            config,
            phase: PlaybackPhase::initial(),
            clock,
            pending_resume: None,
            generation: 0,
            events: EventHub::default(),
            cues: Arc::new(CueSettings::default()),
        })
    }

    /// Share externally owned cue settings (e.g. from a settings screen).
    pub fn with_cue_settings(mut self, cues: Arc<CueSettings>) -> Self {
        self.cues = cues;
        self
    }

    pub fn workout(&self) -> &WorkoutDefinition {
        &self.workout
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn remaining_fraction(&self) -> f64 {
        self.clock.remaining_fraction()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Read access to the progress clock.
    pub fn clock(&self) -> &ProgressClock {
        &self.clock
    }

    pub fn cue_settings(&self) -> &Arc<CueSettings> {
        &self.cues
    }

    /// Register a subscriber for engine events.
    pub fn subscribe(&mut self) -> Receiver<EngineEvent> {
        self.events.subscribe()
    }

    // --- derived read-only properties -------------------------------------

    /// Round the cursor is in; the last round once completed.
    pub fn current_round_index(&self) -> usize {
        match self.phase {
            PlaybackPhase::Exercising { round, .. } | PlaybackPhase::Resting { round, .. } => round,
            PlaybackPhase::Completed => self.workout.rounds.len() - 1,
        }
    }

    /// Exercise the cursor is on. During rest this is the exercise just
    /// finished, which presentation highlights as current.
    pub fn current_exercise_index(&self) -> usize {
        match self.phase {
            PlaybackPhase::Exercising { exercise, .. } => exercise,
            PlaybackPhase::Resting { after_exercise, .. } => after_exercise,
            PlaybackPhase::Completed => self.last_round().exercises.len() - 1,
        }
    }

    /// Repetition the cursor is in; the round's repeat count once completed.
    pub fn current_repetition(&self) -> u32 {
        match self.phase {
            PlaybackPhase::Exercising { repetition, .. }
            | PlaybackPhase::Resting { repetition, .. } => repetition,
            PlaybackPhase::Completed => self.last_round().repeat_count,
        }
    }

    pub fn is_rest_phase(&self) -> bool {
        self.phase.is_rest()
    }

    /// Exercise name, [`REST_LABEL`], or [`COMPLETED_LABEL`].
    pub fn phase_label(&self) -> &str {
        match self.phase {
            PlaybackPhase::Exercising {
                round, exercise, ..
            } => &self.workout.rounds[round].exercises[exercise],
            PlaybackPhase::Resting { .. } => REST_LABEL,
            PlaybackPhase::Completed => COMPLETED_LABEL,
        }
    }

    /// Duration of the current phase in seconds. Zero once completed.
    pub fn phase_duration(&self) -> f64 {
        fsm::phase_duration(&self.workout, self.phase)
    }

    pub fn remaining_seconds(&self) -> f64 {
        self.phase_duration() * self.clock.remaining_fraction()
    }

    /// Remaining time as an `MM:SS` countdown label.
    pub fn time_label(&self) -> String {
        format_time(self.remaining_seconds())
    }

    /// Display progress: the remaining fraction, or 0.0 once completed.
    pub fn progress(&self) -> f64 {
        if self.phase.is_completed() {
            0.0
        } else {
            self.clock.remaining_fraction()
        }
    }

    // --- commands ---------------------------------------------------------

    /// Toggle run state. A boundary cue fires on the paused-to-playing edge
    /// only; calling this twice in a row ends up paused, not double-started.
    pub fn play(&mut self) {
        self.cancel_pending_resume();
        if self.clock.is_running() {
            debug!("pause");
            self.clock.set_running(false);
        } else {
            debug!("play");
            self.events.emit(EngineEvent::BoundaryCrossed {
                cue: self.cues.active_cue(),
            });
            self.clock.set_running(true);
        }
    }

    /// Stop consuming ticks. Phase and fraction are untouched.
    pub fn pause(&mut self) {
        self.cancel_pending_resume();
        self.clock.set_running(false);
    }

    /// Skip forward one phase. While running, the clock pauses for the
    /// configured resume delay before counting down again.
    pub fn next(&mut self) {
        let was_running = self.take_run_state();
        debug!(phase = ?self.phase, "next");
        self.transition_to(fsm::advance(&self.workout, self.phase));
        self.schedule_resume(was_running);
    }

    /// Step back one phase. At the very first phase this stays put but still
    /// refills the countdown.
    pub fn previous(&mut self) {
        let was_running = self.take_run_state();
        debug!(phase = ?self.phase, "previous");
        self.transition_to(fsm::retreat(&self.workout, self.phase));
        self.clock.reset();
        self.schedule_resume(was_running);
    }

    /// Jump back to the first phase with a full countdown, resuming per the
    /// prior run state.
    pub fn restart(&mut self) {
        let was_running = self.take_run_state();
        debug!("restart");
        self.transition_to(PlaybackPhase::initial());
        self.clock.reset();
        self.schedule_resume(was_running);
    }

    /// Consume one clock tick. Call on a fixed schedule from the host timer.
    /// While paused this only advances a pending deferred resume; the tick
    /// that completes the delay does not also decrement the phase.
    pub fn tick(&mut self) {
        if let Some(pending) = self.pending_resume {
            self.pending_resume = None;
            if pending.generation == self.generation {
                let remaining = pending.remaining - self.config.tick_interval;
                if remaining > 0.0 {
                    self.pending_resume = Some(PendingResume {
                        remaining,
                        ..pending
                    });
                    return;
                }
                self.clock.set_running(true);
                return;
            }
            // Stale resume from a superseded command; drop it.
        }

        if !self.clock.is_running() {
            return;
        }

        // play() on the finished screen restarts the clock; the completed
        // state has no time to consume, so the next tick pauses it again.
        if self.phase.is_completed() {
            self.clock.set_running(false);
            return;
        }

        let exhausted = self.clock.tick(self.phase_duration());
        self.events.emit(EngineEvent::Tick {
            remaining_fraction: self.clock.remaining_fraction(),
        });
        if exhausted {
            self.transition_to(fsm::advance(&self.workout, self.phase));
        }
    }

    // --- internals --------------------------------------------------------

    /// Move the cursor, refill the countdown, and fire boundary events.
    /// Moving to the phase we are already in fires nothing.
    fn transition_to(&mut self, next: PlaybackPhase) {
        if next == self.phase {
            return;
        }
        let from = self.phase;
        self.phase = next;
        self.clock.reset();
        if next.is_completed() {
            self.clock.set_running(false);
        }
        self.events.emit(EngineEvent::PhaseChanged { from, to: next });
        self.events.emit(EngineEvent::BoundaryCrossed {
            cue: self.cues.active_cue(),
        });
    }

    /// Record whether playback was live (running, or about to resume), then
    /// halt the clock and orphan any pending resume.
    fn take_run_state(&mut self) -> bool {
        let was_running = self.clock.is_running() || self.pending_resume.is_some();
        self.cancel_pending_resume();
        self.clock.set_running(false);
        was_running
    }

    fn cancel_pending_resume(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending_resume = None;
    }

    /// Arm the deferred resume. Nothing is armed when playback was paused or
    /// the workout just completed.
    fn schedule_resume(&mut self, was_running: bool) {
        if !was_running || self.phase.is_completed() {
            return;
        }
        if self.config.resume_delay <= 0.0 {
            self.clock.set_running(true);
            return;
        }
        self.pending_resume = Some(PendingResume {
            generation: self.generation,
            remaining: self.config.resume_delay,
        });
    }

    fn last_round(&self) -> &RoundDefinition {
        // Construction guarantees at least one round.
        &self.workout.rounds[self.workout.rounds.len() - 1]
    }
}

fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
