//! Phase transition rules.
//!
//! Forward and backward traversal over a workout definition, as pure
//! functions so they are testable without a clock. Backward traversal is the
//! inverse of forward with one deliberate asymmetry: stepping back from
//! `Completed` lands on the last exercise, never on a trailing rest.

use super::phase::PlaybackPhase;
use crate::workout::WorkoutDefinition;

/// Compute the phase that follows `phase`. `Completed` is terminal.
///
/// When a round has rest time, a rest phase follows every exercise,
/// including the last exercise of the final repetition.
pub(crate) fn advance(workout: &WorkoutDefinition, phase: PlaybackPhase) -> PlaybackPhase {
    match phase {
        PlaybackPhase::Exercising {
            round,
            exercise,
            repetition,
        } => {
            if workout.rounds[round].has_rest() {
                PlaybackPhase::Resting {
                    round,
                    after_exercise: exercise,
                    repetition,
                }
            } else {
                past_exercise(workout, round, exercise, repetition)
            }
        }
        PlaybackPhase::Resting {
            round,
            after_exercise,
            repetition,
        } => past_exercise(workout, round, after_exercise, repetition),
        PlaybackPhase::Completed => PlaybackPhase::Completed,
    }
}

/// Advance past the exercise at (`round`, `exercise`, `repetition`), any rest
/// already spent.
fn past_exercise(
    workout: &WorkoutDefinition,
    round: usize,
    exercise: usize,
    repetition: u32,
) -> PlaybackPhase {
    let def = &workout.rounds[round];
    if exercise + 1 < def.exercises.len() {
        PlaybackPhase::Exercising {
            round,
            exercise: exercise + 1,
            repetition,
        }
    } else if repetition + 1 < def.repeat_count {
        PlaybackPhase::Exercising {
            round,
            exercise: 0,
            repetition: repetition + 1,
        }
    } else if round + 1 < workout.rounds.len() {
        PlaybackPhase::Exercising {
            round: round + 1,
            exercise: 0,
            repetition: 0,
        }
    } else {
        PlaybackPhase::Completed
    }
}

/// Compute the phase that precedes `phase`.
///
/// A rest phase steps back exactly like the exercise it follows, so the
/// result is always an exercise phase (never an earlier rest). At the very
/// first position the phase is returned unchanged. From `Completed` this
/// lands on the last exercise of the last round even when that round has
/// rest time.
pub(crate) fn retreat(workout: &WorkoutDefinition, phase: PlaybackPhase) -> PlaybackPhase {
    match phase {
        PlaybackPhase::Exercising {
            round,
            exercise,
            repetition,
        }
        | PlaybackPhase::Resting {
            round,
            after_exercise: exercise,
            repetition,
        } => {
            if exercise > 0 {
                PlaybackPhase::Exercising {
                    round,
                    exercise: exercise - 1,
                    repetition,
                }
            } else if repetition > 0 {
                PlaybackPhase::Exercising {
                    round,
                    exercise: workout.rounds[round].exercises.len() - 1,
                    repetition: repetition - 1,
                }
            } else if round > 0 {
                let prev = &workout.rounds[round - 1];
                PlaybackPhase::Exercising {
                    round: round - 1,
                    exercise: prev.exercises.len() - 1,
                    repetition: prev.repeat_count - 1,
                }
            } else {
                phase
            }
        }
        PlaybackPhase::Completed => {
            let round = workout.rounds.len() - 1;
            let last = &workout.rounds[round];
            PlaybackPhase::Exercising {
                round,
                exercise: last.exercises.len() - 1,
                repetition: last.repeat_count - 1,
            }
        }
    }
}

/// Duration of `phase` in seconds. Zero for `Completed`.
pub(crate) fn phase_duration(workout: &WorkoutDefinition, phase: PlaybackPhase) -> f64 {
    match phase {
        PlaybackPhase::Exercising { round, .. } => workout.rounds[round].exercise_duration,
        PlaybackPhase::Resting { round, .. } => workout.rounds[round].rest_duration,
        PlaybackPhase::Completed => 0.0,
    }
}
