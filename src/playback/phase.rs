//! Playback phase sum type.

use serde::{Deserialize, Serialize};

/// The engine's cursor into a workout: the atomic timed unit of playback.
///
/// Index invariants (outside `Completed`): `round` is a valid index into the
/// workout's rounds, `exercise`/`after_exercise` a valid index into that
/// round's exercise list, and `repetition` is below the round's repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// Performing an exercise.
    Exercising {
        round: usize,
        exercise: usize,
        repetition: u32,
    },
    /// Resting after the exercise at `after_exercise` within a repetition.
    Resting {
        round: usize,
        after_exercise: usize,
        repetition: u32,
    },
    /// Terminal: no automatic transition leaves this state.
    Completed,
}

impl PlaybackPhase {
    /// The first phase of any workout.
    pub const fn initial() -> Self {
        Self::Exercising {
            round: 0,
            exercise: 0,
            repetition: 0,
        }
    }

    #[inline]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Resting { .. })
    }

    #[inline]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Default for PlaybackPhase {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let phase = PlaybackPhase::initial();
        assert_eq!(
            phase,
            PlaybackPhase::Exercising {
                round: 0,
                exercise: 0,
                repetition: 0
            }
        );
        assert!(!phase.is_rest());
        assert!(!phase.is_completed());
    }

    #[test]
    fn test_predicates() {
        let rest = PlaybackPhase::Resting {
            round: 0,
            after_exercise: 1,
            repetition: 0,
        };
        assert!(rest.is_rest());
        assert!(PlaybackPhase::Completed.is_completed());
    }
}
