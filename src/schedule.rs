//! Flattened phase schedule.
//!
//! Walks the same forward rule as live playback to produce the complete
//! ordered list of timed phases. Useful for timeline previews and for
//! checking a playback run against an independently constructed sequence.

use crate::playback::{fsm, PlaybackPhase};
use crate::workout::WorkoutDefinition;
use crate::Result;

/// One timed slot in the flattened schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledPhase {
    pub phase: PlaybackPhase,
    /// Seconds this slot lasts.
    pub duration: f64,
}

/// The complete, ordered sequence of timed phases for a workout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhaseSchedule {
    slots: Vec<ScheduledPhase>,
}

impl PhaseSchedule {
    /// Flatten a workout into its timed phase sequence by walking the
    /// forward transition rule from the initial phase. `Completed` carries
    /// no time and is not included.
    pub fn flatten(workout: &WorkoutDefinition) -> Result<Self> {
        workout.validate()?;
        let mut slots = Vec::new();
        let mut phase = PlaybackPhase::initial();
        while !phase.is_completed() {
            slots.push(ScheduledPhase {
                phase,
                duration: fsm::phase_duration(workout, phase),
            });
            phase = fsm::advance(workout, phase);
        }
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[ScheduledPhase] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total workout length in seconds.
    pub fn total_duration(&self) -> f64 {
        self.slots.iter().map(|slot| slot.duration).sum()
    }

    pub fn phases(&self) -> impl Iterator<Item = PlaybackPhase> + '_ {
        self.slots.iter().map(|slot| slot.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::RoundDefinition;

    #[test]
    fn test_two_exercise_round_with_rest() {
        let workout = WorkoutDefinition::new(
            "Test",
            vec![RoundDefinition::new(["A", "B"], 30.0, 10.0, 2)],
        );
        let schedule = PhaseSchedule::flatten(&workout).unwrap();

        // Exercise and rest alternate; rest trails the final repetition too.
        assert_eq!(schedule.len(), 8);
        assert!((schedule.total_duration() - (4.0 * 30.0 + 4.0 * 10.0)).abs() < 1e-9);
        assert!(schedule
            .slots()
            .iter()
            .step_by(2)
            .all(|slot| !slot.phase.is_rest()));
        assert!(schedule
            .slots()
            .iter()
            .skip(1)
            .step_by(2)
            .all(|slot| slot.phase.is_rest()));
    }

    #[test]
    fn test_zero_rest_round_has_no_rest_slots() {
        let workout = WorkoutDefinition::new(
            "Test",
            vec![RoundDefinition::new(["A", "B", "C"], 30.0, 0.0, 4)],
        );
        let schedule = PhaseSchedule::flatten(&workout).unwrap();
        assert_eq!(schedule.len(), 12);
        assert!(schedule.phases().all(|phase| !phase.is_rest()));
    }

    #[test]
    fn test_single_exercise_repeats_with_trailing_rest() {
        let workout = WorkoutDefinition::new(
            "Test",
            vec![RoundDefinition::new(["A"], 30.0, 10.0, 3)],
        );
        let schedule = PhaseSchedule::flatten(&workout).unwrap();

        let rests: Vec<bool> = schedule.phases().map(|p| p.is_rest()).collect();
        assert_eq!(rests, vec![false, true, false, true, false, true]);
    }

    #[test]
    fn test_rejects_invalid_workout() {
        let workout = WorkoutDefinition::new("Bad", vec![]);
        assert!(PhaseSchedule::flatten(&workout).is_err());
    }

    #[test]
    fn test_example_total_duration() {
        let schedule = PhaseSchedule::flatten(&WorkoutDefinition::example()).unwrap();
        // 60 + 2 repetitions of 3x(45+15) + 60
        assert!((schedule.total_duration() - (60.0 + 2.0 * 3.0 * 60.0 + 60.0)).abs() < 1e-9);
    }
}
