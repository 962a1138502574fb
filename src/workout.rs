//! Workout definition data model.
//!
//! Pure data consumed by the playback engine. The authoring/editing
//! collaborator owns validation UX; [`WorkoutDefinition::validate`] is the
//! engine's last line of defense against degenerate input.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A block of one or more exercises repeated a fixed number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundDefinition {
    /// Ordered exercise names. Must be non-empty to be playable.
    pub exercises: Vec<String>,
    /// Seconds spent on every exercise in this round. Must be positive.
    pub exercise_duration: f64,
    /// Seconds of rest inserted after each exercise. Zero disables rest.
    pub rest_duration: f64,
    /// How many times the whole exercise sequence runs. Must be at least 1.
    pub repeat_count: u32,
}

impl RoundDefinition {
    pub fn new<S: Into<String>>(
        exercises: impl IntoIterator<Item = S>,
        exercise_duration: f64,
        rest_duration: f64,
        repeat_count: u32,
    ) -> Self {
        Self {
            exercises: exercises.into_iter().map(Into::into).collect(),
            exercise_duration,
            rest_duration,
            repeat_count,
        }
    }

    /// Whether rest phases are inserted in this round.
    #[inline]
    pub fn has_rest(&self) -> bool {
        self.rest_duration > 0.0
    }
}

/// An ordered list of rounds, read-only for the lifetime of a playback
/// session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDefinition {
    /// Display name. May be empty; naming rules are the editor's concern.
    pub name: String,
    pub rounds: Vec<RoundDefinition>,
}

impl WorkoutDefinition {
    pub fn new(name: impl Into<String>, rounds: Vec<RoundDefinition>) -> Self {
        Self {
            name: name.into(),
            rounds,
        }
    }

    /// Check the preconditions the engine assumes: at least one round, at
    /// least one exercise per round, positive exercise durations,
    /// non-negative rest durations, repeat counts of at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.rounds.is_empty() {
            return Err(Error::EmptyWorkout);
        }
        for (round, def) in self.rounds.iter().enumerate() {
            if def.exercises.is_empty() {
                return Err(Error::EmptyRound { round });
            }
            if !def.exercise_duration.is_finite() || def.exercise_duration <= 0.0 {
                return Err(Error::InvalidExerciseDuration {
                    round,
                    seconds: def.exercise_duration,
                });
            }
            if !def.rest_duration.is_finite() || def.rest_duration < 0.0 {
                return Err(Error::InvalidRestDuration {
                    round,
                    seconds: def.rest_duration,
                });
            }
            if def.repeat_count < 1 {
                return Err(Error::InvalidRepeatCount {
                    round,
                    count: def.repeat_count,
                });
            }
        }
        Ok(())
    }

    /// A small mixed workout, handy for demos and tests.
    pub fn example() -> Self {
        Self::new(
            "Yoga Flow",
            vec![
                RoundDefinition::new(["Breath Awareness"], 60.0, 0.0, 1),
                RoundDefinition::new(
                    ["Cat-Cow", "Downward Dog", "Child's Pose"],
                    45.0,
                    15.0,
                    2,
                ),
                RoundDefinition::new(["Seated Forward Fold"], 60.0, 0.0, 1),
            ],
        )
    }

    /// The workouts a fresh install ships with. Persistence of the catalog
    /// itself lives in the storage collaborator.
    pub fn default_catalog() -> Vec<Self> {
        vec![
            Self::new(
                "Morning Yoga Flow",
                vec![
                    RoundDefinition::new(["Breath Awareness"], 60.0, 0.0, 1),
                    RoundDefinition::new(
                        ["Cat-Cow", "Downward Dog", "Cobra Pose", "Child's Pose"],
                        40.0,
                        10.0,
                        2,
                    ),
                    RoundDefinition::new(["Seated Forward Fold", "Spinal Twist"], 60.0, 0.0, 1),
                ],
            ),
            Self::new(
                "Full Body Functional",
                vec![
                    RoundDefinition::new(["Warm Up"], 120.0, 0.0, 1),
                    RoundDefinition::new(["Squats", "Push-ups", "Lunges", "Plank"], 40.0, 20.0, 3),
                    RoundDefinition::new(["Cool Down"], 90.0, 0.0, 1),
                ],
            ),
            Self::new(
                "Core & Cardio Blast",
                vec![
                    RoundDefinition::new(["Warm Up"], 90.0, 0.0, 1),
                    RoundDefinition::new(
                        [
                            "Mountain Climbers",
                            "Russian Twists",
                            "Jumping Jacks",
                            "Bicycle Crunches",
                        ],
                        30.0,
                        15.0,
                        4,
                    ),
                    RoundDefinition::new(["Stretch"], 60.0, 0.0, 1),
                ],
            ),
            Self::new(
                "Study Pomodoro",
                vec![
                    RoundDefinition::new(["Study Focus"], 1500.0, 0.0, 1),
                    RoundDefinition::new(["Short Break"], 300.0, 0.0, 1),
                    RoundDefinition::new(["Study Focus"], 1500.0, 0.0, 1),
                    RoundDefinition::new(["Long Break"], 900.0, 0.0, 1),
                ],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_is_valid() {
        assert!(WorkoutDefinition::example().validate().is_ok());
        for workout in WorkoutDefinition::default_catalog() {
            assert!(workout.validate().is_ok(), "{} invalid", workout.name);
        }
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let workout =
            WorkoutDefinition::new("", vec![RoundDefinition::new(["A"], 30.0, 0.0, 1)]);
        assert!(workout.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_rounds() {
        let workout = WorkoutDefinition::new("Empty", vec![]);
        assert!(matches!(workout.validate(), Err(Error::EmptyWorkout)));
    }

    #[test]
    fn test_rejects_empty_exercise_list() {
        let workout = WorkoutDefinition::new(
            "Bad",
            vec![
                RoundDefinition::new(["A"], 30.0, 0.0, 1),
                RoundDefinition::new(Vec::<String>::new(), 30.0, 0.0, 1),
            ],
        );
        assert!(matches!(
            workout.validate(),
            Err(Error::EmptyRound { round: 1 })
        ));
    }

    #[test]
    fn test_rejects_bad_durations_and_repeats() {
        let workout =
            WorkoutDefinition::new("Bad", vec![RoundDefinition::new(["A"], 0.0, 0.0, 1)]);
        assert!(matches!(
            workout.validate(),
            Err(Error::InvalidExerciseDuration { round: 0, .. })
        ));

        let workout =
            WorkoutDefinition::new("Bad", vec![RoundDefinition::new(["A"], 30.0, -1.0, 1)]);
        assert!(matches!(
            workout.validate(),
            Err(Error::InvalidRestDuration { round: 0, .. })
        ));

        let workout =
            WorkoutDefinition::new("Bad", vec![RoundDefinition::new(["A"], 30.0, 0.0, 0)]);
        assert!(matches!(
            workout.validate(),
            Err(Error::InvalidRepeatCount { round: 0, count: 0 })
        ));
    }

    #[test]
    fn test_has_rest() {
        assert!(RoundDefinition::new(["A"], 30.0, 10.0, 1).has_rest());
        assert!(!RoundDefinition::new(["A"], 30.0, 0.0, 1).has_rest());
    }
}
