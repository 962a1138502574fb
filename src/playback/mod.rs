pub(crate) mod fsm;
mod clock;
mod engine;
mod events;
mod phase;

// Re-export essential types
pub use clock::ProgressClock;
pub use engine::{PlaybackEngine, COMPLETED_LABEL, REST_LABEL};
pub use events::EngineEvent;
pub use phase::PlaybackPhase;
