//! Engine events for presentation and audio collaborators.

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::phase::PlaybackPhase;
use crate::cue::CueSound;

/// Events emitted by the playback engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The cursor moved to a new phase. The new phase's fraction is already
    /// reset to 1.0 when this fires.
    PhaseChanged {
        from: PlaybackPhase,
        to: PlaybackPhase,
    },
    /// The clock consumed a tick; carries the post-decrement fraction.
    Tick { remaining_fraction: f64 },
    /// A phase boundary was crossed. `cue` names the sound the audio
    /// collaborator should play, or `None` when cues are disabled.
    BoundaryCrossed { cue: Option<CueSound> },
}

/// Fan-out of engine events to any number of subscribers. Subscribers that
/// drop their receiver are pruned on the next emit.
#[derive(Debug, Default)]
pub(crate) struct EventHub {
    senders: Vec<Sender<EngineEvent>>,
}

impl EventHub {
    pub(crate) fn subscribe(&mut self) -> Receiver<EngineEvent> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: EngineEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
