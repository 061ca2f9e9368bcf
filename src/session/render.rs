//! The boundary to the rendering collaborator.

use crate::board::{Frame, TickEvent};

/// Receives what the engine produces each frame.
///
/// Implementations draw sprites, play sounds, interpolate positions and so
/// on. The engine only guarantees the call order: within one frame,
/// `on_tick` (if a tick ran) comes before `positions_changed`.
pub trait RenderSink {
    /// One logic tick produced `event`.
    fn on_tick(&mut self, event: &TickEvent);

    /// Called every frame with the logical before/after cells of every live
    /// tile and how far the clock is towards the next tick.
    fn positions_changed(&mut self, frame: &Frame, elapsed_fraction: f32);
}

/// One recorded sink call.
#[derive(Clone, Debug, PartialEq)]
pub enum SinkCall {
    Tick(TickEvent),
    Draw { elapsed_fraction: f32 },
}

/// Sink that records calls instead of drawing. Useful headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
    pub last_frame: Option<Frame>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All tick events seen so far, in order.
    pub fn events(&self) -> impl Iterator<Item = &TickEvent> + '_ {
        self.calls.iter().filter_map(|call| match call {
            SinkCall::Tick(event) => Some(event),
            SinkCall::Draw { .. } => None,
        })
    }
}

impl RenderSink for RecordingSink {
    fn on_tick(&mut self, event: &TickEvent) {
        self.calls.push(SinkCall::Tick(*event));
    }

    fn positions_changed(&mut self, frame: &Frame, elapsed_fraction: f32) {
        self.calls.push(SinkCall::Draw { elapsed_fraction });
        self.last_frame = Some(frame.clone());
    }
}
