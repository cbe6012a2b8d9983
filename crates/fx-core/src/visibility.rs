//! Visibility-notification capability consumed by the decode engine.
//!
//! The engine only needs a boolean enter/exit signal per observed element;
//! abstracting it as a trait keeps the state machine testable without a
//! rendering environment and gives the frontend a place to degrade when
//! intersection observation is unavailable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscribeError {
    /// The host cannot observe element visibility at all.
    #[error("visibility observation is not supported by the host")]
    Unsupported,
}

/// Capability interface: deliver `true`/`false` on every enter/exit
/// transition of `target`, with a zero-threshold trigger (any visible
/// pixel counts as visible). The initial state is delivered on subscribe.
pub trait VisibilityNotifier<H> {
    fn subscribe(
        &mut self,
        target: &H,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<(), SubscribeError>;
}

/// Degraded-mode notifier for hosts without intersection observation:
/// reports visible exactly once so the reveal still completes, then stays
/// silent.
pub struct AssumeVisible;

impl<H> VisibilityNotifier<H> for AssumeVisible {
    fn subscribe(
        &mut self,
        _target: &H,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<(), SubscribeError> {
        on_change(true);
        Ok(())
    }
}
