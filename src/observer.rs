//! Step observer trait for monitoring simulation progress.

use crate::body::BodyId;
use crate::interaction::PointHandle;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (debugging, overlays,
/// profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after one body's points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over one body.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when two bodies' boxes overlapped and were pushed apart.
    fn on_body_contact(&mut self, _a: BodyId, _b: BodyId) {}

    /// Called when a spawn command created a body.
    fn on_body_spawned(&mut self, _id: BodyId) {}

    /// Called when a remove command destroyed a body.
    fn on_body_removed(&mut self, _id: BodyId) {}

    /// Called when a grab command resolved, with the captured point if any.
    fn on_grab(&mut self, _handle: Option<PointHandle>) {}

    /// Called when a physics step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Tallies every callback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub integrations: usize,
    pub iterations: usize,
    pub contacts: usize,
    pub spawned: usize,
    pub removed: usize,
    pub grabs: usize,
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_integrate(&mut self) { self.integrations += 1; }
    fn on_constraint_iteration(&mut self, _iteration: usize) { self.iterations += 1; }
    fn on_body_contact(&mut self, _a: BodyId, _b: BodyId) { self.contacts += 1; }
    fn on_body_spawned(&mut self, _id: BodyId) { self.spawned += 1; }
    fn on_body_removed(&mut self, _id: BodyId) { self.removed += 1; }
    fn on_grab(&mut self, handle: Option<PointHandle>) {
        if handle.is_some() {
            self.grabs += 1;
        }
    }
    fn on_step_complete(&mut self) { self.steps += 1; }
}
