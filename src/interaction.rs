//! Pointer and key input turned into commands against the world.
//!
//! The host polls its input devices once per frame and fills in a
//! [`FrameInput`]; [`FrameInput::commands`] turns the edges into the
//! [`Command`]s the [`World`](crate::world::World) applies after the physics
//! step.

use crate::body::{Body, BodyId};
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A point inside a live body.
///
/// Handles are plain values; the world clears its grab handle when the body
/// is removed, and resolving a stale handle yields `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointHandle {
    pub body: BodyId,
    pub index: usize,
}

impl PointHandle {
    pub fn resolve<'a, F: Float>(&self, bodies: &'a [Body<F>]) -> Option<&'a Body<F>> {
        bodies
            .iter()
            .find(|b| b.id() == self.body)
            .filter(|b| self.index < b.point_count())
    }
}

/// A discrete interaction, applied between physics steps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command<F: Float> {
    /// Capture the nearest point within the grab radius.
    Grab(Vec2<F>),
    /// Move the grabbed point to the pointer and flick its body.
    Drag(Vec2<F>),
    Release,
    /// Build the default spawn body with its grid origin here.
    Spawn(Vec2<F>),
    /// Remove the first body whose centroid is near this point.
    RemoveAt(Vec2<F>),
}

/// One frame of polled input.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput<F: Float> {
    pub pointer: Vec2<F>,
    /// Button went down this frame.
    pub pressed: bool,
    /// Button is down (true on the press frame as well).
    pub held: bool,
    /// Button went up this frame.
    pub released: bool,
    /// Spawn key went down this frame.
    pub spawn: bool,
    /// Remove key went down this frame.
    pub remove: bool,
}

impl<F: Float> FrameInput<F> {
    /// Pointer at `pointer`, nothing pressed.
    pub fn idle(pointer: Vec2<F>) -> Self {
        FrameInput {
            pointer,
            pressed: false,
            held: false,
            released: false,
            spawn: false,
            remove: false,
        }
    }

    /// Commands in application order: grab, drag, release, spawn, remove.
    pub fn commands(&self) -> AllocVec<Command<F>> {
        let mut commands = AllocVec::new();
        if self.pressed {
            commands.push(Command::Grab(self.pointer));
        }
        if self.held {
            commands.push(Command::Drag(self.pointer));
        }
        if self.released {
            commands.push(Command::Release);
        }
        if self.spawn {
            commands.push(Command::Spawn(self.pointer));
        }
        if self.remove {
            commands.push(Command::RemoveAt(self.pointer));
        }
        commands
    }
}

/// Grab state carried across frames.
#[derive(Clone, Debug, Default)]
pub(crate) struct Interaction<F: Float> {
    pub grabbed: Option<PointHandle>,
    pub last_pointer: Option<Vec2<F>>,
}

impl<F: Float> Interaction<F> {
    pub fn new() -> Self {
        Interaction { grabbed: None, last_pointer: None }
    }

    /// Pointer travel since the last tracked position.
    pub fn pointer_delta(&self, pointer: Vec2<F>) -> Vec2<F> {
        self.last_pointer.map_or(Vec2::zero(), |last| pointer - last)
    }
}

/// Nearest point across all bodies strictly inside `radius` of `target`.
pub fn find_nearest<F: Float>(bodies: &[Body<F>], target: Vec2<F>, radius: F) -> Option<PointHandle> {
    let limit = radius * radius;
    let mut best: Option<(PointHandle, F)> = None;
    for body in bodies {
        if let Some((index, d)) = body.nearest_point(target) {
            if d < limit && best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((PointHandle { body: body.id(), index }, d));
            }
        }
    }
    best.map(|(handle, _)| handle)
}

/// Flick a body while one of its points follows the pointer.
///
/// Every free point gets `prev_pos = pos - flick`, giving the whole body the
/// velocity `flick`; the dragged point is then placed exactly at `pointer`.
pub fn drag_body<F: Float>(body: &mut Body<F>, index: usize, pointer: Vec2<F>, flick: Vec2<F>) {
    for p in body.points.iter_mut().filter(|p| !p.pinned) {
        p.prev_pos = p.pos - flick;
    }
    if let Some(p) = body.points.get_mut(index) {
        p.pos = pointer;
    }
}
