//! Body-body contact: bounding-box overlap separated along the axis of
//! least penetration.
//!
//! This is a whole-body translation, not a per-point constraint. Only the
//! shallower axis is corrected, so a diagonal approach is resolved as if it
//! came straight along that axis.

use crate::aabb::Axis;
use crate::body::Body;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::vec::Vec2;

/// Result of separating two bodies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    pub axis: Axis,
    /// Full penetration depth; each body moved half of it.
    pub depth: F,
}

/// Push `a` and `b` apart by half the least penetration each.
pub fn resolve_bodies<F: Float>(a: &mut Body<F>, b: &mut Body<F>) -> Option<Contact<F>> {
    let box_a = a.aabb();
    let box_b = b.aabb();
    let (axis, depth) = box_a.least_penetration(&box_b)?;

    let push = depth * F::half();
    let push = if box_a.precedes(&box_b, axis) { -push } else { push };
    let shift = match axis {
        Axis::X => Vec2::new(push, F::zero()),
        Axis::Y => Vec2::new(F::zero(), push),
    };
    a.translate(shift);
    b.translate(-shift);
    Some(Contact { axis, depth })
}

/// Resolve every distinct pair once, in body order.
pub fn resolve_all<F: Float, O: StepObserver>(bodies: &mut [Body<F>], observer: &mut O) {
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_bodies(a, b).is_some() {
                observer.on_body_contact(a.id(), b.id());
            }
        }
    }
}
