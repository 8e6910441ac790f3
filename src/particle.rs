//! Verlet point masses with implicit velocity.

use crate::config::SolverConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet point mass: velocity is `pos - prev_pos`, never stored.
///
/// Pinned points are skipped by the integrator and every constraint; only
/// the interaction layer moves them.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> PointMass<F> {
    /// A free point at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        PointMass {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            pinned: false,
        }
    }

    /// A point anchored at `pos`.
    pub fn pinned(pos: Vec2<F>) -> Self {
        PointMass { pinned: true, ..Self::new(pos) }
    }

    /// Accumulate acceleration for the next integration step.
    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        if !self.pinned {
            self.acceleration += accel;
        }
    }

    /// Advance one step.
    ///
    /// The implicit velocity is clamped to `max_move` before damping so a
    /// violent drag cannot carry a point through a boundary in one step.
    pub fn integrate(&mut self, dt: F, config: &SolverConfig<F>) {
        if self.pinned {
            return;
        }
        let velocity = self
            .velocity()
            .clamp_length(config.max_move)
            .scale(config.damping);
        let new_pos = self.pos + velocity + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.acceleration = Vec2::zero();
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
        self.acceleration = Vec2::zero();
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Move by `delta` if free. Used by the corrections.
    pub(crate) fn nudge(&mut self, delta: Vec2<F>) {
        if !self.pinned {
            self.pos += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_point_ignores_acceleration() {
        let mut p = PointMass::pinned(Vec2::new(5.0f32, 5.0));
        p.apply_acceleration(Vec2::new(1000.0, 1000.0));
        p.integrate(1.0 / 60.0, &SolverConfig::new());
        assert_eq!(p.pos, Vec2::new(5.0, 5.0));
        assert_eq!(p.prev_pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn acceleration_resets_after_step() {
        let mut p = PointMass::new(Vec2::new(0.0f32, 0.0));
        p.apply_acceleration(Vec2::new(0.0, 3600.0));
        p.integrate(1.0 / 60.0, &SolverConfig::new());
        assert!((p.pos.y - 1.0).abs() < 1e-5);
        assert_eq!(p.acceleration, Vec2::zero());
        assert_eq!(p.prev_pos, Vec2::zero());
    }

    #[test]
    fn damping_scales_carried_velocity() {
        let mut p = PointMass::new(Vec2::new(2.0f32, 0.0));
        p.prev_pos = Vec2::zero();
        p.integrate(1.0 / 60.0, &SolverConfig::new());
        assert!((p.pos.x - (2.0 + 2.0 * 0.95)).abs() < 1e-5);
    }
}
