//! Configuration types for the solver and the world.

use crate::body::BodyConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Tuning parameters read by every solver call.
///
/// Owned by the [`World`](crate::world::World) and passed by reference into
/// the integrator and constraint solvers. The fields are public so a UI layer
/// can adjust them between frames; a frame reads whatever is current when it
/// starts.
///
/// # Builder Pattern
/// ```
/// use squishy::config::SolverConfig;
/// use squishy::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(8)
///     .with_gravity(Vec2::new(0.0, 981.0))
///     .with_bounce(0.2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Gravity acceleration. Screen space, so positive y pulls down. Default: (0, 2000).
    pub gravity: Vec2<F>,
    /// Fraction of a link's length error corrected per pass. Default: 0.3.
    pub dist_stiffness: F,
    /// Fraction of the distance to a cell's rest shape corrected per pass. Default: 0.12.
    pub shape_stiffness: F,
    /// Restitution against world boundaries, in [0, 1]. Default: 0.5.
    pub bounce: F,
    /// Largest per-step displacement of a point, also caps shape moves. Default: 6.
    pub max_move: F,
    /// Collision radius of a point; pairs closer than twice this are pushed apart. Default: 5.
    pub particle_radius: F,
    /// Relaxation passes per frame. Default: 5.
    pub iterations: usize,
    /// Multiplier on the pointer displacement while dragging. Default: 3.
    pub throw_strength: F,
    /// Velocity kept per integration step. Default: 0.95.
    pub damping: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(2000.0)),
            dist_stiffness: F::from_f32(0.3),
            shape_stiffness: F::from_f32(0.12),
            bounce: F::half(),
            max_move: F::from_f32(6.0),
            particle_radius: F::from_f32(5.0),
            iterations: 5,
            throw_strength: F::from_f32(3.0),
            damping: F::from_f32(0.95),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the link stiffness.
    pub fn with_dist_stiffness(mut self, stiffness: F) -> Self {
        self.dist_stiffness = stiffness;
        self
    }

    /// Set the cell stiffness.
    pub fn with_shape_stiffness(mut self, stiffness: F) -> Self {
        self.shape_stiffness = stiffness;
        self
    }

    /// Set the boundary restitution.
    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    /// Set the per-step displacement cap.
    pub fn with_max_move(mut self, max_move: F) -> Self {
        self.max_move = max_move;
        self
    }

    /// Set the point collision radius.
    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the drag multiplier.
    pub fn with_throw_strength(mut self, strength: F) -> Self {
        self.throw_strength = strength;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Check the values that would make the solver diverge.
    ///
    /// [`World::new`](crate::world::World::new) rejects a config that fails
    /// this. Slider writes go through [`SolverConfig::set_tunable`], which
    /// clamps instead.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let unit = |v: F| v.is_finite() && v.within(F::zero(), F::one());
        if !unit(self.dist_stiffness) || !unit(self.shape_stiffness) {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !unit(self.bounce) {
            return Err(PhysicsError::InvalidBounce);
        }
        if !unit(self.damping) {
            return Err(PhysicsError::InvalidDamping);
        }
        if !self.max_move.is_finite() || self.max_move <= F::zero() {
            return Err(PhysicsError::InvalidMaxMove);
        }
        if !self.particle_radius.is_finite() || self.particle_radius < F::zero() {
            return Err(PhysicsError::InvalidParticleRadius);
        }
        Ok(())
    }

    /// Current value of a slider-driven parameter.
    pub fn tunable(&self, tunable: Tunable) -> F {
        match tunable {
            Tunable::DistStiffness => self.dist_stiffness,
            Tunable::ShapeStiffness => self.shape_stiffness,
            Tunable::Gravity => self.gravity.y,
            Tunable::ParticleRadius => self.particle_radius,
            Tunable::ThrowStrength => self.throw_strength,
        }
    }

    /// Write a slider-driven parameter, clamped into its range.
    pub fn set_tunable(&mut self, tunable: Tunable, value: F) {
        let (lo, hi) = tunable.range::<F>();
        let value = value.clamp(lo, hi);
        match tunable {
            Tunable::DistStiffness => self.dist_stiffness = value,
            Tunable::ShapeStiffness => self.shape_stiffness = value,
            Tunable::Gravity => self.gravity.y = value,
            Tunable::ParticleRadius => self.particle_radius = value,
            Tunable::ThrowStrength => self.throw_strength = value,
        }
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters exposed as sliders by an interactive host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tunable {
    DistStiffness,
    ShapeStiffness,
    /// Magnitude of the downward gravity component.
    Gravity,
    ParticleRadius,
    ThrowStrength,
}

impl Tunable {
    /// Every tunable, in slider order.
    pub const ALL: [Tunable; 5] = [
        Tunable::DistStiffness,
        Tunable::ShapeStiffness,
        Tunable::Gravity,
        Tunable::ParticleRadius,
        Tunable::ThrowStrength,
    ];

    /// Inclusive slider range.
    pub fn range<F: Float>(self) -> (F, F) {
        let (lo, hi) = match self {
            Tunable::DistStiffness | Tunable::ShapeStiffness => (0.0, 1.0),
            Tunable::Gravity => (0.0, 4000.0),
            Tunable::ParticleRadius => (1.0, 15.0),
            Tunable::ThrowStrength => (1.0, 10.0),
        };
        (F::from_f32(lo), F::from_f32(hi))
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Tunable::DistStiffness => "Dist Stiff",
            Tunable::ShapeStiffness => "Shape Stiff",
            Tunable::Gravity => "Gravity",
            Tunable::ParticleRadius => "Particle Radius",
            Tunable::ThrowStrength => "Throw Strength",
        }
    }
}

/// Static world setup, fixed once the [`World`](crate::world::World) exists.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig<F: Float> {
    /// World width; the right wall sits at `width - margin`.
    pub width: F,
    /// World height; the floor sits at `height - margin`.
    pub height: F,
    /// Distance of every boundary from the world edge.
    pub margin: F,
    /// Grab captures the nearest point within this distance of the pointer.
    pub grab_radius: F,
    /// Remove picks the first body whose centroid is within this distance.
    pub remove_radius: F,
    /// Body built by a spawn command.
    pub spawn_body: BodyConfig<F>,
    /// Seed for lattice jitter.
    pub seed: u64,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            width: F::from_f32(1800.0),
            height: F::from_f32(1000.0),
            margin: F::from_f32(50.0),
            grab_radius: F::from_f32(20.0),
            remove_radius: F::from_f32(100.0),
            spawn_body: BodyConfig::default(),
            seed: 0x5EED,
        }
    }

    /// Set the world size.
    pub fn with_size(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the boundary margin.
    pub fn with_margin(mut self, margin: F) -> Self {
        self.margin = margin;
        self
    }

    /// Set the spawned body layout.
    pub fn with_spawn_body(mut self, body: BodyConfig<F>) -> Self {
        self.spawn_body = body;
        self
    }

    /// Set the jitter seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SolverConfig::<f32>::new().validate(), Ok(()));
    }

    #[test]
    fn stiffness_above_one_rejected() {
        let config = SolverConfig::<f32>::new().with_dist_stiffness(1.5);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidStiffness));

        let config = SolverConfig::<f32>::new().with_bounce(-0.1);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidBounce));
    }

    #[test]
    fn step_limits_rejected() {
        let config = SolverConfig::<f32>::new().with_max_move(-6.0);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidMaxMove));

        let config = SolverConfig::<f32>::new().with_max_move(0.0);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidMaxMove));

        let config = SolverConfig::<f32>::new().with_particle_radius(-5.0);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidParticleRadius));

        let config = SolverConfig::<f32>::new().with_damping(1.2);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidDamping));

        let config = SolverConfig::<f32>::new().with_damping(f32::NAN);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidDamping));
    }

    #[test]
    fn set_tunable_clamps_to_range() {
        let mut config = SolverConfig::<f32>::new();
        config.set_tunable(Tunable::Gravity, 9000.0);
        assert_eq!(config.gravity.y, 4000.0);

        config.set_tunable(Tunable::ParticleRadius, 0.0);
        assert_eq!(config.tunable(Tunable::ParticleRadius), 1.0);

        config.set_tunable(Tunable::ShapeStiffness, 0.4);
        assert_eq!(config.shape_stiffness, 0.4);
    }
}
