//! Error types for physics operations.

use core::fmt;

use crate::body::BodyId;

/// Errors that can occur while building or addressing the simulation.
///
/// Numerical degeneracies inside a step (zero-length links, coincident
/// points) are never errors; the solvers skip them.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Stiffness must be in [0, 1].
    InvalidStiffness,
    /// Bounce must be in [0, 1].
    InvalidBounce,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Max move must be positive and finite.
    InvalidMaxMove,
    /// Particle radius must be non-negative and finite.
    InvalidParticleRadius,
    /// Grid dimensions must be at least 2x2.
    InvalidGridDimensions,
    /// Grid spacing must be positive and finite.
    InvalidSpacing,
    /// The area inside the world margins is empty.
    InvalidWorldSize,
    /// No live body has this id.
    BodyNotFound { id: BodyId },
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be in [0, 1]"),
            PhysicsError::InvalidBounce => write!(f, "bounce must be in [0, 1]"),
            PhysicsError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            PhysicsError::InvalidMaxMove => write!(f, "max move must be positive and finite"),
            PhysicsError::InvalidParticleRadius => {
                write!(f, "particle radius must be non-negative and finite")
            }
            PhysicsError::InvalidGridDimensions => write!(f, "grid must be at least 2x2"),
            PhysicsError::InvalidSpacing => write!(f, "grid spacing must be positive and finite"),
            PhysicsError::InvalidWorldSize => write!(f, "world is smaller than its margins"),
            PhysicsError::BodyNotFound { id } => write!(f, "no body with id {}", id),
            PhysicsError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
