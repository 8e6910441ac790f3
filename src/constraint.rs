//! Position corrections applied during relaxation: links, cells, world
//! bounds and point-point contact.
//!
//! Every correction is a single relaxation step over indices into a body's
//! point slice. None of them is solved exactly; repeating the passes
//! converges the mesh.

use crate::config::SolverConfig;
use crate::float::Float;
use crate::particle::PointMass;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Distance constraint between two points of the same body.
#[derive(Clone, Debug, PartialEq)]
pub struct Link<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> Link<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Link { a, b, rest_length }
    }

    /// Move both endpoints toward the rest length, half the error each,
    /// scaled by `dist_stiffness`.
    pub fn solve(&self, points: &mut [PointMass<F>], config: &SolverConfig<F>) {
        let delta = points[self.b].pos - points[self.a].pos;
        let dist = delta.length();
        if dist == F::zero() {
            return;
        }
        let offset = delta.scale(F::half() * (dist - self.rest_length) / dist * config.dist_stiffness);
        points[self.a].nudge(offset);
        points[self.b].nudge(-offset);
    }

    /// Current length minus rest length.
    pub fn error(&self, points: &[PointMass<F>]) -> F {
        points[self.a].pos.distance(points[self.b].pos) - self.rest_length
    }
}

/// Shape-matching constraint over an ordered group of points.
///
/// Each point is pulled toward the current centroid plus the offset it had
/// from the centroid when the cell was built. Translation and the overall
/// position are free; shear and collapse are resisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<F: Float> {
    points: AllocVec<usize>,
    offsets: AllocVec<Vec2<F>>,
}

impl<F: Float> Cell<F> {
    /// Capture the rest shape of `indices` from their current positions.
    pub fn from_points(indices: &[usize], points: &[PointMass<F>]) -> Self {
        let centroid = Vec2::centroid(indices.iter().map(|&i| points[i].pos)).unwrap_or_default();
        let offsets = indices.iter().map(|&i| points[i].pos - centroid).collect();
        Cell { points: indices.to_vec(), offsets }
    }

    pub fn indices(&self) -> &[usize] {
        &self.points
    }

    pub fn rest_offsets(&self) -> &[Vec2<F>] {
        &self.offsets
    }

    pub fn solve(&self, points: &mut [PointMass<F>], config: &SolverConfig<F>) {
        let Some(centroid) = Vec2::centroid(self.points.iter().map(|&i| points[i].pos)) else {
            return;
        };
        // Moves are computed against the unmoved positions, then applied.
        let moves: AllocVec<Vec2<F>> = self
            .points
            .iter()
            .zip(self.offsets.iter())
            .map(|(&i, &offset)| {
                (centroid + offset - points[i].pos)
                    .scale(config.shape_stiffness)
                    .clamp_length(config.max_move)
            })
            .collect();
        for (&i, &delta) in self.points.iter().zip(moves.iter()) {
            points[i].nudge(delta);
        }
    }
}

/// Axis-aligned world walls. `min.y` is the ceiling and `max.y` the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Boundary<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Boundary { min, max }
    }

    /// Clamp a point into the box, reflecting the velocity on each violated
    /// axis with `bounce` restitution. Each axis is handled independently,
    /// so a corner hit clamps both.
    pub fn solve(&self, p: &mut PointMass<F>, bounce: F) {
        if p.pinned {
            return;
        }
        if p.pos.y > self.max.y {
            reflect(&mut p.pos.y, &mut p.prev_pos.y, self.max.y, bounce);
        }
        if p.pos.y < self.min.y {
            reflect(&mut p.pos.y, &mut p.prev_pos.y, self.min.y, bounce);
        }
        if p.pos.x < self.min.x {
            reflect(&mut p.pos.x, &mut p.prev_pos.x, self.min.x, bounce);
        }
        if p.pos.x > self.max.x {
            reflect(&mut p.pos.x, &mut p.prev_pos.x, self.max.x, bounce);
        }
    }

    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x.within(self.min.x, self.max.x) && p.y.within(self.min.y, self.max.y)
    }
}

// After this the implicit velocity on the axis is `-v * bounce`.
fn reflect<F: Float>(pos: &mut F, prev: &mut F, limit: F, bounce: F) {
    let v = *pos - *prev;
    *pos = limit;
    *prev = limit + v * bounce;
}

/// Push apart every pair of points in `points` closer than twice the
/// collision radius, half the overlap each. O(n²).
pub fn solve_point_collisions<F: Float>(points: &mut [PointMass<F>], config: &SolverConfig<F>) {
    let min_dist = config.particle_radius * F::two();
    let n = points.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let delta = points[j].pos - points[i].pos;
            let dist = delta.length();
            if dist == F::zero() || dist >= min_dist {
                continue;
            }
            let offset = delta.normalize().scale((min_dist - dist) * F::half());
            points[i].nudge(-offset);
            points[j].nudge(offset);
        }
    }
}
