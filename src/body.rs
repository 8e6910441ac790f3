//! Soft bodies: a jittered grid of point masses held together by links and
//! shape cells.

use core::fmt;

use crate::aabb::Aabb;
use crate::constraint::{Cell, Link};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::PointMass;
use crate::vec::Vec2;
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// Stable identity of a body inside a [`World`](crate::world::World).
///
/// Ids are never reused, so a stale id simply fails to resolve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Layout of a body grid.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    /// Rest distance between horizontal and vertical neighbours.
    pub spacing: F,
    /// Each coordinate of each point is offset by a random amount in `[0, jitter)`.
    pub jitter: F,
    /// Build the two diagonal links of every 2x2 neighbourhood.
    pub diagonals: bool,
    /// Build one shape cell per 2x2 neighbourhood.
    pub cells: bool,
}

impl<F: Float> BodyConfig<F> {
    /// A fully braced grid with the default spacing and jitter.
    pub fn new(cols: usize, rows: usize) -> Self {
        BodyConfig {
            cols,
            rows,
            spacing: F::from_f32(30.0),
            jitter: F::two(),
            diagonals: true,
            cells: true,
        }
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_jitter(mut self, jitter: F) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    pub fn with_cells(mut self, cells: bool) -> Self {
        self.cells = cells;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), PhysicsError> {
        if self.cols < 2 || self.rows < 2 {
            return Err(PhysicsError::InvalidGridDimensions);
        }
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(PhysicsError::InvalidSpacing);
        }
        Ok(())
    }
}

impl<F: Float> Default for BodyConfig<F> {
    /// The 10x10 body the interactive demo spawns.
    fn default() -> Self {
        Self::new(10, 10)
    }
}

/// A deformable body built from a grid of Verlet points.
///
/// The point storage is a boxed slice: its length is fixed at construction,
/// which keeps the indices held by links and cells valid for the body's
/// whole life. Point `(col, row)` lives at index `row * cols + col`.
#[derive(Clone, Debug)]
pub struct Body<F: Float> {
    id: BodyId,
    pub(crate) points: Box<[PointMass<F>]>,
    pub(crate) links: AllocVec<Link<F>>,
    pub(crate) cells: AllocVec<Cell<F>>,
    cols: usize,
    rows: usize,
    spacing: F,
}

impl<F: Float> Body<F> {
    /// Build a grid whose unjittered top-left point sits at `origin`.
    ///
    /// Per grid point, in row-major order, links are added to the right
    /// neighbour, the lower neighbour, and (with `diagonals`) both diagonals
    /// of the 2x2 block below-right. Links use the nominal spacing as rest
    /// length; cells capture the jittered positions as their rest shape.
    pub fn new<R: Rng>(
        id: BodyId,
        origin: Vec2<F>,
        config: &BodyConfig<F>,
        rng: &mut R,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let (cols, rows, spacing) = (config.cols, config.rows, config.spacing);

        let mut jitter = || {
            if config.jitter > F::zero() {
                F::from_f32(rng.gen::<f32>()) * config.jitter
            } else {
                F::zero()
            }
        };

        let mut points = AllocVec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let x = origin.x + F::from_usize(col) * spacing + jitter();
                let y = origin.y + F::from_usize(row) * spacing + jitter();
                points.push(PointMass::new(Vec2::new(x, y)));
            }
        }

        let diag_length = (spacing * spacing + spacing * spacing).sqrt();
        let mut links = AllocVec::new();
        for row in 0..rows {
            for col in 0..cols {
                let idx = row * cols + col;
                if col + 1 < cols {
                    links.push(Link::new(idx, idx + 1, spacing));
                }
                if row + 1 < rows {
                    links.push(Link::new(idx, idx + cols, spacing));
                }
                if config.diagonals && col + 1 < cols && row + 1 < rows {
                    links.push(Link::new(idx, idx + cols + 1, diag_length));
                    links.push(Link::new(idx + 1, idx + cols, diag_length));
                }
            }
        }

        let mut cells = AllocVec::new();
        if config.cells {
            for row in 0..(rows - 1) {
                for col in 0..(cols - 1) {
                    let tl = row * cols + col;
                    cells.push(Cell::from_points(&[tl, tl + 1, tl + cols, tl + cols + 1], &points));
                }
            }
        }

        Ok(Body {
            id,
            points: points.into_boxed_slice(),
            links,
            cells,
            cols,
            rows,
            spacing,
        })
    }

    pub fn id(&self) -> BodyId { self.id }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn spacing(&self) -> F { self.spacing }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn points(&self) -> &[PointMass<F>] { &self.points }
    pub fn links(&self) -> &[Link<F>] { &self.links }
    pub fn cells(&self) -> &[Cell<F>] { &self.cells }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn point(&self, index: usize) -> Option<&PointMass<F>> {
        self.points.get(index)
    }

    /// Mutable access to one point. The slice itself can never be resized.
    pub fn point_mut(&mut self, index: usize) -> Result<&mut PointMass<F>, PhysicsError> {
        let count = self.points.len();
        self.points
            .get_mut(index)
            .ok_or(PhysicsError::PointOutOfBounds { index, count })
    }

    pub fn position_at(&self, col: usize, row: usize) -> Option<Vec2<F>> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.points[self.index(col, row)].pos)
    }

    pub fn pin(&mut self, col: usize, row: usize) -> Result<(), PhysicsError> {
        self.grid_point_mut(col, row)?.pin();
        Ok(())
    }

    pub fn unpin(&mut self, col: usize, row: usize) -> Result<(), PhysicsError> {
        self.grid_point_mut(col, row)?.unpin();
        Ok(())
    }

    fn grid_point_mut(&mut self, col: usize, row: usize) -> Result<&mut PointMass<F>, PhysicsError> {
        if col >= self.cols || row >= self.rows {
            return Err(PhysicsError::PointOutOfBounds {
                index: row.saturating_mul(self.cols).saturating_add(col),
                count: self.points.len(),
            });
        }
        let idx = self.index(col, row);
        self.point_mut(idx)
    }

    /// Current positions in row-major order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Average position of all points.
    pub fn centroid(&self) -> Vec2<F> {
        Vec2::centroid(self.points.iter().map(|p| p.pos)).unwrap_or_default()
    }

    /// Positions of the top-left, top-right, bottom-left and bottom-right
    /// grid corners.
    pub fn corners(&self) -> [Vec2<F>; 4] {
        let last_row = (self.rows - 1) * self.cols;
        [
            self.points[0].pos,
            self.points[self.cols - 1].pos,
            self.points[last_row].pos,
            self.points[last_row + self.cols - 1].pos,
        ]
    }

    /// Bounding box of the four grid corners.
    ///
    /// This is the box used for body-body contact. Interior points bulging
    /// past the corners are not included.
    pub fn aabb(&self) -> Aabb<F> {
        let [tl, tr, bl, br] = self.corners();
        let mut bounds = Aabb::new(tl, tl);
        for corner in [tr, bl, br] {
            bounds.include(corner);
        }
        bounds
    }

    /// One quad per cell in drawing order: top-left, top-right,
    /// bottom-right, bottom-left.
    pub fn cell_quads(&self) -> impl Iterator<Item = [Vec2<F>; 4]> + '_ {
        self.cells.iter().filter_map(move |cell| match *cell.indices() {
            [tl, tr, bl, br] => Some([
                self.points[tl].pos,
                self.points[tr].pos,
                self.points[br].pos,
                self.points[bl].pos,
            ]),
            _ => None,
        })
    }

    /// Index and squared distance of the point nearest to `target`.
    pub fn nearest_point(&self, target: Vec2<F>) -> Option<(usize, F)> {
        let mut best: Option<(usize, F)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = p.pos.distance_sq(target);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        best
    }

    /// Shift every free point's current position. Previous positions are
    /// left alone, so the shift carries into the next step as velocity.
    pub fn translate(&mut self, delta: Vec2<F>) {
        for p in self.points.iter_mut() {
            p.nudge(delta);
        }
    }

    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        for p in self.points.iter_mut() {
            p.apply_acceleration(accel);
        }
    }
}
