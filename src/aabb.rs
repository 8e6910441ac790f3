//! Axis-aligned bounding boxes used for body-body contact.

use crate::float::Float;
use crate::vec::Vec2;

/// Coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Aabb<F> {
    #[inline]
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Aabb { min, max }
    }

    /// Grow to contain `p`.
    pub fn include(&mut self, p: Vec2<F>) {
        self.min = Vec2::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Vec2::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }

    pub fn width(&self) -> F {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> F {
        self.max.y - self.min.y
    }

    /// Touching boxes count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Aabb<F>) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// Per-axis penetration depth against `other`: on each axis, the smaller
    /// of the overlap entering from either side.
    pub fn penetration(&self, other: &Aabb<F>) -> Vec2<F> {
        Vec2::new(
            (self.max.x - other.min.x).min(other.max.x - self.min.x),
            (self.max.y - other.min.y).min(other.max.y - self.min.y),
        )
    }

    /// Axis of least penetration and its depth, or `None` if the boxes are
    /// apart. Ties go to `Y`.
    pub fn least_penetration(&self, other: &Aabb<F>) -> Option<(Axis, F)> {
        if !self.overlaps(other) {
            return None;
        }
        let depth = self.penetration(other);
        if depth.x < depth.y {
            Some((Axis::X, depth.x))
        } else {
            Some((Axis::Y, depth.y))
        }
    }

    /// Whether `self` sits on the negative side of `other` along `axis`,
    /// judged by which way the overlap is shallower.
    pub fn precedes(&self, other: &Aabb<F>, axis: Axis) -> bool {
        match axis {
            Axis::X => self.max.x - other.min.x <= other.max.x - self.min.x,
            Axis::Y => self.max.y - other.min.y <= other.max.y - self.min.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x0: f32, y0: f32, x1: f32, y1: f32) -> Aabb<f32> {
        Aabb::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    #[test]
    fn touching_boxes_overlap() {
        assert!(aabb(0.0, 0.0, 10.0, 10.0).overlaps(&aabb(10.0, 0.0, 20.0, 10.0)));
        assert!(!aabb(0.0, 0.0, 10.0, 10.0).overlaps(&aabb(10.5, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn least_penetration_picks_shallow_axis() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(8.0, 1.0, 18.0, 11.0);
        assert_eq!(a.least_penetration(&b), Some((Axis::X, 2.0)));
        assert!(a.precedes(&b, Axis::X));
        assert!(!b.precedes(&a, Axis::X));
    }

    #[test]
    fn include_grows_box() {
        let mut b = aabb(0.0, 0.0, 0.0, 0.0);
        b.include(Vec2::new(-1.0, 4.0));
        assert_eq!(b, aabb(-1.0, 0.0, 0.0, 4.0));
        assert_eq!(b.width(), 1.0);
        assert_eq!(b.height(), 4.0);
    }
}
