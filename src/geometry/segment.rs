use crate::math::{points_coincide, Point3, TOLERANCE};

use super::BoundaryElement;

/// A straight edge between two points.
///
/// Two segments are the same boundary element when their endpoints coincide,
/// in either direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: Point3,
    end: Point3,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns `true` if `point` lies on the segment, away from both endpoints.
    #[must_use]
    pub fn contains_interior(&self, point: &Point3) -> bool {
        let dir = self.end - self.start;
        let len_sq = dir.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return false;
        }
        let t = (point - self.start).dot(&dir) / len_sq;
        let closest = self.start + dir * t;
        points_coincide(&closest, point)
            && !points_coincide(point, &self.start)
            && !points_coincide(point, &self.end)
            && t > 0.0
            && t < 1.0
    }
}

impl BoundaryElement for Segment {
    fn is_same(&self, other: &Self) -> bool {
        (points_coincide(&self.start, &other.start) && points_coincide(&self.end, &other.end))
            || (points_coincide(&self.start, &other.end)
                && points_coincide(&self.end, &other.start))
    }
}
