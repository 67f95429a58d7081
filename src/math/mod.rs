/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if two points are within [`TOLERANCE`] of each other.
#[must_use]
pub fn points_coincide(a: &Point3, b: &Point3) -> bool {
    (a - b).norm() < TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.0 + TOLERANCE * 0.1);
        assert!(points_coincide(&a, &b));
        assert!(!points_coincide(&a, &Point3::new(1.0, 2.0, 3.001)));
    }
}
