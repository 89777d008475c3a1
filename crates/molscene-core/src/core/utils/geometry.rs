use nalgebra::{Point3, Vector3};

pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Scales `v` to unit length.
///
/// A zero-length vector has no direction and is returned unchanged instead of
/// being divided by zero.
pub fn normalize(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm == 0.0 {
        return *v;
    }
    v / norm
}

pub fn midpoint(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    nalgebra::center(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn distance_is_symmetric_and_zero_on_identity() {
        let a = Point3::new(-0.952, 0.6596, -0.6532);
        let b = Point3::new(1.7268, -1.1966, 1.185);

        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(distance(&a, &a), 0.0);
        assert!(distance(&a, &b) > 0.0);
    }

    #[test]
    fn distance_matches_euclidean_norm() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 12.0);
        assert!((distance(&a, &b) - 13.0).abs() < EPS);
    }

    #[test]
    fn normalize_produces_unit_vector_in_same_direction() {
        let vectors = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, -7.5, 0.0),
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-1.0e-3, 2.0e-3, 5.0e-4),
            Vector3::new(1.0e6, -2.0e6, 3.0e6),
        ];

        for v in vectors {
            let n = normalize(&v);
            assert!((n.norm() - 1.0).abs() < 1e-9, "norm of {:?} was {}", n, n.norm());
            assert!(n.dot(&v) > 0.0);
            assert!(n.cross(&v).norm() < 1e-6 * v.norm());
        }
    }

    #[test]
    fn normalize_returns_zero_vector_unchanged() {
        let zero = Vector3::zeros();
        let n = normalize(&zero);
        assert_eq!(n, zero);
        assert!(n.iter().all(|c| !c.is_nan()));
    }

    #[test]
    fn midpoint_lies_halfway_between_points() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, -2.0, 4.0);
        assert_eq!(midpoint(&a, &b), Point3::new(0.5, -1.0, 2.0));
    }
}
