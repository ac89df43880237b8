mod point;
mod vector;

pub use point::Point;
pub use vector::GeoVector;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_is_vector() {
        let v = &Point::new(2.0, 2.0, 2.0) - &Point::new(1.0, 0.0, 2.0);
        assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 0.0));
    }

    #[test]
    fn cross_of_axes() {
        let origin = Point::zero();
        let xhat = &Point::new(1.0, 0.0, 0.0) - &origin;
        let zhat = &Point::new(0.0, 0.0, 1.0) - &origin;
        let n = xhat.cross(&zhat);
        assert_eq!((n.x, n.y, n.z), (0.0, -1.0, 0.0));
    }

    #[test]
    fn normalize_zero_vector_stays_zero() {
        let p = Point::new(1.0, 2.0, 3.0);
        let n = (&p - &p).normalize();
        assert!(!(n.x.is_nan() || n.y.is_nan() || n.z.is_nan()));
        assert_eq!(n.norm(), 0.0);
    }

    #[test]
    fn normalize_to_unit_length() {
        let v = &Point::new(3.0, 0.0, 4.0) - &Point::zero();
        assert_eq!(v.norm(), 5.0);
        let n = v.normalize();
        assert!((n.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn point_display_precision() {
        let p = Point::new(1.0, -0.5, 2.3);
        assert_eq!(format!("{}", p), "(1.000, -0.500, 2.300)");
        assert_eq!(format!("{:.1}", p), "(1.0, -0.5, 2.3)");
    }
}
