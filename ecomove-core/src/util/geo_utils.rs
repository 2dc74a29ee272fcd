use geo::Coord;

/// builds a planar coordinate from a (latitude, longitude) pair, mapping
/// longitude to x and latitude to y per geo-types convention.
pub fn latlng_coord(lat: f64, lng: f64) -> Coord {
    Coord { x: lng, y: lat }
}

/// squared planar distance between two coordinates. no spherical correction
/// is applied: values are only compared against each other over a small
/// geographic extent, never reported as absolute distances.
pub fn planar_distance_squared(a: &Coord, b: &Coord) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_latlng_axis_order() {
        let coord = latlng_coord(51.5074, -0.1278);
        assert_eq!(coord.x, -0.1278, "longitude should map to x");
        assert_eq!(coord.y, 51.5074, "latitude should map to y");
    }

    #[test]
    fn test_distance_squared_zero_for_identical_points() {
        let a = latlng_coord(51.5074, -0.1278);
        assert_eq!(planar_distance_squared(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_squared_is_symmetric() {
        let a = latlng_coord(51.5, -0.1);
        let b = latlng_coord(51.3, -0.5);
        assert_eq!(
            planar_distance_squared(&a, &b),
            planar_distance_squared(&b, &a)
        );
    }
}
