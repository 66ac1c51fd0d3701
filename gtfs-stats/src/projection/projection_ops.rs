use geo::{Centroid, Coord, Euclidean, Haversine, Length, LineString, MultiPoint, Point};

use crate::projection::planar_point::PlanarPoint;

/// centroid of a collection of geographic points, used to parameterize the
/// feed projector. returns None for an empty collection.
pub fn centroid_of(points: &[Point<f64>]) -> Option<Point<f64>> {
    let multi = MultiPoint::new(points.to_vec());
    multi.centroid()
}

/// total length of a planar polyline as the sum of consecutive straight-line
/// segments. fewer than two points yield zero length.
pub fn planar_length(points: &[PlanarPoint]) -> uom::si::f64::Length {
    let line: LineString<f64> = points.iter().map(|p| Coord::from(*p)).collect();
    uom::si::f64::Length::new::<uom::si::length::meter>(Euclidean.length(&line))
}

/// total great-circle length of a geographic polyline (lon/lat degrees),
/// independent of any projection. used to cross-check projected lengths.
pub fn haversine_length(points: &[Point<f64>]) -> uom::si::f64::Length {
    let line: LineString<f64> = points.iter().map(|p| p.0).collect();
    uom::si::f64::Length::new::<uom::si::length::meter>(Haversine.length(&line))
}

#[cfg(test)]
mod test {
    use super::{centroid_of, haversine_length, planar_length};
    use crate::projection::PlanarPoint;
    use approx::assert_relative_eq;
    use geo::Point;

    #[test]
    fn test_centroid_is_mean_of_points() {
        let points = vec![
            Point::new(-105.0, 39.0),
            Point::new(-104.0, 40.0),
            Point::new(-106.0, 41.0),
        ];
        let centroid = centroid_of(&points).expect("should compute centroid");
        assert_relative_eq!(centroid.x(), -105.0);
        assert_relative_eq!(centroid.y(), 40.0);
    }

    #[test]
    fn test_centroid_of_nothing_is_none() {
        assert!(centroid_of(&[]).is_none());
    }

    #[test]
    fn test_planar_length_sums_segments() {
        let points = vec![
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(3.0, 4.0),
            PlanarPoint::new(3.0, 14.0),
        ];
        let length = planar_length(&points);
        assert_relative_eq!(length.get::<uom::si::length::meter>(), 15.0);
    }

    #[test]
    fn test_planar_length_of_degenerate_polyline_is_zero() {
        assert_relative_eq!(
            planar_length(&[]).get::<uom::si::length::meter>(),
            0.0
        );
        assert_relative_eq!(
            planar_length(&[PlanarPoint::new(1.0, 1.0)]).get::<uom::si::length::meter>(),
            0.0
        );
    }

    #[test]
    fn test_haversine_length_of_equatorial_degree() {
        // one degree of longitude along the equator is about 111.2 km on the
        // mean-radius sphere geo uses
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let length = haversine_length(&points);
        assert_relative_eq!(
            length.get::<uom::si::length::meter>(),
            111_195.0,
            max_relative = 0.002
        );
    }
}
