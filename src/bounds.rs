// src/bounds.rs

use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// A latitude/longitude rectangle given by its south-west and north-east
/// corners, as returned by [`GeoPoint::bounding_box`].
///
/// If the rectangle crosses the antimeridian, `south_west` has a larger
/// longitude than `north_east` and the longitude range wraps through ±180°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        GeoBounds {
            south_west,
            north_east,
        }
    }

    /// Returns `true` when the longitude interval wraps through ±180°.
    pub fn crosses_antimeridian(&self) -> bool {
        self.south_west.longitude_radians() > self.north_east.longitude_radians()
    }

    /// Checks whether `point` lies inside the rectangle, edges included.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lat = point.latitude_radians();
        if lat < self.south_west.latitude_radians() || lat > self.north_east.latitude_radians() {
            return false;
        }

        let lon = point.longitude_radians();
        let west = self.south_west.longitude_radians();
        let east = self.north_east.longitude_radians();
        if self.crosses_antimeridian() {
            lon >= west || lon <= east
        } else {
            lon >= west && lon <= east
        }
    }
}

impl From<(GeoPoint, GeoPoint)> for GeoBounds {
    fn from((south_west, north_east): (GeoPoint, GeoPoint)) -> Self {
        GeoBounds::new(south_west, north_east)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::from_degrees(lat, lon).unwrap()
    }

    #[test]
    fn test_contains_simple_box() {
        let bounds = GeoBounds::new(point(10.0, 20.0), point(30.0, 40.0));
        assert!(!bounds.crosses_antimeridian());
        assert!(bounds.contains(&point(20.0, 30.0)));
        assert!(bounds.contains(&point(10.0, 20.0)));
        assert!(!bounds.contains(&point(5.0, 30.0)));
        assert!(!bounds.contains(&point(20.0, 45.0)));
    }

    #[test]
    fn test_contains_wrapped_box() {
        let bounds = GeoBounds::new(point(-20.0, 170.0), point(-10.0, -170.0));
        assert!(bounds.crosses_antimeridian());
        assert!(bounds.contains(&point(-15.0, 175.0)));
        assert!(bounds.contains(&point(-15.0, -175.0)));
        assert!(bounds.contains(&point(-15.0, 180.0)));
        assert!(!bounds.contains(&point(-15.0, 0.0)));
        assert!(!bounds.contains(&point(0.0, 175.0)));
    }

    #[test]
    fn test_from_bounding_box() {
        let center = point(-17.7134, 179.9);
        let bounds = GeoBounds::from(center.bounding_box(100.0).unwrap());
        assert!(bounds.crosses_antimeridian());
        assert!(bounds.contains(&center));
    }

    #[test]
    fn test_serialization() {
        let bounds = GeoBounds::new(point(1.0, 2.0), point(3.0, 4.0));
        let json = serde_json::to_string(&bounds).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["south_west"]["latitude"], 1.0);
        assert_eq!(value["north_east"]["longitude"], 4.0);
        let back: GeoBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bounds);
    }
}
