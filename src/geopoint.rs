// src/geopoint.rs

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Mean radius of the Earth in kilometers, used for the spherical approximation.
pub const EARTH_RADIUS_KM: f64 = 6371.01;

pub const MIN_LATITUDE: f64 = -PI / 2.0;
pub const MAX_LATITUDE: f64 = PI / 2.0;
pub const MIN_LONGITUDE: f64 = -PI;
pub const MAX_LONGITUDE: f64 = PI;

fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// A point on the surface of a sphere, given by latitude and longitude.
///
/// Both angles are kept in radians and in degrees. A `GeoPoint` can only be
/// obtained through [`GeoPoint::from_degrees`] or [`GeoPoint::from_radians`]
/// (deserialization validates the same way), so every instance lies within
/// latitude `[-90°, 90°]` and longitude `[-180°, 180°]`.
///
/// Two points are equal when their radian angles are equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "WireCoordinates", into = "WireCoordinates")]
pub struct GeoPoint {
    rad_latitude: f64,
    rad_longitude: f64,
    deg_latitude: f64,
    deg_longitude: f64,
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.rad_latitude == other.rad_latitude && self.rad_longitude == other.rad_longitude
    }
}

// Largest allowed gap between the degree and radian forms of a document.
const WIRE_DEGREE_TOLERANCE: f64 = 1e-9;

/// Wire form of a `GeoPoint`: degrees, plus the radians the point was built
/// with so that reading it back gives an equal value. Documents carrying
/// only degrees are accepted and go through `from_degrees`.
#[derive(Debug, Serialize, Deserialize)]
struct WireCoordinates {
    latitude: f64,
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    latitude_radians: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    longitude_radians: Option<f64>,
}

impl TryFrom<WireCoordinates> for GeoPoint {
    type Error = GeoError;

    fn try_from(value: WireCoordinates) -> Result<Self, Self::Error> {
        match (value.latitude_radians, value.longitude_radians) {
            (None, None) => GeoPoint::from_degrees(value.latitude, value.longitude),
            (Some(rad_latitude), Some(rad_longitude)) => {
                let point = GeoPoint {
                    rad_latitude,
                    rad_longitude,
                    deg_latitude: value.latitude,
                    deg_longitude: value.longitude,
                };
                point.check_bounds()?;

                let lat_gap = (radians_to_degrees(rad_latitude) - value.latitude).abs();
                let lon_gap = (radians_to_degrees(rad_longitude) - value.longitude).abs();
                if !(lat_gap <= WIRE_DEGREE_TOLERANCE && lon_gap <= WIRE_DEGREE_TOLERANCE) {
                    return Err(GeoError::InvalidArgument(format!(
                        "degrees ({}, {}) do not match radians ({}, {})",
                        value.latitude, value.longitude, rad_latitude, rad_longitude
                    )));
                }
                Ok(point)
            }
            _ => Err(GeoError::InvalidArgument(
                "latitude_radians and longitude_radians must be given together".to_string(),
            )),
        }
    }
}

impl From<GeoPoint> for WireCoordinates {
    fn from(point: GeoPoint) -> Self {
        WireCoordinates {
            latitude: point.deg_latitude,
            longitude: point.deg_longitude,
            latitude_radians: Some(point.rad_latitude),
            longitude_radians: Some(point.rad_longitude),
        }
    }
}

impl GeoPoint {
    /// Creates a `GeoPoint` from an angle pair in degrees.
    ///
    /// # Errors
    /// Returns `GeoError::InvalidBound` if either value is not finite or falls
    /// outside the global latitude/longitude range.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let point = GeoPoint {
            rad_latitude: degrees_to_radians(latitude),
            rad_longitude: degrees_to_radians(longitude),
            deg_latitude: latitude,
            deg_longitude: longitude,
        };
        point
            .check_bounds()
            .map_err(|_| GeoError::invalid_bound(latitude, longitude))?;
        log::trace!("Created GeoPoint from degrees: {}", point);
        Ok(point)
    }

    /// Creates a `GeoPoint` from an angle pair in radians.
    ///
    /// # Errors
    /// Returns `GeoError::InvalidBound` if either value is not finite or falls
    /// outside `[-π/2, π/2]` / `[-π, π]`.
    pub fn from_radians(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let point = GeoPoint {
            rad_latitude: latitude,
            rad_longitude: longitude,
            deg_latitude: radians_to_degrees(latitude),
            deg_longitude: radians_to_degrees(longitude),
        };
        point.check_bounds()?;
        log::trace!("Created GeoPoint from radians: {}", point);
        Ok(point)
    }

    // NaN fails every comparison, so the range checks also reject it.
    fn check_bounds(&self) -> Result<(), GeoError> {
        let lat_ok = (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.rad_latitude);
        let lon_ok = (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.rad_longitude);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(GeoError::invalid_bound(self.rad_latitude, self.rad_longitude))
        }
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.deg_latitude
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.deg_longitude
    }

    pub fn latitude_radians(&self) -> f64 {
        self.rad_latitude
    }

    pub fn longitude_radians(&self) -> f64 {
        self.rad_longitude
    }

    /// Great-circle distance to `other` in kilometers, on a sphere of radius
    /// [`EARTH_RADIUS_KM`].
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        self.distance_to_on_sphere(other, EARTH_RADIUS_KM)
    }

    /// Great-circle distance to `other` on a sphere of the given radius.
    /// The result is in the unit of `radius`.
    pub fn distance_to_on_sphere(&self, other: &GeoPoint, radius: f64) -> f64 {
        // Evaluate with the operands in a fixed order so that a->b and b->a
        // go through exactly the same floating point operations.
        let (a, b) = if self.angles() <= other.angles() {
            (self, other)
        } else {
            (other, self)
        };

        let cos_angle = a.rad_latitude.sin() * b.rad_latitude.sin()
            + a.rad_latitude.cos()
                * b.rad_latitude.cos()
                * (a.rad_longitude - b.rad_longitude).cos();

        // Rounding can push identical or antipodal points just past +/-1.
        cos_angle.clamp(-1.0, 1.0).acos() * radius
    }

    fn angles(&self) -> (f64, f64) {
        (self.rad_latitude, self.rad_longitude)
    }

    /// Computes the bounding coordinates of all points whose great-circle
    /// distance to this point is at most `distance` kilometers.
    ///
    /// Returns the south-west and north-east corners. When the box crosses
    /// the antimeridian the south-west longitude is greater than the
    /// north-east one, and the box has to be read as a wrapped interval
    /// (see [`crate::GeoBounds`]).
    ///
    /// # Errors
    /// * `GeoError::InvalidArgument` if `distance` is negative or NaN.
    /// * `GeoError::NilValue` if a corner could not be constructed, which
    ///   indicates a bug rather than bad input.
    pub fn bounding_box(&self, distance: f64) -> Result<(GeoPoint, GeoPoint), GeoError> {
        self.bounding_box_on_sphere(distance, EARTH_RADIUS_KM)
    }

    /// Same as [`GeoPoint::bounding_box`] on a sphere of the given radius.
    /// `distance` must be in the unit of `radius`.
    pub fn bounding_box_on_sphere(
        &self,
        distance: f64,
        radius: f64,
    ) -> Result<(GeoPoint, GeoPoint), GeoError> {
        if distance.is_nan() || distance < 0.0 {
            return Err(GeoError::InvalidArgument(format!(
                "distance must be a non-negative number, got {}",
                distance
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeoError::InvalidArgument(format!(
                "sphere radius must be a positive finite number, got {}",
                radius
            )));
        }

        // angular distance in radians on a great circle
        let rad_dist = distance / radius;

        let mut min_lat = self.rad_latitude - rad_dist;
        let mut max_lat = self.rad_latitude + rad_dist;
        let min_lon;
        let max_lon;

        if min_lat > MIN_LATITUDE && max_lat < MAX_LATITUDE {
            let ratio = rad_dist.sin() / self.rad_latitude.cos();
            let delta_lon = ratio.clamp(-1.0, 1.0).asin();

            let mut lon = self.rad_longitude - delta_lon;
            if lon < MIN_LONGITUDE {
                lon += 2.0 * PI;
            }
            min_lon = lon;

            let mut lon = self.rad_longitude + delta_lon;
            if lon > MAX_LONGITUDE {
                lon -= 2.0 * PI;
            }
            max_lon = lon;

            if min_lon > max_lon {
                log::debug!(
                    "Bounding box of {} km around {} crosses the antimeridian",
                    distance,
                    self
                );
            }
        } else {
            log::debug!(
                "Bounding box of {} km around {} covers a pole, spanning all longitudes",
                distance,
                self
            );
            min_lat = min_lat.max(MIN_LATITUDE);
            max_lat = max_lat.min(MAX_LATITUDE);
            min_lon = MIN_LONGITUDE;
            max_lon = MAX_LONGITUDE;
        }

        let south_west = GeoPoint::from_radians(min_lat, min_lon).map_err(|e| {
            log::error!("Failed to build south-west corner: {}", e);
            GeoError::NilValue(format!("south-west corner of bounding box: {}", e))
        })?;
        let north_east = GeoPoint::from_radians(max_lat, max_lon).map_err(|e| {
            log::error!("Failed to build north-east corner: {}", e);
            GeoError::NilValue(format!("north-east corner of bounding box: {}", e))
        })?;

        Ok((south_west, north_east))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°, {}° = {} rad, {} rad",
            self.deg_latitude, self.deg_longitude, self.rad_latitude, self.rad_longitude
        )
    }
}
