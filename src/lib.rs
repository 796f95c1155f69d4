pub mod bounds;
pub mod error;
pub mod geopoint;

pub use bounds::GeoBounds;
pub use error::GeoError;
pub use geopoint::{
    GeoPoint, EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};
