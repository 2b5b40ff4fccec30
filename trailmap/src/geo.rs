//! Geographic points and Web Mercator helpers.

use std::f64::consts::PI;

/// Maximum latitude representable in Web Mercator.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// Point on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude, positive north.
    pub lat: f64,
    /// Longitude, positive east.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new point.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Projects the point into normalized Web Mercator space.
    ///
    /// Both coordinates are in `0.0..=1.0`, `x` growing east and `y` growing
    /// south. Multiply by `256 * 2^zoom` to get pixel coordinates at a zoom level.
    pub fn to_mercator(&self) -> (f64, f64) {
        let lat = self.lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
        let lon = self.lon.clamp(-180.0, 180.0);
        let x = (lon + 180.0) / 360.0;
        let y = (1.0 - lat.to_radians().tan().asinh() / PI) / 2.0;
        (x, y)
    }

    /// Inverse of [`GeoPoint::to_mercator`].
    pub fn from_mercator(x: f64, y: f64) -> Self {
        let lon = x * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees();
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn mercator_origin() {
        let (x, y) = GeoPoint::new(0.0, 0.0).to_mercator();
        assert_abs_diff_eq!(x, 0.5);
        assert_abs_diff_eq!(y, 0.5);
    }

    #[test]
    fn mercator_inverse() {
        let point = GeoPoint::new(40.768697, -73.981818);
        let (x, y) = point.to_mercator();
        let back = GeoPoint::from_mercator(x, y);
        assert_abs_diff_eq!(back.lat, point.lat, epsilon = 1e-9);
        assert_abs_diff_eq!(back.lon, point.lon, epsilon = 1e-9);
    }

    #[test]
    fn mercator_clamps_poles() {
        let (_, y) = GeoPoint::new(90.0, 0.0).to_mercator();
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-9);
    }
}
