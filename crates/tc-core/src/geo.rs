//! Geographic coordinate type and great-circle distance.
//!
//! Unlike road distances, which are measured and may differ per direction,
//! the great-circle distance is symmetric and derived purely from the two
//! coordinates.  Route statistics use it as the denominator of curvature.

use crate::TcError;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Identical points return exactly `0.0`.
    pub fn distance_m(self, other: Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = TcError;

    /// Parse `"lat, lng"` (whitespace around either number is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| TcError::Parse(format!("expected \"lat, lng\", got {s:?}")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| TcError::Parse(format!("invalid coordinate {v:?}: {e}")))
        };
        Ok(Coordinates::new(parse(lat)?, parse(lng)?))
    }
}

/// Sum of great-circle distances between consecutive points.
///
/// Returns `0.0` for fewer than two points.
pub fn geo_length<I>(points: I) -> f64
where
    I: IntoIterator<Item = Coordinates>,
{
    let mut iter = points.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for point in iter {
        total += prev.distance_m(point);
        prev = point;
    }
    total
}
