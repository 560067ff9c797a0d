//! Planar and geographic coordinate types.
//!
//! The street datasets carry two positions per point:
//!
//! - a planar grid coordinate in **integer centimetres** ([`Coord`]), which is
//!   what every distance, weight and identity computation uses, and
//! - a WGS-84 longitude/latitude pair ([`GeoPoint`]) kept for display only.
//!
//! Integer centimetres make coordinate equality exact, so a `Coord` can key a
//! hash map without any tolerance handling.

use std::fmt;

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A planar grid position in centimetres.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in centimetres.
    #[inline]
    pub fn distance_cm(self, other: Coord) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean distance to `other`, in metres.
    #[inline]
    pub fn distance_m(self, other: Coord) -> f64 {
        self.distance_cm(other) / 100.0
    }

    /// Component-wise difference `other - self` as an `(dx, dy)` vector.
    #[inline]
    pub fn delta(self, other: Coord) -> (i64, i64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Arithmetic mean of `points`, rounded to the nearest centimetre.
    ///
    /// Returns `None` for an empty slice.
    pub fn mean(points: &[Coord]) -> Option<Coord> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0f64, 0.0f64), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
        Some(Coord::new((sx / n).round() as i64, (sy / n).round() as i64))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate.  Carried alongside [`Coord`] for display;
/// never used for routing.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
