//! Planar coordinates and the square movement domain.
//!
//! Agents live on the closed square `[0, L] × [0, L]`.  Positions are `f64`
//! so that the strict-radius contact test gives the same answer whichever
//! contact search evaluates it.

use crate::RandomSource;

/// A point in the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance; cheaper for coarse rejection.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// `true` if `other` is strictly closer than `radius`.
    ///
    /// This is the single contact predicate used by every contact search, so
    /// brute-force and indexed searches agree bit for bit.
    #[inline]
    pub fn within(self, other: Point, radius: f64) -> bool {
        self.distance(other) < radius
    }

    /// Coordinates as an array, the form `rstar` expects.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// The closed square `[0, size] × [0, size]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub size: f64,
}

impl Domain {
    #[inline]
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Clamp each coordinate into `[0, size]`.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.clamp(0.0, self.size),
            y: p.y.clamp(0.0, self.size),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.size).contains(&p.x) && (0.0..=self.size).contains(&p.y)
    }

    /// Uniform point over the domain.  Draws `x` then `y`.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Point {
        let x = rng.uniform(0.0, self.size);
        let y = rng.uniform(0.0, self.size);
        Point { x, y }
    }
}
