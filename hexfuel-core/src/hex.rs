//! Hex board geometry with cube coordinates

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{InvalidCube, RayError};

/// Board radius (distance from center to edge)
pub const BOARD_RADIUS: i32 = 4;

/// Cube hex coordinates, always satisfying `q + r + s == 0`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCube")]
pub struct Hex {
    q: i32,
    r: i32,
    s: i32,
}

/// Wire form; `s` may be omitted and is then derived
#[derive(Deserialize)]
struct RawCube {
    q: i32,
    r: i32,
    s: Option<i32>,
}

impl TryFrom<RawCube> for Hex {
    type Error = InvalidCube;

    fn try_from(raw: RawCube) -> Result<Self, Self::Error> {
        match raw.s {
            Some(s) => Hex::from_cube(raw.q, raw.r, s),
            None => Hex::from_axial(raw.q, raw.r),
        }
    }
}

impl Hex {
    pub const ORIGIN: Hex = Hex::new(0, 0);

    /// Build from the two axial components; `s` is derived.
    ///
    /// For board-range constants. Untrusted input goes through [`Hex::from_axial`].
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Checked form of [`Hex::new`]: fails when `-q - r` does not fit in an `i32`.
    pub fn from_axial(q: i32, r: i32) -> Result<Self, InvalidCube> {
        match q.checked_neg().and_then(|neg_q| neg_q.checked_sub(r)) {
            Some(s) => Ok(Self { q, r, s }),
            None => Err(InvalidCube {
                q,
                r,
                s: (-(q as i64) - r as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            }),
        }
    }

    /// Build from all three components, rejecting triples off the `q + r + s = 0` plane.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Result<Self, InvalidCube> {
        if q as i64 + r as i64 + s as i64 != 0 {
            return Err(InvalidCube { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        self.s
    }

    /// Distance from center (0,0,0)
    pub fn length(&self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s.abs())
    }

    /// Distance between two hexes
    pub fn distance_to(&self, other: Hex) -> i32 {
        (*self - other).length()
    }

    /// Check if this hex lies inside a hexagon of the given radius
    pub fn within(&self, radius: i32) -> bool {
        self.length() <= radius
    }

    pub fn neighbor(&self, direction: Direction) -> Hex {
        *self + direction.vector()
    }

    /// Direction of the straight ray from `self` to `to`.
    ///
    /// Any positive multiple of one of the six unit vectors is a valid ray;
    /// the unit vector scaled by [`Hex::distance_to`] reproduces the delta.
    pub fn direction_to(&self, to: Hex) -> Result<Direction, RayError> {
        let delta = to - *self;
        let scale = delta.length();
        if scale == 0 {
            return Err(RayError::NoMovement);
        }

        // On a hex axis one component stays fixed and the other two move by `scale`
        if delta.q != 0 && delta.r != 0 && delta.s != 0 {
            return Err(RayError::NotStraight);
        }

        let unit = Hex {
            q: delta.q / scale,
            r: delta.r / scale,
            s: delta.s / scale,
        };
        Direction::from_vector(unit).ok_or(RayError::NotStraight)
    }

    /// Round a fractional cube coordinate to the nearest hex.
    ///
    /// The component with the largest rounding error is recomputed from the
    /// other two so the result lies on the `q + r + s = 0` plane.
    pub fn round(q: f64, r: f64, s: f64) -> Hex {
        let mut rq = q.round();
        let mut rr = r.round();
        let mut rs = s.round();

        let q_diff = (rq - q).abs();
        let r_diff = (rr - r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff > s_diff {
            rr = -rq - rs;
        } else {
            rs = -rq - rr;
        }

        Hex {
            q: rq as i32,
            r: rr as i32,
            s: rs as i32,
        }
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex {
            q: self.q + rhs.q,
            r: self.r + rhs.r,
            s: self.s + rhs.s,
        }
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex {
            q: self.q - rhs.q,
            r: self.r - rhs.r,
            s: self.s - rhs.s,
        }
    }
}

impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, k: i32) -> Hex {
        Hex {
            q: self.q * k,
            r: self.r * k,
            s: self.s * k,
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// The six ray directions, pointy-top layout (r grows downwards)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

pub const DIRECTIONS: [Direction; 6] = [
    Direction::East,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::West,
    Direction::SouthWest,
    Direction::SouthEast,
];

impl Direction {
    /// Unit vector for this direction
    pub const fn vector(self) -> Hex {
        match self {
            Direction::East => Hex::new(1, 0),
            Direction::NorthEast => Hex::new(1, -1),
            Direction::NorthWest => Hex::new(0, -1),
            Direction::West => Hex::new(-1, 0),
            Direction::SouthWest => Hex::new(-1, 1),
            Direction::SouthEast => Hex::new(0, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::West => "W",
            Direction::SouthWest => "SW",
            Direction::SouthEast => "SE",
        }
    }

    fn from_vector(unit: Hex) -> Option<Direction> {
        DIRECTIONS.into_iter().find(|d| d.vector() == unit)
    }
}

/// Every hex of a hexagon of `radius`, q-major then r ascending.
///
/// This is the canonical enumeration order for boards.
pub fn hexagon(radius: i32) -> impl Iterator<Item = Hex> {
    (-radius..=radius).flat_map(move |q| {
        let r1 = (-radius).max(-q - radius);
        let r2 = radius.min(-q + radius);
        (r1..=r2).map(move |r| Hex::new(q, r))
    })
}
