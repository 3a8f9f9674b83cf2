//! This sub-module contains the basic value types that make up the
//! coordinate systems. See the parent module documentation for more info.

use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A point in continuous 2D (pixel) space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Are both components finite, i.e. not `NaN` or infinite?
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A single hex cell, in axial coordinates. See this page for info on how
/// the axial/cube coordinate system works:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-axial
///
/// This struct only needs to store `q` and `r`, since `q+r+s=0` for all hexes,
/// so `s` is derived as necessary. That also means the invariant can never be
/// broken by a stored value.
///
/// The derived ordering is lexicographic on `(q, r)`, which is the same order
/// in which regions are scanned.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct Hex {
    q: i64,
    r: i64,
}

impl Hex {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// hexes, we can derive s from q & r.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Construct a new hex with the given q and s. Since q+r+s=0 for all
    /// hexes, we can derive r from q & s.
    pub const fn new_qs(q: i64, s: i64) -> Self {
        Self::new(q, -q - s)
    }

    /// Construct a new hex with the given r and s. Since q+r+s=0 for all
    /// hexes, we can derive q from r & s.
    pub const fn new_rs(r: i64, s: i64) -> Self {
        Self::new(-r - s, r)
    }

    pub fn q(&self) -> i64 {
        self.q
    }

    pub fn r(&self) -> i64 {
        self.r
    }

    /// Derived third coordinate. For hexes so far out that `-(q + r)` can't be
    /// represented, this saturates.
    pub fn s(&self) -> i64 {
        self.q.saturating_add(self.r).saturating_neg()
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they are adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance_to(self, other: Hex) -> u64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Widened so that hexes on opposite ends of the i64 range don't
        // overflow. The result saturates at u64::MAX.
        let dq = i128::from(self.q) - i128::from(other.q);
        let dr = i128::from(self.r) - i128::from(other.r);
        let distance = dq.abs().max(dr.abs()).max((dq + dr).abs());
        u64::try_from(distance).unwrap_or(u64::MAX)
    }

    /// Get the hex directly adjacent to this one in the given direction.
    /// This is plain integer addition, so it overflows at the edge of the
    /// `i64` range. Use [Grid::hex_neighbors](crate::Grid::hex_neighbors)
    /// for a checked version.
    pub fn adjacent(self, direction: HexDirection) -> Hex {
        self + direction.offset()
    }

    /// Get an iterator of all the hexes directly adjacent to this one. The
    /// iterator will always contain exactly 6 values, in [HexDirection]
    /// order.
    pub fn adjacents(self) -> impl Iterator<Item = Hex> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }
}

impl From<(i64, i64)> for Hex {
    fn from((q, r): (i64, i64)) -> Self {
        Self::new(q, r)
    }
}

/// A hex position with real-valued components. This is only ever an
/// intermediate value, e.g. the result of mapping a pixel into hex space, and
/// has to be rounded into a [Hex] before it's useful.
#[derive(Copy, Clone, Debug, Default, PartialEq, Display)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct FractionalHex {
    q: f64,
    r: f64,
}

impl FractionalHex {
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        -(self.q + self.r)
    }

    /// Round to the nearest whole hex, using cube rounding. Each of the three
    /// components is rounded independently, then whichever one drifted the
    /// most gets recomputed from the other two so that `q+r+s=0` holds.
    ///
    /// Ties are broken in a fixed order: `q` is only corrected if its error
    /// is strictly greater than both others, then `r` if its error is
    /// strictly greater than `s`'s. Otherwise `s` is the corrected component,
    /// which is implicit because we never store it. Don't reorder these
    /// comparisons, the output has to be bit-for-bit stable.
    ///
    /// Components beyond the range of `i64` (including NaN, which goes to 0)
    /// saturate instead of overflowing.
    pub fn round(self) -> Hex {
        let mut q = round_half_away(self.q());
        let mut r = round_half_away(self.r());
        let s = round_half_away(self.s());

        let q_diff = (q as f64 - self.q()).abs();
        let r_diff = (r as f64 - self.r()).abs();
        let s_diff = (s as f64 - self.s()).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = r.saturating_add(s).saturating_neg();
        } else if r_diff > s_diff {
            r = q.saturating_add(s).saturating_neg();
        }

        Hex::new(q, r)
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self::new(hex.q() as f64, hex.r() as f64)
    }
}

/// Round a float to the nearest integer, with halves going away from zero.
/// This is computed as add-then-truncate rather than [f64::round], because
/// the two disagree on a handful of values just below one half (e.g.
/// `0.49999999999999994`) and hex lookups need to be stable. Out-of-range
/// values saturate, per the semantics of `as`.
fn round_half_away(value: f64) -> i64 {
    if value < 0.0 {
        (value - 0.5) as i64
    } else {
        (value + 0.5) as i64
    }
}

/// The 6 directions in which hexes can line up side-to-side. Each entry
/// corresponds to one of the axial unit offsets. The names describe a
/// flat-topped grid where `y` increases upward; under other orientations the
/// offsets are the same but the names are only approximate.
///
/// See this page for more info:
/// https://www.redblobgames.com/grids/hexagons/#neighbors-axial
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    Up,
    UpRight,
    DownRight,
    Down,
    DownLeft,
    UpLeft,
}

impl HexDirection {
    /// Get the offset that moves a hex one step in this direction
    pub fn offset(self) -> Hex {
        match self {
            Self::Up => Hex::new(0, 1),
            Self::UpRight => Hex::new(1, 0),
            Self::DownRight => Hex::new(1, -1),
            Self::Down => Hex::new(0, -1),
            Self::DownLeft => Hex::new(-1, 0),
            Self::UpLeft => Hex::new(-1, 1),
        }
    }

    /// Get the direction pointing the opposite way
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::DownRight => Self::UpLeft,
            Self::Down => Self::Up,
            Self::DownLeft => Self::UpRight,
            Self::UpLeft => Self::DownRight,
        }
    }
}
