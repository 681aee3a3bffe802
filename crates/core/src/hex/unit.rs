//! This sub-module contains basic types for units that form the hex coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use crate::util::range::NumRange;
use anyhow::anyhow;
use derive_more::{
    Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A whole hex cell, in axial coordinates. See module-level documentation for
/// a description of the coordinate system.
///
/// ## Implementation
///
/// Every cell center satisfies `q + r + s = 0`, so this struct only needs to
/// store `q` and `r` and derives `s` as needed. Use [Self::to_cube] if you
/// want all three components at once.
///
/// Coordinates are plain values: every operation returns a new coordinate.
/// Arithmetic is available through the standard operators (`+`, `-`, unary
/// `-`, and `* k` for scalar scaling).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", q, r)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The third cube component. Since q+r+s=0 for all cells, we can derive
    /// s from q & r.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Multiply both components by a constant
    pub fn scale(self, k: i32) -> Self {
        self * k
    }

    /// Get the location of the cell adjacent to this one in a particular
    /// direction
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.to_vector()
    }

    /// Get all 6 cells directly adjacent to this one, in the same order as
    /// [HexDirection::ALL]
    pub fn neighbors(self) -> [Self; 6] {
        HexDirection::ALL.map(|dir| self.neighbor(dir))
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the coordinates are
    /// equal, 1 if the cells are adjacent, 2 if there is 1 cell between them,
    /// etc.
    ///
    /// The math is done in `i64`, so this can't overflow for any pair of
    /// coordinates. Distances too large for an `i32` saturate at
    /// [i32::MAX].
    pub fn distance_to(self, other: Self) -> i32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = -dq - dr;
        // IMPORTANT: We divide by 2 here because each step between adjacent
        // cells moves two of the three cube components
        let distance = (dq.abs() + dr.abs() + ds.abs()) / 2;
        i32::try_from(distance).unwrap_or(i32::MAX)
    }

    /// Distance from the origin cell
    pub fn length(self) -> i32 {
        self.distance_to(Self::ORIGIN)
    }

    /// Convert to the three-component form
    pub const fn to_cube(self) -> HexCubeCoord {
        HexCubeCoord {
            q: self.q,
            r: self.r,
            s: self.s(),
        }
    }
}

impl From<HexCubeCoord> for HexCoord {
    fn from(cube: HexCubeCoord) -> Self {
        cube.to_axial()
    }
}

/// A cell in cube coordinates. The three components always satisfy
/// `q + r + s = 0`, which is enforced at construction.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct HexCubeCoord {
    q: i32,
    r: i32,
    s: i32,
}

impl HexCubeCoord {
    /// Construct a new cube coordinate. Returns an error if the components
    /// don't fall on the plane `q + r + s = 0`.
    pub fn new(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(anyhow!(
                "Invalid cube coordinate ({}, {}, {}); must be on the plane \
                q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self { q, r, s })
        }
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

    /// Drop the redundant `s` component
    pub const fn to_axial(self) -> HexCoord {
        HexCoord::new(self.q, self.r)
    }
}

impl From<HexCoord> for HexCubeCoord {
    fn from(coord: HexCoord) -> Self {
        coord.to_cube()
    }
}

/// A point in axial space with fractional components. These come out of
/// inverting pixel positions and interpolating between cells, and are almost
/// never cell centers. Use [Self::round] to snap one to the nearest cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Display, Serialize)]
#[display(fmt = "({}, {})", q, r)]
pub struct FractionalHexCoord {
    pub q: f64,
    pub r: f64,
}

impl FractionalHexCoord {
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    pub fn s(self) -> f64 {
        -self.q - self.r
    }

    /// Linearly interpolate between two cells. `t = 0` gives `a` and `t = 1`
    /// gives `b`.
    pub fn lerp(a: HexCoord, b: HexCoord, t: f64) -> Self {
        let q: NumRange<f64> = NumRange::new(a.q.into(), b.q.into());
        let r: NumRange<f64> = NumRange::new(a.r.into(), b.r.into());
        Self::new(q.lerp(t), r.lerp(t))
    }

    /// Snap to the nearest cell using cube rounding. Each of the three cube
    /// components is rounded on its own, which can knock the result off the
    /// plane `q + r + s = 0`. To fix that, the component that moved the most
    /// during rounding is thrown out and recomputed from the other two.
    ///
    /// Ties are broken in favor of keeping `q`, then `r`: `q` is only
    /// recomputed if its error is strictly the largest, and `r` only if its
    /// error is strictly larger than `s`'s.
    pub fn round(self) -> HexCoord {
        let s = self.s();

        let mut rq = self.q.round();
        let mut rr = self.r.round();
        let rs = s.round();

        let q_diff = (rq - self.q).abs();
        let r_diff = (rr - self.r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff > s_diff {
            rr = -rq - rs;
        }
        // Otherwise s gets recomputed, which is implicit in axial form

        HexCoord::new(rq as i32, rr as i32)
    }
}

impl From<HexCoord> for FractionalHexCoord {
    fn from(coord: HexCoord) -> Self {
        Self::new(coord.q.into(), coord.r.into())
    }
}

/// The 6 directions in which hexes can line up side-to-side. For any given
/// cell, a direction represents two useful things:
///
/// - Direction to a neighboring cell's center point
/// - The side of this cell that is shared with that neighbor
///
/// Cells are pointy-topped, so E and W point at flat sides. The order of
/// variants (counter-clockwise on screen, starting at E) determines the
/// numeric encoding, and the first three are the **canonical** directions
/// used to give each edge a single identity. See
/// [HexEdge](crate::HexEdge).
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HexDirection {
    /// East (+q)
    E,
    /// Northeast (+q, -r)
    NE,
    /// Northwest (-r)
    NW,
    /// West (-q)
    W,
    /// Southwest (-q, +r)
    SW,
    /// Southeast (+r)
    SE,
}

impl HexDirection {
    /// Every direction, in encoding order
    pub const ALL: [Self; 6] =
        [Self::E, Self::NE, Self::NW, Self::W, Self::SW, Self::SE];

    /// The directions that edges are canonically expressed in. Every edge in
    /// a grid has exactly one representation using one of these.
    pub const CANONICAL: [Self; 3] = [Self::E, Self::NE, Self::NW];

    /// Numeric encoding of this direction, 0-5
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [Self::index]. Returns `None` if the index is over 5.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Is this one of the canonical directions (E, NE, or NW)?
    pub fn is_canonical(self) -> bool {
        self <= Self::NW
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % Self::ALL.len()]
    }

    /// Get an offset that would move a coordinate one cell in this direction
    pub fn to_vector(self) -> HexCoord {
        match self {
            Self::E => HexCoord::new(1, 0),
            Self::NE => HexCoord::new(1, -1),
            Self::NW => HexCoord::new(0, -1),
            Self::W => HexCoord::new(-1, 0),
            Self::SW => HexCoord::new(-1, 1),
            Self::SE => HexCoord::new(0, 1),
        }
    }
}
