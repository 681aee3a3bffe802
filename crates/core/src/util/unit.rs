use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A point in 2D pixel space. This is what a [HexLayout](crate::HexLayout)
/// maps hex coordinates into, and what hit testing maps back out of. These
/// positions aren't really useful outside of rendering and input handling, so
/// stick to [HexCoord](crate::HexCoord) for stuff like distances, traversal,
/// etc.
///
/// ## 2D Coordinates
///
/// The origin is wherever the layout puts it. Right is positive x. **Down is
/// positive y**, following the usual screen convention.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    pub fn distance_to(self, other: Point2) -> f64 {
        let delta = other - self;
        (delta.x * delta.x + delta.y * delta.y).sqrt()
    }

    /// The point halfway between this one and the other
    pub fn midpoint(self, other: Point2) -> Point2 {
        (self + other) / 2.0
    }
}

impl From<nalgebra::Vector2<f64>> for Point2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

/// A point in 3D render space. Grid geometry lives on the plane `y = 0`: the
/// 2D pixel `x` stays `x` and the 2D pixel `y` becomes `z`. See
/// [Point2::to_xz_plane].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Point2 {
    /// Lift this point into 3D space, onto the `y = 0` plane
    pub fn to_xz_plane(self) -> Point3 {
        Point3::new(self.x, 0.0, self.y)
    }
}
