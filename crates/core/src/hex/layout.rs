use crate::{
    hex::unit::{FractionalHexCoord, HexCoord},
    util::unit::Point2,
};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// √3, which shows up all over pointy-top hex geometry
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A layout maps between hex coordinates and 2D pixel space. Cells are
/// pointy-topped. A layout is stateless: create one per rendering context and
/// reuse it for every conversion.
///
/// See the module-level docs at [crate::hex] for a description of pixel
/// space.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    /// Scale factor for each pixel axis. For regular hexagons, both
    /// components are equal to the distance from a cell's center to one of
    /// its vertices.
    pub size: Point2,
    /// Pixel position of the center of cell `(0, 0)`
    pub origin: Point2,
}

impl HexLayout {
    pub const fn new(size: Point2, origin: Point2) -> Self {
        Self { size, origin }
    }

    /// Orientation matrix for pointy-top cells. Maps an axial `(q, r)` vector
    /// to an unscaled pixel offset.
    fn forward_matrix() -> Matrix2<f64> {
        Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0)
    }

    /// Inverse of [Self::forward_matrix]
    fn inverse_matrix() -> Matrix2<f64> {
        Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
    }

    /// Get the pixel position of a cell's center
    pub fn to_pixel(&self, coord: HexCoord) -> Point2 {
        let offset: Point2 = (Self::forward_matrix()
            * Vector2::new(f64::from(coord.q), f64::from(coord.r)))
        .into();
        Point2::new(
            self.size.x * offset.x + self.origin.x,
            self.size.y * offset.y + self.origin.y,
        )
    }

    /// Convert a pixel position to (fractional) axial coordinates, without
    /// snapping it to a cell
    pub fn fractional_from_pixel(&self, point: Point2) -> FractionalHexCoord {
        let normalized = Vector2::new(
            (point.x - self.origin.x) / self.size.x,
            (point.y - self.origin.y) / self.size.y,
        );
        let axial = Self::inverse_matrix() * normalized;
        FractionalHexCoord::new(axial.x, axial.y)
    }

    /// Get the cell that contains a pixel position. For any cell `c`,
    /// `from_pixel(to_pixel(c)) == c`.
    pub fn from_pixel(&self, point: Point2) -> HexCoord {
        self.fractional_from_pixel(point).round()
    }
}
