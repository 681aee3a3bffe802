use crate::{hex::HexLayout, render::unit::Color4, util::unit::Point2};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration specific to visually rendering a grid. These options have no
/// bearing on the grid's contents, only on how it's presented. In other words,
/// render data snapshots and SVGs depend on these options, but the grid itself
/// never does.
///
/// Not all render options apply to all consumers, e.g. the dash settings only
/// matter to a renderer that draws dashed edges. The documentation for each
/// field lists what it affects.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HexRenderConfig {
    /// Distance from the center of a cell to any of its vertices, in pixels.
    /// This is also the length of one side of a cell.
    #[validate(range(min = 0.001))]
    pub hex_radius: f64,

    /// Should cell fills be drawn?
    ///
    /// ## Relevant Formats
    /// - SVG
    pub draw_cells: bool,

    /// Should edge lines be drawn?
    ///
    /// ## Relevant Formats
    /// - SVG
    pub draw_edges: bool,

    /// Length of each dash segment, for dashed edges
    #[validate(range(min = 0.0))]
    pub dash_length: f64,

    /// Gap between dash segments, for dashed edges
    #[validate(range(min = 0.0))]
    pub dash_gap: f64,

    // Nested tables go last, so the config can be written out as TOML
    /// Maps cells to pixel space. For regular hexagons, both components of
    /// `layout.size` should equal [Self::hex_radius].
    #[validate(custom = "validate_layout")]
    pub layout: HexLayout,

    /// Style applied to every cell fill
    #[validate]
    pub default_cell: HexCellStyle,

    /// Style applied to every edge line
    #[validate]
    pub default_edge: HexEdgeStyle,
}

impl HexRenderConfig {
    /// Default cell radius, in pixels, when none is given
    pub const DEFAULT_HEX_RADIUS: f64 = 20.0;

    /// Build the default config for cells of a particular radius. The layout
    /// uses the radius for both axes, and puts cell `(0, 0)` at the pixel
    /// origin.
    pub fn with_hex_radius(hex_radius: f64) -> Self {
        Self {
            hex_radius,
            draw_cells: true,
            draw_edges: true,
            dash_length: 5.0,
            dash_gap: 3.0,
            layout: HexLayout::new(
                Point2::new(hex_radius, hex_radius),
                Point2::ZERO,
            ),
            default_cell: HexCellStyle {
                fill_color: Color4::new_int(50, 50, 80, 200),
            },
            default_edge: HexEdgeStyle {
                dashed: false,
                color: Color4::WHITE,
            },
        }
    }
}

impl HexRenderConfig {
    /// Do the layout's scale and the hex radius agree? If they don't, cell
    /// vertices (and the edges that hit testing measures against) won't line
    /// up with the spacing between cell centers. That's allowed, but it's
    /// almost never what you want.
    pub fn is_regular(&self) -> bool {
        self.layout.size == Point2::new(self.hex_radius, self.hex_radius)
    }
}

impl Default for HexRenderConfig {
    fn default() -> Self {
        Self::with_hex_radius(Self::DEFAULT_HEX_RADIUS)
    }
}

/// Visual style for a cell
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct HexCellStyle {
    /// Fill color. Use alpha 0 for a transparent cell.
    #[validate(custom = "validate_color")]
    pub fill_color: Color4,
}

/// Visual style for an edge
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct HexEdgeStyle {
    /// Draw as a dashed line, using the config's dash length and gap
    pub dashed: bool,
    #[validate(custom = "validate_color")]
    pub color: Color4,
}

/// A layout needs a positive scale on both axes, otherwise it can't be
/// inverted. The scale doesn't have to match `hex_radius`, see
/// [HexRenderConfig::is_regular].
fn validate_layout(layout: &HexLayout) -> Result<(), ValidationError> {
    if layout.size.x > 0.0 && layout.size.y > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("layout_size"))
    }
}

fn validate_color(color: &Color4) -> Result<(), ValidationError> {
    color
        .validate()
        .map_err(|_| ValidationError::new("color_range"))
}
