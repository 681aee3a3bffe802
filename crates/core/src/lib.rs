//! hexkit is a hex grid coordinate system and hit testing engine. It covers
//! the math behind hex-based UIs: converting between cell coordinates and
//! pixels, walking rings/spirals/lines, storing values in a bounded grid,
//! naming the edges between cells, and resolving clicks back onto cells and
//! edges. It draws nothing itself. Rendering layers consume the plain data it
//! produces.
//!
//! ```
//! use hexkit::{GridConfig, HexCoord, HexGrid, HexHitType, Point2};
//!
//! let config = GridConfig::default();
//! let mut grid: HexGrid<&str> = config.grid();
//! grid.set(HexCoord::new(1, -1), "castle");
//!
//! // Figure out what the user clicked on
//! let tester = config.hit_tester();
//! let result = tester.hit_test_in_grid(
//!     Point2::new(10.0, 12.0),
//!     grid.radius(),
//! );
//! assert_ne!(result.hit_type, HexHitType::None);
//! ```
//!
//! See [GridConfig] for details on how a grid can be customized, and
//! [hex] for a description of the coordinate systems.

pub mod config;
pub mod hex;
pub mod hit;
pub mod render;
mod util;

pub use crate::{
    config::GridConfig,
    hex::{
        hex_line, hex_ring, hex_spiral, FractionalHexCoord, HexCoord,
        HexCoordMap, HexCoordSet, HexCubeCoord, HexDirection, HexGrid,
        HexLayout,
    },
    hit::{point_to_segment_distance, HexHitResult, HexHitTester, HexHitType},
    render::{
        boundary_edges,
        config::{HexCellStyle, HexEdgeStyle, HexRenderConfig},
        grid_edges, hex_edge_vertices, hex_vertices, hex_vertices_3d,
        interior_edges, prepare_grid_render_data,
        unit::Color4,
        GridRenderer, HexEdge, HexGridRenderData,
    },
    util::{
        grid_len,
        range::NumRange,
        unit::{Point2, Point3},
    },
};
