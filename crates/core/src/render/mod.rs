//! Geometry and data prep for drawing hex grids. Nothing in here draws
//! anything itself (except the optional SVG output). Instead, it computes
//! cell vertices, enumerates edges, and bundles it all into a
//! [HexGridRenderData] snapshot that any rendering layer can consume.
//!
//! ## Edges
//!
//! Every edge between two cells can be named from either side: the east edge
//! of `(0, 0)` is the same line as the west edge of `(1, 0)`. To give each edge
//! a single identity, we only ever name it using one of the three
//! [canonical](HexDirection::CANONICAL) directions (E, NE, NW). See
//! [HexEdge::canonical].

pub mod config;
#[cfg(feature = "svg")]
pub mod svg;
pub mod unit;

use crate::{
    hex::{HexCoord, HexDirection, HexGrid, HexLayout},
    render::config::HexRenderConfig,
    timed,
    util::unit::{Point2, Point3},
};
use anyhow::Context;
use derive_more::Display;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};
use validator::Validate;

/// Indexes (into the output of [hex_vertices]) of the two vertices that bound
/// each side of a cell, in direction order
const EDGE_VERTEX_INDEXES: [(usize, usize); 6] = [
    (1, 2), // E
    (0, 1), // NE
    (5, 0), // NW
    (4, 5), // W
    (3, 4), // SW
    (2, 3), // SE
];

/// One side of a cell, which is also one side of the neighboring cell in
/// that direction.
///
/// Any of the 6 directions can be used to name an edge, but most code
/// (including everything that enumerates edges) works with the **canonical**
/// form, where `dir` is E, NE, or NW. Use [HexEdge::canonical] to get there.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{} {}", coord, dir)]
pub struct HexEdge {
    /// The cell this edge is named from
    pub coord: HexCoord,
    /// Which side of the cell the edge is on
    pub dir: HexDirection,
}

impl HexEdge {
    /// Create an edge exactly as given, without normalizing it
    pub const fn new(coord: HexCoord, dir: HexDirection) -> Self {
        Self { coord, dir }
    }

    /// Get the canonical name for a side of a cell. Canonical directions are
    /// kept as-is. Any other direction gets re-expressed from the neighbor's
    /// side, using the opposite direction, which is always canonical:
    ///
    /// `(c, W)` → `(c.neighbor(W), E)`, `(c, SW)` → `(c.neighbor(SW), NE)`,
    /// `(c, SE)` → `(c.neighbor(SE), NW)`.
    pub fn canonical(coord: HexCoord, dir: HexDirection) -> Self {
        if dir.is_canonical() {
            Self::new(coord, dir)
        } else {
            Self::new(coord.neighbor(dir), dir.opposite())
        }
    }

    /// Convert this edge to its canonical name. Idempotent.
    pub fn normalize(self) -> Self {
        Self::canonical(self.coord, self.dir)
    }

    /// Is this edge already in its canonical form?
    pub fn is_canonical(self) -> bool {
        self.dir.is_canonical()
    }

    /// The two cells that share this edge: the one it's named from, then the
    /// one on the other side
    pub fn cells(self) -> (HexCoord, HexCoord) {
        (self.coord, self.coord.neighbor(self.dir))
    }
}

/// Get the 6 vertices of a pointy-top cell, in pixel space. Vertex `i` is at
/// angle `90° - i * 60°` from the center, so the first vertex is at the top
/// and the rest go clockwise on screen (since `+y` is down).
pub fn hex_vertices(
    layout: &HexLayout,
    coord: HexCoord,
    radius: f64,
) -> [Point2; 6] {
    let center = layout.to_pixel(coord);
    let mut vertices = [Point2::ZERO; 6];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle = FRAC_PI_2 - (i as f64) * FRAC_PI_3;
        // Negate y, to go from math orientation to screen orientation
        *vertex = Point2::new(
            center.x + radius * angle.cos(),
            center.y - radius * angle.sin(),
        );
    }
    vertices
}

/// Same as [hex_vertices], but lifted onto the 3D plane `y = 0` (see
/// [Point2::to_xz_plane])
pub fn hex_vertices_3d(
    layout: &HexLayout,
    coord: HexCoord,
    radius: f64,
) -> [Point3; 6] {
    hex_vertices(layout, coord, radius).map(Point2::to_xz_plane)
}

/// Get the two vertices that bound one side of a cell. Works on the output of
/// either [hex_vertices] or [hex_vertices_3d].
pub fn hex_edge_vertices<V: Copy>(
    vertices: &[V; 6],
    dir: HexDirection,
) -> (V, V) {
    let (a, b) = EDGE_VERTEX_INDEXES[dir.index()];
    (vertices[a], vertices[b])
}

/// The 3 canonical edges (E, NE, NW) of every cell in the grid, in spiral
/// order. No edge appears twice. Edges on the south/west side of the grid's
/// boundary are *not* included, since their canonical names belong to cells
/// outside the grid. See [boundary_edges] for those.
pub fn grid_edges<T>(grid: &HexGrid<T>) -> Vec<HexEdge> {
    grid.all()
        .into_iter()
        .flat_map(|coord| {
            HexDirection::CANONICAL
                .iter()
                .map(move |dir| HexEdge::new(coord, *dir))
        })
        .collect()
}

/// Every edge shared by two cells that are both in the grid, each exactly
/// once (in canonical form)
pub fn interior_edges<T>(grid: &HexGrid<T>) -> Vec<HexEdge> {
    grid_edges(grid)
        .into_iter()
        .filter(|edge| grid.is_valid(edge.cells().1))
        .collect()
}

/// Every edge between a cell in the grid and a cell outside it. Unlike the
/// other edge enumerations, these edges are **not** canonical. Each one is
/// named from the cell inside the grid, which can use any of the 6
/// directions. That keeps the owning cell available to the renderer.
pub fn boundary_edges<T>(grid: &HexGrid<T>) -> Vec<HexEdge> {
    let mut edges = Vec::new();
    for coord in grid.all() {
        for dir in HexDirection::ALL {
            if !grid.is_valid(coord.neighbor(dir)) {
                edges.push(HexEdge::new(coord, dir));
            }
        }
    }
    edges
}

/// Pre-computed geometry for drawing a whole grid. This is a pure function of
/// the grid's radius and the render config, so it can be cached until either
/// changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HexGridRenderData {
    /// Every valid cell, in spiral order
    pub cells: Vec<HexCoord>,
    /// Vertices for each cell, on the `y = 0` plane. Same order as `cells`.
    pub vertices: Vec<[Point3; 6]>,
    /// See [grid_edges]
    pub all_edges: Vec<HexEdge>,
    /// See [boundary_edges]
    pub boundary_edges: Vec<HexEdge>,
    /// See [interior_edges]
    pub interior_edges: Vec<HexEdge>,
}

impl HexGridRenderData {
    /// Serialize this snapshot into JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("error serializing render data")
    }
}

/// Compute all the data needed to render a grid. The grid's contents are
/// irrelevant here, only its radius matters.
pub fn prepare_grid_render_data<T>(
    grid: &HexGrid<T>,
    config: &HexRenderConfig,
) -> HexGridRenderData {
    let cells = grid.all();
    let vertices = cells
        .iter()
        .map(|coord| hex_vertices_3d(&config.layout, *coord, config.hex_radius))
        .collect();

    HexGridRenderData {
        cells,
        vertices,
        all_edges: grid_edges(grid),
        boundary_edges: boundary_edges(grid),
        interior_edges: interior_edges(grid),
    }
}

/// A grid renderer is used to convert grids into render data and visual
/// output formats. A renderer is created using a particular
/// [HexRenderConfig], and from there can be used to render any number of
/// grids any number of times.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new renderer.
///
/// ## Supported Formats
/// - [HexGridRenderData] (JSON with the `json` feature)
/// - SVG (2D, with the `svg` feature)
#[derive(Clone, Debug, Serialize)]
pub struct GridRenderer {
    render_config: HexRenderConfig,
}

impl GridRenderer {
    /// Initialize a new renderer with the given options. Returns an error if
    /// the render config is invalid.
    pub fn new(render_config: HexRenderConfig) -> anyhow::Result<Self> {
        render_config
            .validate()
            .context("invalid render config")?;
        if !render_config.is_regular() {
            warn!(
                "Layout size {} doesn't match hex radius {}; cell outlines \
                won't line up with cell spacing",
                render_config.layout.size, render_config.hex_radius
            );
        }
        debug!("Created renderer with config {:?}", render_config);
        Ok(Self { render_config })
    }

    /// Get a reference to the config that this renderer uses
    pub fn render_config(&self) -> &HexRenderConfig {
        &self.render_config
    }

    /// Get the pixel position of a cell's center
    pub fn cell_center(&self, coord: HexCoord) -> Point2 {
        self.render_config.layout.to_pixel(coord)
    }

    /// Get the pixel positions of a cell's vertices. See [hex_vertices].
    pub fn cell_vertices(&self, coord: HexCoord) -> [Point2; 6] {
        hex_vertices(
            &self.render_config.layout,
            coord,
            self.render_config.hex_radius,
        )
    }

    /// Get the two pixel positions that bound an edge
    pub fn edge_vertices(&self, edge: HexEdge) -> (Point2, Point2) {
        hex_edge_vertices(&self.cell_vertices(edge.coord), edge.dir)
    }

    /// Compute the render data snapshot for a grid. See
    /// [prepare_grid_render_data].
    pub fn render_data<T>(&self, grid: &HexGrid<T>) -> HexGridRenderData {
        timed!(
            "Render data prep",
            prepare_grid_render_data(grid, &self.render_config)
        )
    }

    /// Render a grid as a 2D SVG. Returns the SVG in a string.
    #[cfg(feature = "svg")]
    pub fn render_as_svg<T>(&self, grid: &HexGrid<T>) -> String {
        let svg = timed!("SVG rendering", svg::grid_to_svg(grid, self));
        svg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HexCoordSet;
    use assert_approx_eq::assert_approx_eq;
    use std::collections::HashSet;

    fn layout() -> HexLayout {
        HexLayout::new(Point2::new(10.0, 10.0), Point2::ZERO)
    }

    #[test]
    fn test_canonical() {
        let c = HexCoord::new(2, -1);
        for dir in HexDirection::CANONICAL {
            assert_eq!(HexEdge::canonical(c, dir), HexEdge::new(c, dir));
        }
        assert_eq!(
            HexEdge::canonical(c, HexDirection::W),
            HexEdge::new(HexCoord::new(1, -1), HexDirection::E)
        );
        assert_eq!(
            HexEdge::canonical(c, HexDirection::SW),
            HexEdge::new(HexCoord::new(1, 0), HexDirection::NE)
        );
        assert_eq!(
            HexEdge::canonical(c, HexDirection::SE),
            HexEdge::new(HexCoord::new(2, 0), HexDirection::NW)
        );
    }

    #[test]
    fn test_canonical_shared_edge() {
        // Both cells that share an edge should agree on its name
        let c = HexCoord::new(-1, 3);
        for dir in HexDirection::ALL {
            let edge = HexEdge::canonical(c, dir);
            let other_side =
                HexEdge::canonical(c.neighbor(dir), dir.opposite());
            assert_eq!(edge, other_side);
            assert!(edge.is_canonical());
            assert_eq!(edge.normalize(), edge);
        }
    }

    #[test]
    fn test_hex_vertices() {
        let vertices = hex_vertices(&layout(), HexCoord::ORIGIN, 10.0);
        let half_width = 5.0 * 3.0_f64.sqrt();
        let expected = [
            (0.0, -10.0),
            (half_width, -5.0),
            (half_width, 5.0),
            (0.0, 10.0),
            (-half_width, 5.0),
            (-half_width, -5.0),
        ];
        for (vertex, (x, y)) in vertices.iter().zip(expected) {
            assert_approx_eq!(vertex.x, x);
            assert_approx_eq!(vertex.y, y);
        }
    }

    #[test]
    fn test_hex_vertices_offset() {
        let layout =
            HexLayout::new(Point2::new(10.0, 10.0), Point2::new(50.0, 30.0));
        let vertices = hex_vertices(&layout, HexCoord::ORIGIN, 10.0);
        assert_approx_eq!(vertices[0].x, 50.0);
        assert_approx_eq!(vertices[0].y, 20.0);
        assert_approx_eq!(vertices[3].x, 50.0);
        assert_approx_eq!(vertices[3].y, 40.0);
    }

    #[test]
    fn test_hex_vertices_3d() {
        let coord = HexCoord::new(1, -1);
        let flat = hex_vertices(&layout(), coord, 10.0);
        let vertices = hex_vertices_3d(&layout(), coord, 10.0);
        for (v2, v3) in flat.iter().zip(vertices.iter()) {
            assert_eq!(v3.x, v2.x);
            assert_eq!(v3.y, 0.0);
            assert_eq!(v3.z, v2.y);
        }
    }

    #[test]
    fn test_hex_edge_vertices() {
        let vertices = hex_vertices(&layout(), HexCoord::ORIGIN, 10.0);
        assert_eq!(
            hex_edge_vertices(&vertices, HexDirection::E),
            (vertices[1], vertices[2])
        );
        assert_eq!(
            hex_edge_vertices(&vertices, HexDirection::NW),
            (vertices[5], vertices[0])
        );
        // Works the same in 3D
        let vertices = hex_vertices_3d(&layout(), HexCoord::ORIGIN, 10.0);
        assert_eq!(
            hex_edge_vertices(&vertices, HexDirection::SE),
            (vertices[2], vertices[3])
        );

        // The east edge should be a vertical line on the right side
        let vertices = hex_vertices(&layout(), HexCoord::ORIGIN, 10.0);
        let (a, b) = hex_edge_vertices(&vertices, HexDirection::E);
        assert_approx_eq!(a.x, b.x);
        assert!(a.x > 0.0);
    }

    #[test]
    fn test_shared_edge_geometry() {
        // Both sides of an edge should produce the same segment
        let layout = layout();
        let c = HexCoord::ORIGIN;
        for dir in HexDirection::ALL {
            let (a, b) =
                hex_edge_vertices(&hex_vertices(&layout, c, 10.0), dir);
            let neighbor = c.neighbor(dir);
            let (na, nb) = hex_edge_vertices(
                &hex_vertices(&layout, neighbor, 10.0),
                dir.opposite(),
            );
            // Vertex order flips from the other side
            assert_approx_eq!(a.x, nb.x);
            assert_approx_eq!(a.y, nb.y);
            assert_approx_eq!(b.x, na.x);
            assert_approx_eq!(b.y, na.y);
        }
    }

    #[test]
    fn test_grid_edges() {
        let grid: HexGrid<()> = HexGrid::new(1);
        let edges = grid_edges(&grid);
        assert_eq!(edges.len(), 21);
        assert!(edges.iter().all(|edge| edge.is_canonical()));
        let unique: HashSet<HexEdge> = edges.iter().copied().collect();
        assert_eq!(unique.len(), edges.len());
        // Each cell contributes exactly its own E, NE, and NW edges
        for (i, coord) in grid.all().into_iter().enumerate() {
            let dirs: Vec<HexDirection> =
                edges[i * 3..i * 3 + 3].iter().map(|edge| edge.dir).collect();
            assert!(edges[i * 3..i * 3 + 3]
                .iter()
                .all(|edge| edge.coord == coord));
            assert_eq!(dirs, HexDirection::CANONICAL);
        }
        // The west edge of the westmost cell is named from outside the grid
        let outside = HexEdge::canonical(HexCoord::new(-1, 0), HexDirection::W);
        assert!(!unique.contains(&outside));

        let grid: HexGrid<()> = HexGrid::new(0);
        assert_eq!(grid_edges(&grid).len(), 3);
    }

    #[test]
    fn test_interior_edges() {
        let grid: HexGrid<()> = HexGrid::new(1);
        let edges = interior_edges(&grid);
        assert_eq!(edges.len(), 12);
        for edge in &edges {
            let (a, b) = edge.cells();
            assert!(grid.is_valid(a));
            assert!(grid.is_valid(b));
        }

        let grid: HexGrid<()> = HexGrid::new(0);
        assert!(interior_edges(&grid).is_empty());
    }

    #[test]
    fn test_boundary_edges() {
        let grid: HexGrid<()> = HexGrid::new(1);
        let edges = boundary_edges(&grid);
        assert_eq!(edges.len(), 18);
        for edge in &edges {
            let (inside, outside) = edge.cells();
            assert!(grid.is_valid(inside));
            assert!(!grid.is_valid(outside));
        }
        // The center cell has no boundary edges
        assert!(edges.iter().all(|edge| edge.coord != HexCoord::ORIGIN));

        let grid: HexGrid<()> = HexGrid::new(0);
        assert_eq!(boundary_edges(&grid).len(), 6);
    }

    #[test]
    fn test_boundary_and_interior_are_disjoint() {
        let grid: HexGrid<()> = HexGrid::new(3);
        let interior: HashSet<HexEdge> =
            interior_edges(&grid).into_iter().collect();
        for edge in boundary_edges(&grid) {
            assert!(!interior.contains(&edge.normalize()));
        }
    }

    #[test]
    fn test_prepare_grid_render_data() {
        let grid: HexGrid<u8> = HexGrid::new(2);
        let config = HexRenderConfig::with_hex_radius(10.0);
        let data = prepare_grid_render_data(&grid, &config);

        assert_eq!(data.cells.len(), 19);
        assert_eq!(data.vertices.len(), 19);
        assert_eq!(data.cells, grid.all());
        assert_eq!(data.all_edges, grid_edges(&grid));
        assert_eq!(data.boundary_edges, boundary_edges(&grid));
        assert_eq!(data.interior_edges, interior_edges(&grid));
        for (coord, vertices) in data.cells.iter().zip(&data.vertices) {
            assert_eq!(
                *vertices,
                hex_vertices_3d(&config.layout, *coord, config.hex_radius)
            );
            assert!(vertices.iter().all(|v| v.y == 0.0));
        }
        let unique: HexCoordSet = data.cells.iter().copied().collect();
        assert_eq!(unique.len(), data.cells.len());
    }

    #[test]
    fn test_renderer_rejects_invalid_config() {
        let mut config = HexRenderConfig::default();
        config.dash_gap = -1.0;
        assert!(GridRenderer::new(config).is_err());
    }

    #[test]
    fn test_renderer_edge_vertices() {
        let renderer =
            GridRenderer::new(HexRenderConfig::with_hex_radius(10.0)).unwrap();
        let edge = HexEdge::new(HexCoord::ORIGIN, HexDirection::E);
        let (a, b) = renderer.edge_vertices(edge);
        let half_width = 5.0 * 3.0_f64.sqrt();
        assert_approx_eq!(a.x, half_width);
        assert_approx_eq!(a.y, -5.0);
        assert_approx_eq!(b.x, half_width);
        assert_approx_eq!(b.y, 5.0);
        assert_eq!(renderer.cell_center(HexCoord::ORIGIN), Point2::ZERO);
    }
}
