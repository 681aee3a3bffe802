//! Map pixel positions (e.g. mouse clicks) back onto cells and edges.

use crate::{
    config::GridConfig,
    hex::{HexCoord, HexDirection, HexLayout},
    render::{hex_edge_vertices, hex_vertices, HexEdge},
    util::{range::NumRange, unit::Point2},
};
use log::trace;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Find the shortest distance from a point to a line segment. Also returns
/// the position `t` of the closest point along the segment, where `0` is `a`
/// and `1` is `b`. If the segment has zero length, this is just the distance
/// from `p` to `a`, with `t = 0`.
pub fn point_to_segment_distance(
    p: Point2,
    a: Point2,
    b: Point2,
) -> (f64, f64) {
    let segment = b - a;
    let length_squared = segment.x * segment.x + segment.y * segment.y;
    if length_squared == 0.0 {
        return (p.distance_to(a), 0.0);
    }

    // Project the point onto the line, then clamp to stay on the segment
    let offset = p - a;
    let t = NumRange::<f64>::normal_range().clamp(
        (offset.x * segment.x + offset.y * segment.y) / length_squared,
    );
    let closest = a + segment * t;
    (p.distance_to(closest), t)
}

/// What kind of grid element a hit landed on
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexHitType {
    /// Missed the grid entirely
    None,
    /// Inside a cell, away from its edges
    Cell,
    /// Within the edge threshold of an edge
    Edge,
}

/// The outcome of a hit test
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexHitResult {
    pub hit_type: HexHitType,
    /// The cell containing the point
    pub cell: HexCoord,
    /// The edge nearest to the point, in canonical form. This is populated
    /// for both cell and edge hits, so callers can e.g. highlight the nearest
    /// edge on hover.
    pub edge: HexEdge,
    /// Distance from the point to `edge`, in pixels
    pub distance: f64,
}

impl HexHitResult {
    /// A result that hit nothing. The other fields are zeroed and shouldn't
    /// be used.
    pub const fn none() -> Self {
        Self {
            hit_type: HexHitType::None,
            cell: HexCoord::ORIGIN,
            edge: HexEdge::new(HexCoord::ORIGIN, HexDirection::E),
            distance: 0.0,
        }
    }

    /// Did this hit land on anything?
    pub fn is_hit(&self) -> bool {
        self.hit_type != HexHitType::None
    }
}

/// Performs hit testing against a particular layout. A tester has no mutable
/// state, so one instance can be shared freely.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexHitTester {
    pub layout: HexLayout,
    /// Distance from a cell's center to any of its vertices, in pixels. This
    /// should match the radius used to render the grid.
    pub hex_radius: f64,
    /// Maximum distance from an edge for a point to count as an edge hit.
    /// Inclusive.
    pub edge_threshold: f64,
}

impl HexHitTester {
    pub const fn new(
        layout: HexLayout,
        hex_radius: f64,
        edge_threshold: f64,
    ) -> Self {
        Self {
            layout,
            hex_radius,
            edge_threshold,
        }
    }

    /// Create a tester that matches how a config renders its grid
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(
            config.render.layout,
            config.render.hex_radius,
            config.edge_threshold,
        )
    }

    /// Find the cell containing a point. Cheaper than [Self::hit_test] if you
    /// don't care about edges.
    pub fn hit_test_cell(&self, point: Point2) -> HexCoord {
        self.layout.from_pixel(point)
    }

    /// Find the edge nearest to a point, and the distance to it. Only the
    /// edges of the cell containing the point are considered. The edge is
    /// returned in canonical form.
    pub fn hit_test_edge(&self, point: Point2) -> (HexEdge, f64) {
        let (_, edge, distance) = self.nearest_edge(point);
        (edge, distance)
    }

    /// Find the cell containing a point, and whether the point is close
    /// enough to one of that cell's edges to count as hitting the edge. This
    /// never returns [HexHitType::None], see [Self::hit_test_in_grid] for
    /// bounds checking.
    pub fn hit_test(&self, point: Point2) -> HexHitResult {
        let (cell, edge, distance) = self.nearest_edge(point);
        let hit_type = if distance <= self.edge_threshold {
            HexHitType::Edge
        } else {
            HexHitType::Cell
        };
        trace!(
            "Hit test at {} landed on {} {} (edge {}, distance {})",
            point,
            hit_type,
            cell,
            edge,
            distance
        );

        HexHitResult {
            hit_type,
            cell,
            edge,
            distance,
        }
    }

    /// Same as [Self::hit_test], but returns a miss if the point is outside a
    /// grid of the given radius
    pub fn hit_test_in_grid(
        &self,
        point: Point2,
        grid_radius: i32,
    ) -> HexHitResult {
        let result = self.hit_test(point);
        if result.cell.length() > grid_radius {
            trace!("Hit test at {} is outside grid", point);
            HexHitResult::none()
        } else {
            result
        }
    }

    /// Get the pixel positions of the two endpoints of an edge
    pub fn edge_vertices(&self, edge: HexEdge) -> (Point2, Point2) {
        let vertices = hex_vertices(&self.layout, edge.coord, self.hex_radius);
        hex_edge_vertices(&vertices, edge.dir)
    }

    /// Get the pixel position of the middle of an edge
    pub fn edge_midpoint(&self, edge: HexEdge) -> Point2 {
        let (a, b) = self.edge_vertices(edge);
        a.midpoint(b)
    }

    /// Get the pixel position of a cell's center
    pub fn cell_center(&self, coord: HexCoord) -> Point2 {
        self.layout.to_pixel(coord)
    }

    /// Find the cell containing a point, then the nearest of its 6 edges.
    /// Ties go to whichever direction comes first.
    fn nearest_edge(&self, point: Point2) -> (HexCoord, HexEdge, f64) {
        let cell = self.layout.from_pixel(point);
        let vertices = hex_vertices(&self.layout, cell, self.hex_radius);

        let mut nearest_dir = HexDirection::E;
        let mut min_distance = f64::INFINITY;
        for dir in HexDirection::ALL {
            let (a, b) = hex_edge_vertices(&vertices, dir);
            let (distance, _) = point_to_segment_distance(point, a, b);
            if distance < min_distance {
                min_distance = distance;
                nearest_dir = dir;
            }
        }

        (cell, HexEdge::canonical(cell, nearest_dir), min_distance)
    }
}
