use crate::{
    hex::HexGrid,
    render::{boundary_edges, grid_edges, GridRenderer},
    util::unit::Point2,
};
use svg::{
    node::{
        element::{Group, Line, Polygon},
        Comment,
    },
    Document,
};

/// Empty space around the grid, in pixels
const VIEW_BOX_MARGIN: f64 = 2.0;

/// Render a grid as an SVG. This will be a 2D top-down rendering of the cell
/// fills and edge lines, styled according to the renderer's config.
pub fn grid_to_svg<T>(grid: &HexGrid<T>, renderer: &GridRenderer) -> Document {
    let config = renderer.render_config();
    let cells = grid.all();

    // Fit the view box around every vertex in the grid, so it works with any
    // layout origin or scale
    let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for coord in &cells {
        for vertex in renderer.cell_vertices(*coord) {
            min = Point2::new(min.x.min(vertex.x), min.y.min(vertex.y));
            max = Point2::new(max.x.max(vertex.x), max.y.max(vertex.y));
        }
    }
    let top_left = Point2::new(
        (min.x - VIEW_BOX_MARGIN).floor(),
        (min.y - VIEW_BOX_MARGIN).floor(),
    );
    let bottom_right = Point2::new(
        (max.x + VIEW_BOX_MARGIN).ceil(),
        (max.y + VIEW_BOX_MARGIN).ceil(),
    );

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                top_left.x,
                top_left.y,
                // Width and height
                bottom_right.x - top_left.x,
                bottom_right.y - top_left.y,
            ),
        )
        .add(Comment::new(format!("\n{:#?}\n", config)));

    if config.draw_cells {
        let style = config.default_cell;
        let mut group = Group::new()
            .set("fill", style.fill_color.to_html())
            .set("fill-opacity", style.fill_color.opacity());
        for coord in &cells {
            group = group.add(Comment::new(coord.to_string())).add(
                Polygon::new().set(
                    "points",
                    renderer
                        .cell_vertices(*coord)
                        .iter()
                        .map(|vertex| (vertex.x, vertex.y))
                        .collect::<Vec<_>>(),
                ),
            );
        }
        document = document.add(group);
    }

    if config.draw_edges {
        let style = config.default_edge;
        let mut group = Group::new()
            .set("stroke", style.color.to_html())
            .set("stroke-opacity", style.color.opacity())
            .set("stroke-linecap", "round");
        if style.dashed {
            group = group.set(
                "stroke-dasharray",
                format!("{} {}", config.dash_length, config.dash_gap),
            );
        }
        // The canonical edge set skips the south/west rim, so draw those
        // from the inside
        let edges = grid_edges(grid).into_iter().chain(
            boundary_edges(grid)
                .into_iter()
                .filter(|edge| !edge.is_canonical()),
        );
        for edge in edges {
            let (a, b) = renderer.edge_vertices(edge);
            group = group.add(
                Line::new()
                    .set("x1", a.x)
                    .set("y1", a.y)
                    .set("x2", b.x)
                    .set("y2", b.y),
            );
        }
        document = document.add(group);
    }

    document
}
