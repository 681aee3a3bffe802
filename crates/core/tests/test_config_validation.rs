use hexkit::{
    Color4, GridConfig, GridRenderer, HexCellStyle, HexEdgeStyle, HexLayout,
    HexRenderConfig, Point2,
};
use validator::ValidationErrors;

/// Pull the names of the invalid fields out of an error
fn error_fields(err: anyhow::Error) -> Vec<&'static str> {
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    error_fields
}

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        radius: 10001,        // invalid (too big)
        edge_threshold: -1.0, // invalid
        render: HexRenderConfig {
            // invalid
            layout: HexLayout::new(Point2::new(20.0, -20.0), Point2::ZERO),
            hex_radius: 20.0, // valid
            default_cell: HexCellStyle {
                fill_color: Color4::new_int(0, 0, 0, 0), // valid
            },
            default_edge: HexEdgeStyle {
                color: Color4::WHITE, // valid
                dashed: true,         // valid
            },
            draw_cells: false, // valid
            draw_edges: true,  // valid
            dash_length: 0.0,  // valid (but weird)
            dash_gap: 3.0,     // valid
        },
    };

    // This is a bit of a lazy check but it works well enough
    let err = config.validated().unwrap_err();
    assert_eq!(
        error_fields(err),
        vec!["edge_threshold", "radius", "render"],
    );
}

#[test]
fn test_render_config_validation() {
    let mut render_config = HexRenderConfig::with_hex_radius(10.0);
    render_config.hex_radius = 0.0; // invalid
    render_config.dash_gap = -2.0; // invalid
    render_config.default_cell.fill_color.red = 1.2; // invalid

    let err = GridRenderer::new(render_config).unwrap_err();
    assert_eq!(
        error_fields(err),
        vec!["dash_gap", "default_cell", "hex_radius"],
    );
}

#[test]
fn test_default_configs_are_valid() {
    assert!(GridConfig::default().validated().is_ok());
    assert!(GridRenderer::new(HexRenderConfig::default()).is_ok());
    for radius in [0.5, 1.0, 20.0, 64.0] {
        assert!(
            GridRenderer::new(HexRenderConfig::with_hex_radius(radius)).is_ok()
        );
    }
}
