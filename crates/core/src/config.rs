use crate::{
    hex::{HexGrid, HexLayout},
    hit::HexHitTester,
    render::{config::HexRenderConfig, GridRenderer},
};
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Top-level configuration for a grid: how big it is, how it's drawn, and how
/// clicks are resolved against it. Every field has a default, so a config
/// file only needs to list what it wants to change.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the center of the grid to the edge (in cells)
    #[validate(range(min = 0, max = 10000))]
    pub radius: u16,

    /// Maximum distance (in pixels) from an edge for a click to count as
    /// hitting that edge rather than the cell. See
    /// [HexHitTester::edge_threshold].
    #[validate(range(min = 0.0))]
    pub edge_threshold: f64,

    /// Options for how the grid is presented
    #[validate]
    pub render: HexRenderConfig,
}

impl GridConfig {
    /// Check every field in this config, and hand it back if it's all good.
    /// The underlying [validator::ValidationErrors] can be recovered from the
    /// error with `downcast`.
    pub fn validated(self) -> anyhow::Result<Self> {
        self.validate().context("invalid config")?;
        info!("Loaded grid config {:?}", self);
        Ok(self)
    }

    /// The layout that maps this grid's cells into pixel space
    pub fn layout(&self) -> HexLayout {
        self.render.layout
    }

    /// Create an empty grid with this config's radius
    pub fn grid<T>(&self) -> HexGrid<T> {
        HexGrid::new(self.radius.into())
    }

    /// Create a hit tester that matches this config's rendering
    pub fn hit_tester(&self) -> HexHitTester {
        HexHitTester::from_config(self)
    }

    /// Create a renderer for this config's render options. Returns an error
    /// if the render options are invalid.
    pub fn renderer(&self) -> anyhow::Result<GridRenderer> {
        GridRenderer::new(self.render)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 5,
            edge_threshold: 5.0,
            render: HexRenderConfig::default(),
        }
    }
}
