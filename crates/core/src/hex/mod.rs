//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play: hex space and pixel space.
//!
//! ### Hex Coordinates
//!
//! Hex coordinates identify cells within the grid. We use the [axial
//! coordinate system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial),
//! which is a compressed form of his cube coordinates.
//!
//! Cube coordinates have three components (`q`, `r`, and `s`). **For any cell,
//! all three components are integers and `q + r + s = 0`.** The grid is flat,
//! but using three components projected onto that plane makes distances,
//! rotations, and rounding much simpler. Since the third component can always
//! be derived from the other two, [HexCoord] only stores `q` and `r`, and
//! [HexCubeCoord] exists for when you want all three spelled out.
//!
//! Points that aren't cell centers (e.g. the result of inverting a mouse
//! click) are represented with [FractionalHexCoord], and snapped to a cell
//! with cube rounding.
//!
//! **Note:** Cells are contiguous, meaning there are no gaps between them. Two
//! adjacent cells share exactly one edge and two vertices. The edge model in
//! [crate::render] relies on this, because it gives every edge exactly two
//! names (one from each side), which we then collapse to a single canonical
//! one.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates are used for rendering and hit testing. Cells are
//! pointy-topped. `+x` is to the right and `+y` is **down**, the way screens
//! and SVG do it. In the following diagram, `o` represents the center of cell
//! `(0, 0)`, which sits at [HexLayout::origin].
//!
//! ```text
//! +-------------------+
//! |        -y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        +y         |
//! +-------------------+
//! ```
//!
//! With that orientation, `+q` points east and `+r` points southeast.
//!
//! When a 3D renderer needs the grid, pixel space is laid onto the plane
//! `y = 0`: pixel `x` stays `x`, and pixel `y` becomes `z`. See
//! [crate::render::hex_vertices_3d].
//!
//! #### Calculation
//!
//! Use [HexLayout::to_pixel] to find the center of a cell, and
//! [HexLayout::from_pixel] to find the cell containing a pixel. The two are
//! inverses for every cell center.

mod data_structure;
mod layout;
mod traversal;
mod unit;

pub use self::{data_structure::*, layout::*, traversal::*, unit::*};
