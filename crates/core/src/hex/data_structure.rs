use crate::{
    hex::{hex_ring, hex_spiral, HexCoord},
    util,
};
use anyhow::bail;
use fnv::FnvBuildHasher;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};

/// A set of hex coordinates
pub type HexCoordSet = HashSet<HexCoord, FnvBuildHasher>;
/// A map of hex coordinates to some `T`
pub type HexCoordMap<T> = HashMap<HexCoord, T, FnvBuildHasher>;

/// A hexagon-shaped grid of cells, centered on the origin. Every cell within
/// `radius` steps of `(0, 0)` is a valid position, and each valid position may
/// or may not hold a value. Positions outside the radius can never hold a
/// value; every mutation that targets one is rejected.
///
/// For radius `r`, the grid has `3r² + 3r + 1` valid positions (see
/// [crate::grid_len]). Storage is sparse, so an empty grid of any radius is
/// cheap.
///
/// Cloning a grid gives a fully independent copy.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct HexGrid<T> {
    radius: i32,
    #[serde(with = "util::serde_hex_coord_map_to_vec")]
    cells: HexCoordMap<T>,
}

impl<T> HexGrid<T> {
    /// Create a new, empty grid. A negative radius is treated as 0.
    pub fn new(radius: i32) -> Self {
        Self {
            radius: radius.max(0),
            cells: HexCoordMap::default(),
        }
    }

    /// Create a new grid with every valid position populated by the given
    /// initializer function
    pub fn from_fn(radius: i32, mut f: impl FnMut(HexCoord) -> T) -> Self {
        let mut grid = Self::new(radius);
        grid.cells.reserve(grid.size());
        for coord in grid.all() {
            grid.cells.insert(coord, f(coord));
        }
        grid
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Total number of valid positions, whether or not they hold a value
    pub fn size(&self) -> usize {
        util::grid_len(self.radius)
    }

    /// Number of positions that currently hold a value
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Is the coordinate within this grid's radius?
    pub fn is_valid(&self, coord: HexCoord) -> bool {
        coord.length() <= self.radius
    }

    /// Get a reference to the value at a position. Returns `None` if the
    /// position is outside the grid or has never been set.
    pub fn get(&self, coord: HexCoord) -> Option<&T> {
        if self.is_valid(coord) {
            self.cells.get(&coord)
        } else {
            None
        }
    }

    /// Get a mutable reference to the value at a position. Returns `None` if
    /// the position is outside the grid or has never been set.
    pub fn get_mut(&mut self, coord: HexCoord) -> Option<&mut T> {
        if self.is_valid(coord) {
            self.cells.get_mut(&coord)
        } else {
            None
        }
    }

    /// Store a value at a position, replacing any existing value. Returns
    /// `false` (and leaves the grid untouched) if the position is outside the
    /// grid.
    pub fn set(&mut self, coord: HexCoord, value: T) -> bool {
        if !self.is_valid(coord) {
            return false;
        }
        self.cells.insert(coord, value);
        true
    }

    /// Remove the value at a position. Returns `false` if the position is
    /// outside the grid. Deleting a valid position that holds no value is a
    /// no-op, and still returns `true`.
    pub fn delete(&mut self, coord: HexCoord) -> bool {
        if !self.is_valid(coord) {
            return false;
        }
        self.cells.remove(&coord);
        true
    }

    /// Remove every value. The radius is unchanged.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Every valid position, in spiral order: the center first, then each
    /// ring moving outward
    pub fn all(&self) -> Vec<HexCoord> {
        hex_spiral(HexCoord::ORIGIN, self.radius)
    }

    /// Every position at exactly `distance` steps from the center. Empty if
    /// the distance is beyond the grid's radius.
    pub fn ring(&self, distance: i32) -> Vec<HexCoord> {
        if distance > self.radius {
            Vec::new()
        } else {
            hex_ring(HexCoord::ORIGIN, distance)
        }
    }

    /// Iterate over every valid position in spiral order, along with its
    /// value (if any)
    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, Option<&T>)> + '_ {
        self.all()
            .into_iter()
            .map(move |coord| (coord, self.cells.get(&coord)))
    }

    /// Iterate over the populated positions only. Order is unspecified.
    pub fn iter_set(&self) -> impl Iterator<Item = (HexCoord, &T)> + '_ {
        self.cells.iter().map(|(coord, value)| (*coord, value))
    }

    /// Call a function for every valid position, in spiral order. Positions
    /// that hold no value are passed `None`.
    pub fn for_each(&self, mut f: impl FnMut(HexCoord, Option<&T>)) {
        for (coord, value) in self.iter() {
            f(coord, value);
        }
    }

    /// Call a function for every populated position. Order is unspecified.
    pub fn for_each_set(&self, mut f: impl FnMut(HexCoord, &T)) {
        for (coord, value) in self.iter_set() {
            f(coord, value);
        }
    }

    /// Call a function for every position at exactly `distance` steps from
    /// the center. Returns `false` without calling the function if the
    /// distance is beyond the grid's radius.
    pub fn for_each_ring(
        &self,
        distance: i32,
        mut f: impl FnMut(HexCoord, Option<&T>),
    ) -> bool {
        if distance > self.radius {
            return false;
        }
        for coord in self.ring(distance) {
            f(coord, self.cells.get(&coord));
        }
        true
    }

    /// Get the neighbors of a position that fall within the grid, in
    /// direction order
    pub fn neighbors(&self, coord: HexCoord) -> Vec<HexCoord> {
        coord
            .neighbors()
            .iter()
            .copied()
            .filter(|neighbor| self.is_valid(*neighbor))
            .collect()
    }

    /// Convert every stored value into a new grid of the same radius
    pub fn map<U>(&self, mut f: impl FnMut(HexCoord, &T) -> U) -> HexGrid<U> {
        HexGrid {
            radius: self.radius,
            cells: self
                .cells
                .iter()
                .map(|(coord, value)| (*coord, f(*coord, value)))
                .collect(),
        }
    }
}

impl<T: Clone> HexGrid<T> {
    /// Set every valid position to the given value. Afterwards,
    /// `count() == size()`.
    pub fn fill(&mut self, value: T) {
        for coord in self.all() {
            self.cells.insert(coord, value.clone());
        }
    }
}

impl<T: Clone + Default> HexGrid<T> {
    /// Get the value at a position, or the default value if the position is
    /// outside the grid or has never been set
    pub fn get_or_default(&self, coord: HexCoord) -> T {
        self.get(coord).cloned().unwrap_or_default()
    }
}

/// Untrusted form of a grid, as it comes out of a deserializer. Converted into
/// a [HexGrid] only after every cell is checked against the radius.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct HexGridData<T> {
    radius: i32,
    #[serde(with = "util::serde_hex_coord_map_to_vec")]
    cells: HexCoordMap<T>,
}

impl<T> HexGridData<T> {
    fn into_grid(self) -> anyhow::Result<HexGrid<T>> {
        let mut grid = HexGrid::new(self.radius);
        for (coord, value) in self.cells {
            if !grid.set(coord, value) {
                bail!(
                    "Cell {} is outside of grid with radius {}",
                    coord,
                    grid.radius
                );
            }
        }
        Ok(grid)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for HexGrid<T> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        HexGridData::deserialize(deserializer)?
            .into_grid()
            .map_err(de::Error::custom)
    }
}
