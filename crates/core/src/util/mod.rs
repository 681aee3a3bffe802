pub mod range;
pub mod unit;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took, and evaluates to the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!(
            $log_level,
            "{} took {} µs",
            $label,
            elapsed.as_micros()
        );
        value
    }};
}

/// Calculate the number of cells in a hex grid based on its radius. Radius 0
/// means 1 cell, 1 is 7 cells, 2 is 19, etc. Negative radii are treated as 0.
pub fn grid_len(radius: i32) -> usize {
    // We'll always have 3r^2+3r+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r cells for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius.max(0) as usize;
    3 * r * r + 3 * r + 1
}

// Serialize a HexCoordMap as a list of pairs instead of a map. HexCoords
// shouldn't be used as serialized map keys, since JSON and other formats
// don't support complex keys.
pub mod serde_hex_coord_map_to_vec {
    use crate::{HexCoord, HexCoordMap};
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serialize a hex coord map as a list of `(coord, value)` pairs
    pub fn serialize<T, S>(
        map: &HexCoordMap<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for entry in map.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    /// Deserialize a list of `(coord, value)` pairs into a map. If a coord
    /// appears more than once, the last value wins.
    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<HexCoordMap<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let vec: Vec<(HexCoord, T)> = Vec::deserialize(deserializer)?;
        Ok(vec.into_iter().collect())
    }
}
