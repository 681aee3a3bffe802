//! Algorithms that walk sets of cells: rings, spirals, and lines.

use crate::hex::unit::{FractionalHexCoord, HexCoord, HexDirection};

/// Get every cell that is exactly `radius` steps from `center`. For any
/// radius of 0 or less, this is just the center itself. Otherwise, the result
/// has exactly `6 * radius` cells.
///
/// The cells are returned in walking order: each cell is adjacent to the one
/// before it. The walk starts `radius` steps southwest of the center, then
/// goes `radius` steps in each direction of [HexDirection::ALL] in turn.
pub fn hex_ring(center: HexCoord, radius: i32) -> Vec<HexCoord> {
    if radius <= 0 {
        return vec![center];
    }

    let mut ring = Vec::with_capacity(6 * radius as usize);
    let mut cell = center + HexDirection::SW.to_vector().scale(radius);
    for direction in HexDirection::ALL {
        for _ in 0..radius {
            ring.push(cell);
            cell = cell.neighbor(direction);
        }
    }
    ring
}

/// Get every cell within `radius` steps of `center`, in spiral order: the
/// center first, then each ring from 1 up to `radius` (see [hex_ring]). The
/// result has exactly `3r² + 3r + 1` cells.
pub fn hex_spiral(center: HexCoord, radius: i32) -> Vec<HexCoord> {
    let mut spiral = Vec::with_capacity(crate::util::grid_len(radius));
    spiral.push(center);
    for r in 1..=radius {
        spiral.extend(hex_ring(center, r));
    }
    spiral
}

/// Get the cells that make up a straight line from `a` to `b`, including
/// both ends. The line has `a.distance_to(b) + 1` cells, and each cell is
/// adjacent to the one before it.
pub fn hex_line(a: HexCoord, b: HexCoord) -> Vec<HexCoord> {
    let n = a.distance_to(b);
    if n == 0 {
        return vec![a];
    }

    (0..=n)
        .map(|i| {
            let t = f64::from(i) / f64::from(n);
            FractionalHexCoord::lerp(a, b, t).round()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HexCoordSet;

    /// Assert that every cell in the path is adjacent to the one before it
    fn assert_contiguous(path: &[HexCoord]) {
        for pair in path.windows(2) {
            assert_eq!(
                pair[0].distance_to(pair[1]),
                1,
                "{} and {} are not adjacent in {:?}",
                pair[0],
                pair[1],
                path
            );
        }
    }

    #[test]
    fn test_hex_ring_zero() {
        let center = HexCoord::new(2, -1);
        assert_eq!(hex_ring(center, 0), vec![center]);
        assert_eq!(hex_ring(center, -4), vec![center]);
    }

    #[test]
    fn test_hex_ring_one() {
        assert_eq!(
            hex_ring(HexCoord::ORIGIN, 1),
            vec![
                HexCoord::new(-1, 1),
                HexCoord::new(0, 1),
                HexCoord::new(1, 0),
                HexCoord::new(1, -1),
                HexCoord::new(0, -1),
                HexCoord::new(-1, 0),
            ]
        );
    }

    #[test]
    fn test_hex_ring() {
        let center = HexCoord::new(-3, 5);
        for radius in 1..=6 {
            let ring = hex_ring(center, radius);
            assert_eq!(ring.len(), 6 * radius as usize);
            for cell in &ring {
                assert_eq!(center.distance_to(*cell), radius);
            }
            assert_contiguous(&ring);
            // The walk closes back on itself
            assert_eq!(ring[ring.len() - 1].distance_to(ring[0]), 1);
            // No duplicates
            let unique: HexCoordSet = ring.iter().copied().collect();
            assert_eq!(unique.len(), ring.len());
        }
    }

    #[test]
    fn test_hex_spiral() {
        let center = HexCoord::new(1, 1);
        assert_eq!(hex_spiral(center, 0), vec![center]);
        for (radius, expected_len) in [(1, 7), (2, 19), (3, 37), (4, 61)] {
            let spiral = hex_spiral(center, radius);
            assert_eq!(spiral.len(), expected_len);
            assert_eq!(spiral[0], center);
            let unique: HexCoordSet = spiral.iter().copied().collect();
            assert_eq!(unique.len(), expected_len);
            // Distances never decrease as we spiral outward
            for pair in spiral.windows(2) {
                assert!(
                    center.distance_to(pair[0]) <= center.distance_to(pair[1])
                );
            }
        }
    }

    #[test]
    fn test_hex_line_degenerate() {
        let a = HexCoord::new(4, -2);
        assert_eq!(hex_line(a, a), vec![a]);
    }

    #[test]
    fn test_hex_line() {
        let a = HexCoord::ORIGIN;
        assert_eq!(
            hex_line(a, HexCoord::new(1, 0)),
            vec![a, HexCoord::new(1, 0)]
        );
        assert_eq!(
            hex_line(a, HexCoord::new(3, 0)),
            vec![
                a,
                HexCoord::new(1, 0),
                HexCoord::new(2, 0),
                HexCoord::new(3, 0)
            ]
        );
    }

    #[test]
    fn test_hex_line_contiguous() {
        let pairs = [
            (HexCoord::ORIGIN, HexCoord::new(3, -1)),
            (HexCoord::new(-2, 4), HexCoord::new(5, -3)),
            (HexCoord::new(1, 1), HexCoord::new(-4, 2)),
            (HexCoord::new(0, -5), HexCoord::new(2, 6)),
        ];
        for (a, b) in pairs {
            let line = hex_line(a, b);
            assert_eq!(line.len() as i32, a.distance_to(b) + 1);
            assert_eq!(line[0], a);
            assert_eq!(line[line.len() - 1], b);
            assert_contiguous(&line);
        }
    }
}
