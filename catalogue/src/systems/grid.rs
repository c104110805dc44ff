use std::collections::HashMap;

/// Up, down, right, left.
const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Sparse grid keyed by `(x, y)`.
#[derive(Debug)]
pub struct CoordinateCache<V> {
    cells: HashMap<(i64, i64), V>,
}

impl<V> Default for CoordinateCache<V> {
    fn default() -> Self { Self { cells: HashMap::new() } }
}

impl<V> CoordinateCache<V> {
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, x: i64, y: i64, value: V) -> Option<V> {
        self.cells.insert((x, y), value)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<&V> { self.cells.get(&(x, y)) }
    pub fn len(&self) -> usize                      { self.cells.len() }
    pub fn is_empty(&self) -> bool                  { self.cells.is_empty() }

    /// Occupied 4-neighbours of `(x, y)`, in direction order.
    pub fn neighbors(&self, x: i64, y: i64) -> Vec<((i64, i64), &V)> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| {
                let coord = (x.checked_add(dx)?, y.checked_add(dy)?);
                self.cells.get(&coord).map(|v| (coord, v))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_in_direction_order() {
        let mut grid = CoordinateCache::new();
        grid.set(0, 0, "origin");
        grid.set(0, 1, "up");
        grid.set(-1, 0, "left");
        grid.set(1, 1, "diagonal");
        let around = grid.neighbors(0, 0);
        assert_eq!(around, vec![((0, 1), &"up"), ((-1, 0), &"left")]);
        assert_eq!(grid.get(1, 1), Some(&"diagonal"));
        assert_eq!(grid.get(5, 5), None);
    }

    #[test]
    fn set_overwrites() {
        let mut grid = CoordinateCache::new();
        assert_eq!(grid.set(2, 3, 1), None);
        assert_eq!(grid.set(2, 3, 9), Some(1));
        assert_eq!(grid.len(), 1);
    }
}
