/*!
(The representation of) a cell of the cave, as an integer pair.

The derived ordering of coordinates only keeps the literals of a clause in a canonical order.
Where a choice between cells is made (e.g. when choosing between equally good moves) the explicit [weight](Coordinate::weight) of a coordinate is used.

```rust
# use cave_logic::structures::coordinate::Coordinate;
let here = Coordinate::new(2, 3);

assert_eq!(here.weight(), 43);
assert!(here.is_adjacent(&Coordinate::new(2, 4)));
assert!(!here.is_adjacent(&Coordinate::new(3, 4)));
```
*/

/// The largest width or height for which [weight](Coordinate::weight) is a total order on cells.
pub const WEIGHT_BOUND: i32 = 20;

/// A cell of the cave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// The column of the cell, increasing eastward.
    pub x: i32,

    /// The row of the cell, increasing northward.
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// A linear weight used to order cells.
    ///
    /// Distinct cells of a cave no larger than [WEIGHT_BOUND] × [WEIGHT_BOUND] have distinct weights.
    pub fn weight(&self) -> i64 {
        (WEIGHT_BOUND as i64) * (self.x as i64) + (self.y as i64)
    }

    /// The cell offset from this cell by `dx` and `dy`.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Compares cells by [weight](Coordinate::weight).
///
/// Used wherever a choice between cells must be deterministic, in place of any derived ordering.
pub fn by_weight(a: &Coordinate, b: &Coordinate) -> std::cmp::Ordering {
    a.weight().cmp(&b.weight())
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from(value: (i32, i32)) -> Self {
        Coordinate::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_distinct_within_bound() {
        let mut weights = std::collections::HashSet::new();
        for x in 0..WEIGHT_BOUND {
            for y in 0..WEIGHT_BOUND {
                assert!(weights.insert(Coordinate::new(x, y).weight()));
            }
        }
    }

    #[test]
    fn weight_order() {
        let a = Coordinate::new(1, 5);
        let b = Coordinate::new(2, 0);
        assert_eq!(by_weight(&a, &b), std::cmp::Ordering::Less);
        assert_eq!(by_weight(&b, &b), std::cmp::Ordering::Equal);
    }
}
