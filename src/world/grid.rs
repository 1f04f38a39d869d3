/*!
A cave laid out on a grid.

# Layouts

A layout is read from text, one row per line, with each character a tile:

| Character   | Tile                    |
|-------------|-------------------------|
| `%`         | Wall                    |
| `P`         | Open, and the start     |
| `W`         | The wumpus              |
| `C`         | Poison                  |
| `T`         | The teleporter          |
| `.` or ` `  | Open                    |

The first line of a layout is the northmost row, and the last line is row zero.
So, y increases upward and x increases to the right.

Rows must be of equal width, and neither the width nor the height of a layout may exceed [WEIGHT_BOUND].

```rust
# use cave_logic::world::{grid::{Direction, GridWorld}, World};
# use cave_logic::structures::coordinate::Coordinate;
let layout = "\
%%%%%
%P.T%
%%%%%";

let cave: GridWorld = layout.parse().unwrap();
assert_eq!(cave.start(), Coordinate::new(1, 1));

let successors = cave.successors(cave.start());
assert_eq!(successors.len(), 1);
assert_eq!(successors[0].action, Direction::East);

assert!(cave.teleporter_close(Coordinate::new(2, 1)));
assert!(cave.is_goal(Coordinate::new(3, 1)));
```

# Semantics

- Successors are the adjacent open cells, taken in the order north, south, east, west, each at a cost of one.
- Percepts at a cell are true when an adjacent cell holds the matching tile.
- The teleporter is the goal, and the wumpus and poison are fatal.
*/

use std::{
    collections::{HashSet, VecDeque},
    io::BufRead,
    str::FromStr,
};

use rand::{Rng, SeedableRng};

use crate::{
    generic::minimal_pcg::MinimalPCG32,
    misc::log::targets::{self},
    structures::coordinate::{Coordinate, WEIGHT_BOUND},
    types::err::{self},
    world::{Successor, World},
};

/// A tile of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Wumpus,
    Poison,
    Teleporter,
}

impl Tile {
    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub fn as_char(&self) -> char {
        match self {
            Tile::Wall => '%',
            Tile::Open => '.',
            Tile::Wumpus => 'W',
            Tile::Poison => 'C',
            Tile::Teleporter => 'T',
        }
    }
}

/// A move between adjacent cells of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The offset of the direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The direction of a move from `from` to `to`, if the two cells are adjacent.
    pub fn between(from: &Coordinate, to: &Coordinate) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| {
                let (dx, dy) = direction.delta();
                from.offset(dx, dy) == *to
            })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "North"),
            Self::South => write!(f, "South"),
            Self::East => write!(f, "East"),
            Self::West => write!(f, "West"),
        }
    }
}

/// A cave on a grid.
#[derive(Clone, Debug)]
pub struct GridWorld {
    width: i32,
    height: i32,

    /// Tiles, row by row from row zero.
    tiles: Vec<Tile>,

    start: Coordinate,
}

impl GridWorld {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The tile at `cell`, if `cell` is within the grid.
    pub fn tile(&self, cell: &Coordinate) -> Option<Tile> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        self.tiles
            .get((cell.y * self.width + cell.x) as usize)
            .copied()
    }

    /// Whether `cell` is within the grid and not a wall.
    pub fn is_open(&self, cell: &Coordinate) -> bool {
        self.tile(cell).is_some_and(|tile| !tile.is_wall())
    }

    /// Whether some cell adjacent to `cell` holds `tile`.
    fn adjacent_to(&self, cell: Coordinate, tile: Tile) -> bool {
        Direction::ALL.iter().any(|direction| {
            let (dx, dy) = direction.delta();
            self.tile(&cell.offset(dx, dy)) == Some(tile)
        })
    }

    /// Reads a layout.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self, err::LayoutError> {
        let mut rows: Vec<Vec<Tile>> = Vec::default();
        let mut start = None;
        let mut buffer = String::default();

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => {}
                Err(_) => return Err(err::LayoutError::Line(rows.len())),
            }

            let line = buffer.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }

            let mut row = Vec::with_capacity(line.len());
            for (x, character) in line.chars().enumerate() {
                let tile = match character {
                    '%' => Tile::Wall,
                    '.' | ' ' => Tile::Open,
                    'W' => Tile::Wumpus,
                    'C' => Tile::Poison,
                    'T' => Tile::Teleporter,
                    'P' => {
                        if start.is_some() {
                            return Err(err::LayoutError::MultipleStarts);
                        }
                        // The row index is flipped once every row has been read.
                        start = Some((x, rows.len()));
                        Tile::Open
                    }
                    unknown => return Err(err::LayoutError::UnknownTile(unknown)),
                };
                row.push(tile);
            }

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(err::LayoutError::Ragged(rows.len()));
                }
            }
            rows.push(row);
        }

        let height = rows.len();
        let width = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(err::LayoutError::Empty),
        };

        if width > WEIGHT_BOUND as usize || height > WEIGHT_BOUND as usize {
            return Err(err::LayoutError::TooLarge);
        }

        let (start_x, start_row) = start.ok_or(err::LayoutError::NoStart)?;

        let tiles = rows.into_iter().rev().flatten().collect();

        let world = GridWorld {
            width: width as i32,
            height: height as i32,
            tiles,
            start: Coordinate::new(start_x as i32, (height - 1 - start_row) as i32),
        };

        log::info!(target: targets::WORLD, "Read a {width}×{height} layout starting at {}", world.start);

        Ok(world)
    }

    /// A random cave of the given dimensions, bordered by walls.
    ///
    /// The start, the teleporter, the wumpus, and poison are placed on distinct cells, and each remaining cell is a wall with probability `wall_probability`, clamped to the unit interval.
    /// A probability which is not finite is an error.
    /// No guarantee is made that the teleporter can be reached from the start.
    ///
    /// The same seed always gives the same cave.
    pub fn random(
        width: i32,
        height: i32,
        wall_probability: f64,
        seed: u64,
    ) -> Result<Self, err::LayoutError> {
        if width > WEIGHT_BOUND || height > WEIGHT_BOUND {
            return Err(err::LayoutError::TooLarge);
        }
        if width < 4 || height < 4 {
            return Err(err::LayoutError::Empty);
        }
        if !wall_probability.is_finite() {
            return Err(err::LayoutError::WallProbability);
        }

        let mut rng = MinimalPCG32::seed_from_u64(seed);
        let mut tiles = vec![Tile::Wall; (width * height) as usize];

        let mut interior = Vec::default();
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                interior.push(Coordinate::new(x, y));
            }
        }

        let mut pick = |cells: &mut Vec<Coordinate>| cells.swap_remove(rng.random_range(0..cells.len()));

        let start = pick(&mut interior);
        let placed = [
            (pick(&mut interior), Tile::Teleporter),
            (pick(&mut interior), Tile::Wumpus),
            (pick(&mut interior), Tile::Poison),
        ];

        let index = |cell: &Coordinate| (cell.y * width + cell.x) as usize;

        tiles[index(&start)] = Tile::Open;
        for (cell, tile) in placed {
            tiles[index(&cell)] = tile;
        }
        for cell in interior {
            if !rng.random_bool(wall_probability.clamp(0.0, 1.0)) {
                tiles[index(&cell)] = Tile::Open;
            }
        }

        log::info!(target: targets::WORLD, "Generated a {width}×{height} layout from seed {seed}");

        Ok(GridWorld {
            width,
            height,
            tiles,
            start,
        })
    }

    /// A shortest walk from `from` to `to` passing only through `through` (and `to`), as a sequence of directions.
    fn walk(
        &self,
        from: Coordinate,
        to: Coordinate,
        through: &HashSet<Coordinate>,
    ) -> Option<Vec<Direction>> {
        let mut queue = VecDeque::from([(from, Vec::default())]);
        let mut seen = HashSet::from([from]);

        while let Some((cell, directions)) = queue.pop_front() {
            if cell == to {
                return Some(directions);
            }
            for direction in Direction::ALL {
                let (dx, dy) = direction.delta();
                let next = cell.offset(dx, dy);
                if !self.is_open(&next) || (next != to && !through.contains(&next)) {
                    continue;
                }
                if seen.insert(next) {
                    let mut extended = directions.clone();
                    extended.push(direction);
                    queue.push_back((next, extended));
                }
            }
        }
        None
    }
}

impl FromStr for GridWorld {
    type Err = err::LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridWorld::from_reader(s.as_bytes())
    }
}

impl std::fmt::Display for GridWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let cell = Coordinate::new(x, y);
                match self.tile(&cell) {
                    _ if cell == self.start => write!(f, "P")?,
                    Some(tile) => write!(f, "{}", tile.as_char())?,
                    None => {}
                }
            }
            if y > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl World for GridWorld {
    type Action = Direction;

    fn start(&self) -> Coordinate {
        self.start
    }

    fn successors(&self, cell: Coordinate) -> Vec<Successor<Direction>> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let (dx, dy) = direction.delta();
                let next = cell.offset(dx, dy);
                self.is_open(&next).then_some(Successor {
                    cell: next,
                    action: direction,
                    cost: 1,
                })
            })
            .collect()
    }

    fn is_goal(&self, cell: Coordinate) -> bool {
        self.tile(&cell) == Some(Tile::Teleporter)
    }

    fn hazard_close(&self, cell: Coordinate) -> bool {
        self.adjacent_to(cell, Tile::Wumpus)
    }

    fn poison_close(&self, cell: Coordinate) -> bool {
        self.adjacent_to(cell, Tile::Poison)
    }

    fn teleporter_close(&self, cell: Coordinate) -> bool {
        self.adjacent_to(cell, Tile::Teleporter)
    }

    fn is_fatal(&self, cell: Coordinate) -> bool {
        matches!(self.tile(&cell), Some(Tile::Wumpus | Tile::Poison))
    }

    /// One direction for each step of `path`.
    ///
    /// Where two consecutive cells are not adjacent, the shortest walk between them through earlier cells of the path is used.
    fn reconstruct_path(&self, path: &[Coordinate]) -> Vec<Direction> {
        let mut directions = Vec::default();
        let mut visited: HashSet<Coordinate> = HashSet::default();

        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            visited.insert(from);

            match Direction::between(&from, &to) {
                Some(direction) => directions.push(direction),
                None => match self.walk(from, to, &visited) {
                    Some(walk) => directions.extend(walk),
                    None => {
                        log::warn!(target: targets::WORLD, "No walk from {from} to {to}");
                    }
                },
            }
        }

        directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
%%%%%%
%.W..%
%P.%T%
%..C.%
%%%%%%
";

    #[test]
    fn coordinates_flip() {
        let cave: GridWorld = LAYOUT.parse().unwrap();
        assert_eq!(cave.width(), 6);
        assert_eq!(cave.height(), 5);
        assert_eq!(cave.start(), Coordinate::new(1, 2));
        assert_eq!(cave.tile(&Coordinate::new(2, 3)), Some(Tile::Wumpus));
        assert_eq!(cave.tile(&Coordinate::new(3, 1)), Some(Tile::Poison));
        assert_eq!(cave.tile(&Coordinate::new(4, 2)), Some(Tile::Teleporter));
        assert_eq!(cave.tile(&Coordinate::new(6, 2)), None);
    }

    #[test]
    fn successor_order() {
        let cave: GridWorld = LAYOUT.parse().unwrap();
        let successors = cave.successors(Coordinate::new(2, 2));
        let directions: Vec<_> = successors.iter().map(|s| s.action).collect();
        assert_eq!(
            directions,
            vec![Direction::North, Direction::South, Direction::West]
        );
        assert!(successors.iter().all(|s| s.cost == 1));
    }

    #[test]
    fn percepts() {
        let cave: GridWorld = LAYOUT.parse().unwrap();
        assert!(cave.hazard_close(Coordinate::new(2, 2)));
        assert!(!cave.hazard_close(Coordinate::new(1, 2)));
        assert!(cave.poison_close(Coordinate::new(2, 1)));
        assert!(cave.teleporter_close(Coordinate::new(4, 1)));
        assert!(cave.is_fatal(Coordinate::new(2, 3)));
        assert!(!cave.is_fatal(Coordinate::new(1, 1)));
    }

    #[test]
    fn display_round_trip() {
        let cave: GridWorld = LAYOUT.parse().unwrap();
        let again: GridWorld = cave.to_string().parse().unwrap();
        assert_eq!(again.to_string(), cave.to_string());
        assert_eq!(again.start(), cave.start());
    }

    #[test]
    fn jumps_walk_through_visited_cells() {
        let cave: GridWorld = LAYOUT.parse().unwrap();
        let path = [
            Coordinate::new(1, 2),
            Coordinate::new(1, 1),
            Coordinate::new(2, 1),
            Coordinate::new(1, 3),
        ];
        assert_eq!(
            cave.reconstruct_path(&path),
            vec![
                Direction::South,
                Direction::East,
                Direction::West,
                Direction::North,
                Direction::North
            ]
        );
    }

    #[test]
    fn layout_errors() {
        assert_eq!("".parse::<GridWorld>().err(), Some(err::LayoutError::Empty));
        assert_eq!(
            "%%%\n%.%\n%%%".parse::<GridWorld>().err(),
            Some(err::LayoutError::NoStart)
        );
        assert_eq!(
            "%%%%\n%PP%\n%%%%".parse::<GridWorld>().err(),
            Some(err::LayoutError::MultipleStarts)
        );
        assert_eq!(
            "%%%%\n%P%\n%%%%".parse::<GridWorld>().err(),
            Some(err::LayoutError::Ragged(1))
        );
        assert_eq!(
            "%%%\n%P?\n%%%".parse::<GridWorld>().err(),
            Some(err::LayoutError::UnknownTile('?'))
        );
        let wide = format!("P{}", ".".repeat(WEIGHT_BOUND as usize));
        assert_eq!(
            wide.parse::<GridWorld>().err(),
            Some(err::LayoutError::TooLarge)
        );
    }

    #[test]
    fn random_is_seeded() {
        let a = GridWorld::random(8, 6, 0.2, 17).unwrap();
        let b = GridWorld::random(8, 6, 0.2, 17).unwrap();
        assert_eq!(a.to_string(), b.to_string());

        let tiles: Vec<Tile> = a.tiles.clone();
        let count = |tile: Tile| tiles.iter().filter(|t| **t == tile).count();
        assert_eq!(count(Tile::Teleporter), 1);
        assert_eq!(count(Tile::Wumpus), 1);
        assert_eq!(count(Tile::Poison), 1);
        assert!(a.is_open(&a.start()));

        assert_eq!(
            GridWorld::random(21, 5, 0.2, 0).err(),
            Some(err::LayoutError::TooLarge)
        );
    }

    #[test]
    fn wall_probability_must_be_finite() {
        for probability in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                GridWorld::random(8, 8, probability, 1).err(),
                Some(err::LayoutError::WallProbability)
            );
        }

        // Finite values outside the unit interval are clamped.
        assert!(GridWorld::random(8, 8, 1.5, 1).is_ok());
        assert!(GridWorld::random(8, 8, -0.5, 1).is_ok());
    }
}
