use enum_map::Enum;

/// Traversal or growth direction.
///
/// For a cyclic iterator `Left2Right` is forward (`next`) and `Right2Left` is backward (`previous`).
/// For a two-sided list the direction names the side that moves: with `Left2Right` the left end
/// stays anchored and the elements to the right shift, with `Right2Left` the right end stays anchored
/// and the elements to the left shift, which changes the first index.
#[derive(Debug, Enum, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Direction {
    Left2Right,
    Right2Left,
}

impl Direction {
    #[must_use]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Left2Right => Direction::Right2Left,
            Direction::Right2Left => Direction::Left2Right,
        }
    }
}
