//! Snake abstractions.

use crate::aux::{Coordinates, Direction};
use serde::{Deserialize, Serialize};

/// Snake abstraction structure.
///
/// Parts are ordered head first: index 0 is the head, the last element is
/// the tail. The snake always has at least one part; [`shrink`](Self::shrink)
/// only ever runs after [`step`](Self::step) has prepended a head.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snake {
    parts: Vec<Coordinates>,
}

impl Snake {
    /// Return a [`Snake`] consisting of a single part at `head`.
    pub(crate) fn new(head: Coordinates) -> Self {
        Self { parts: vec![head] }
    }

    /// Prepend a new head one cell away in `direction` and return it. The
    /// tail stays in place, so the snake is one part longer until
    /// [`shrink`](Self::shrink) runs; skipping the shrink is how the snake
    /// grows.
    pub(crate) fn step(&mut self, direction: Direction) -> Coordinates {
        let head = self.head() + direction.offset();
        self.parts.insert(0, head);
        head
    }

    /// Drop the tail part, undoing the length gained by the last
    /// [`step`](Self::step).
    pub(crate) fn shrink(&mut self) {
        self.parts.pop();
    }

    /// Return the head position.
    pub fn head(&self) -> Coordinates {
        self.parts[0]
    }

    /// Return the ordered parts, head first.
    pub fn parts(&self) -> &[Coordinates] {
        &self.parts
    }

    /// Return snake's length (amount of parts).
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Return true if snake has zero length, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a snake laid out by hand.
    #[cfg(test)]
    pub(crate) fn from_parts(parts: Vec<Coordinates>) -> Self {
        Self { parts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_a_single_part() {
        let snake = Snake::new((10, 10).into());

        assert_eq!(snake.parts(), [(10, 10).into()]);
        assert_eq!(snake.head(), (10, 10).into());
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn step_applies_unit_offsets() {
        for (direction, expected) in [
            (Direction::Right, (11, 10)),
            (Direction::Left, (9, 10)),
            (Direction::Up, (10, 9)),
            (Direction::Down, (10, 11)),
        ] {
            let mut snake = Snake::new((10, 10).into());

            assert_eq!(snake.step(direction), expected.into());
            assert_eq!(snake.head(), expected.into());
            assert_eq!(snake.len(), 2);
        }
    }

    #[test]
    fn shrink_drops_the_tail() {
        let mut snake = Snake::new((10, 10).into());
        snake.step(Direction::Right);
        snake.shrink();

        assert_eq!(snake.parts(), [(11, 10).into()]);
    }

    #[test]
    fn body_follows_the_head() {
        let mut snake = Snake::new((5, 5).into());
        snake.step(Direction::Right);
        snake.step(Direction::Down);

        assert_eq!(
            snake.parts(),
            [(6, 6).into(), (6, 5).into(), (5, 5).into()]
        );
    }
}
