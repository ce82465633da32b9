//! Game grid abstractions.
//!
//! The grid is indexed like the surface it is painted to: (1, 1) is the top
//! left cell, x grows to the right and y grows downward. Bounds are
//! inclusive, so with a 20x20 grid (20, 20) is the bottom right cell and
//! both (0, y) and (21, y) are off the board.

use crate::aux::{Color, Coordinates};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Abstraction enum with available kinds of game objects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameObject {
	/// A part of a snake.
	SnakePart,

	/// A piece of food.
	Food,
}

/// Struct which represents one unique point of the grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GridPoint {
	/// What kind of object is located in this point.
	pub object_kind: GameObject,

	/// [`Coordinates`] of the [`GridPoint`].
	/// Should be unique.
	pub coordinates: Coordinates,

	/// [`Color`] of the [`GridPoint`].
	pub color: Color,
}

impl GridPoint {
	/// Return a new [`GridPoint`].
	pub fn new(
		object_kind: GameObject,
		coordinates: Coordinates,
		color: Color,
	) -> Self {
		Self {
			object_kind,
			coordinates,
			color,
		}
	}

	/// Return coordinates of the [`GridPoint`].
	pub fn coords(&self) -> Coordinates {
		self.coordinates
	}
}

/// Bounded game grid. Holds no objects, only the playable area: entities
/// keep their own positions and check them against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Grid {
	/// [`Grid`] size. All values here are inclusive, so if size is 20x20,
	/// then (20, 20), (20, 19), (19, 20) are all valid points and parts of
	/// grid.
	pub size: (usize, usize),
}

impl Grid {
	/// Default size of the grid used with [`Default`](Self::default) trait
	/// implementation.
	pub const DEFAULT_SIZE: (usize, usize) = (20, 20);

	/// Return a new [`Grid`].
	pub fn new(size: (usize, usize)) -> Self {
		Self { size }
	}

	/// Return `true` if the coordinates lie on the grid.
	pub fn contains(&self, coords: Coordinates) -> bool {
		coords.x >= 1
			&& coords.x <= self.size.0 as i32
			&& coords.y >= 1
			&& coords.y <= self.size.1 as i32
	}

	/// Return the central cell of the grid.
	pub fn center(&self) -> Coordinates {
		Coordinates::new((self.size.0 / 2) as i32, (self.size.1 / 2) as i32)
	}

	/// Generate random coordinates framed by grid.
	pub fn random_coords(&self) -> Coordinates {
		let mut rng = rand::thread_rng();
		Coordinates::new(
			rng.gen_range(1..=self.size.0) as i32,
			rng.gen_range(1..=self.size.1) as i32,
		)
	}
}

impl Default for Grid {
	fn default() -> Self {
		Self::new(Self::DEFAULT_SIZE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn random_coords() {
		let size = (10, 10);
		let grid = Grid::new(size);
		for _ in 0..100 {
			assert!(grid.contains(grid.random_coords()));
		}
	}

	#[test]
	fn contains_is_inclusive() {
		let grid = Grid::default();

		assert!(grid.contains((1, 1).into()));
		assert!(grid.contains((20, 20).into()));
		assert!(grid.contains((1, 20).into()));

		assert!(!grid.contains((0, 10).into()));
		assert!(!grid.contains((21, 10).into()));
		assert!(!grid.contains((10, 0).into()));
		assert!(!grid.contains((10, 21).into()));
	}

	#[test]
	fn center_of_default_grid() {
		assert_eq!(Grid::default().center(), (10, 10).into());
	}
}
