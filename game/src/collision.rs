//! Wall and self collision detection.

use crate::{grid::Grid, snake::Snake};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Way a snake can die. The [`Display`](fmt::Display) implementation
/// renders the human-readable reason shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collision {
	/// The head left the grid.
	Wall,

	/// The head ran into another part of the body.
	SelfBite,
}

impl fmt::Display for Collision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Wall => write!(f, "your snake hit the wall"),
			Self::SelfBite => write!(f, "your snake ate itself"),
		}
	}
}

/// Check the snake against the grid bounds and against its own body.
///
/// The wall check runs first, so an out-of-bounds head always reports
/// [`Collision::Wall`] whatever the body looks like. The self check
/// compares the head against every other part; the head cannot bite
/// itself.
pub fn check(snake: &Snake, grid: &Grid) -> Option<Collision> {
	let head = snake.head();
	if !grid.contains(head) {
		return Some(Collision::Wall);
	}
	if snake.parts().iter().dropping(1).any(|part| *part == head) {
		return Some(Collision::SelfBite);
	}
	None
}
