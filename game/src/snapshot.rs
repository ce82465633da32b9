//! Serializable view of the game consumed by render adapters.

use crate::{
	aux::{Color, Coordinates},
	collision::Collision,
	grid::{GameObject, GridPoint},
	Result, RunState,
};
use serde::{Deserialize, Serialize};

/// Everything a render target needs to draw one frame.
///
/// Plain data: a snapshot never reaches back into the game state, so any
/// surface (a native window, a terminal, a test) can consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snapshot {
	/// Grid size the positions below are bounded by.
	pub grid_size: (usize, usize),

	/// Snake parts ordered head first.
	pub snake: Vec<Coordinates>,

	/// Food position.
	pub food: Coordinates,

	/// Current score.
	pub score: usize,

	/// Best score seen since the process started.
	pub high_score: usize,

	/// Whether a game is being played right now.
	pub state: RunState,

	/// Why the last game ended. Kept until a new game starts.
	pub failure: Option<Collision>,
}

impl Snapshot {
	/// Color of the snake's head.
	const HEAD_COLOR: Color = Color {
		r: 0,
		g: 200,
		b: 0,
		a: 255,
	};

	/// Rasterize the snapshot into paintable grid points. The head gets
	/// its own color and food only shows up while a game runs.
	pub fn points(&self) -> Vec<GridPoint> {
		let mut points = Vec::with_capacity(self.snake.len() + 1);
		if self.state == RunState::Running {
			points.push(GridPoint::new(GameObject::Food, self.food, Color::RED));
		}
		for (i, part) in self.snake.iter().enumerate() {
			let color = if i == 0 {
				Self::HEAD_COLOR
			} else {
				Color::GREEN
			};
			points.push(GridPoint::new(GameObject::SnakePart, *part, color));
		}
		points
	}

	/// Convert [`Snapshot`] to binary json.
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_string(self)?.as_bytes().to_vec())
	}

	/// Convert json string to [`Snapshot`].
	pub fn from_string<T: AsRef<str>>(string: T) -> Result<Self> {
		Ok(serde_json::from_str(string.as_ref())?)
	}
}
