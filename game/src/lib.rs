//! Game abstractions crate.
//!
//! The whole simulation lives behind [`GameState`]: one snake on a bounded
//! grid chasing one piece of food, advanced by discrete ticks. Adapters
//! around the crate map key presses onto [`GameState::start`] and
//! [`GameState::steer`], drive [`GameState::tick`] from a timer paced by
//! [`pace::Ticker`], and paint [`GameState::snapshot`].

pub mod aux;
pub mod collision;
pub mod error;
pub mod food;
pub mod grid;
pub mod pace;
pub mod snake;
pub mod snapshot;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		aux::*,
		collision::Collision,
		grid::Grid,
		pace::{Pace, Ticker},
		snapshot::Snapshot,
		GameState, RunState, TickOutcome,
	};
}

use aux::{Coordinates, Direction};
use collision::Collision;
use error::GameError;
use food::Food;
use grid::Grid;
use pace::Pace;
use serde::{Deserialize, Serialize};
use snake::Snake;
use snapshot::Snapshot;
use std::time::Duration;

/// Whether a game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
	/// Waiting for the start signal. Input still steers the snake-to-be,
	/// but nothing moves.
	Idle,

	/// The tick loop is advancing the simulation.
	Running,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickOutcome {
	/// The snake ate the food this tick. The tick interval changed with
	/// it, so the caller must reschedule its timer.
	pub ate: bool,

	/// The collision that ended the game, if one did.
	pub collision: Option<Collision>,
}

/// Game settings and data behind a single mutation point.
///
/// Input adapters call [`start`](Self::start) and [`steer`](Self::steer),
/// the tick loop calls [`tick`](Self::tick), render adapters read
/// [`snapshot`](Self::snapshot). Nothing else mutates the game.
#[derive(Debug, Clone)]
pub struct GameState {
	grid: Grid,
	snake: Snake,
	food: Food,

	/// Pending direction, consumed at the next tick. The last write
	/// between two ticks wins.
	direction: Direction,

	pace: Pace,
	high_score: usize,
	state: RunState,

	/// Why the last game ended. Kept until a new game starts.
	failure: Option<Collision>,
}

impl GameState {
	/// Return a new [`GameState`]: a one-part snake in the middle of the
	/// default grid, heading right, waiting for the start signal.
	pub fn new() -> Self {
		let grid = Grid::default();
		let snake = Snake::new(grid.center());
		let food = Food::place(&grid, &snake);
		Self {
			grid,
			snake,
			food,
			direction: Direction::default(),
			pace: Pace::default(),
			high_score: 0,
			state: RunState::Idle,
			failure: None,
		}
	}

	/// Start a game if none is running. Clears the failure reason left
	/// behind by the previous game.
	pub fn start(&mut self) {
		if self.state == RunState::Running {
			return;
		}
		self.failure = None;
		self.state = RunState::Running;
		log::info!("game started at {:?} per tick", self.pace.interval());
	}

	/// Point the snake for the next tick. The last call before a tick
	/// wins; earlier calls between two ticks are overwritten. A reversal
	/// into the own body is accepted here and left for the collision
	/// check to sort out.
	pub fn steer(&mut self, direction: Direction) {
		log::trace!("steering {}", direction);
		self.direction = direction;
	}

	/// Advance the simulation one tick.
	///
	/// Moves the head in the pending direction, then either eats (keep
	/// the tail, place new food, ramp the pace up) or shrinks, then
	/// checks collisions. A collision records the failure reason, folds
	/// the score into the high score and resets the game to idle. Does
	/// nothing while idle.
	pub fn tick(&mut self) -> TickOutcome {
		if self.state != RunState::Running {
			return TickOutcome::default();
		}

		let head = self.snake.step(self.direction);

		let ate = head == self.food.coords();
		if ate {
			// Keeping the tail is the growth; the step above already
			// prepended the head.
			self.food = Food::place(&self.grid, &self.snake);
			self.pace.ramp_up();
		} else {
			self.snake.shrink();
		}

		let collision = collision::check(&self.snake, &self.grid);
		if let Some(kind) = collision {
			log::info!("game over, {}, score {}", kind, self.score());
			self.failure = Some(kind);
			self.reset();
		}

		TickOutcome { ate, collision }
	}

	/// Put the game back to its initial values: one-part snake in the
	/// center, fresh food, heading right, initial pace, idle. The high
	/// score absorbs the score first and survives; so does the failure
	/// reason, until [`start`](Self::start).
	pub fn reset(&mut self) {
		self.high_score = self.high_score.max(self.score());
		self.snake = Snake::new(self.grid.center());
		self.food = Food::place(&self.grid, &self.snake);
		self.direction = Direction::default();
		self.pace = Pace::default();
		self.state = RunState::Idle;
	}

	/// Pick the food up and put it at `coordinates` instead. Lets callers
	/// drive the game into known layouts; a running game places its food
	/// itself.
	pub fn spawn_food(&mut self, coordinates: Coordinates) -> Result<()> {
		if !self.grid.contains(coordinates) {
			return Err(Box::new(GameError::OutOfGrid(coordinates)));
		}
		if self.snake.parts().contains(&coordinates) {
			return Err(Box::new(GameError::CellTaken(coordinates)));
		}
		self.food = Food::at(coordinates);
		Ok(())
	}

	/// Current score: parts grown beyond the initial one.
	pub fn score(&self) -> usize {
		self.snake.len() - 1
	}

	/// Best score seen since the process started.
	pub fn high_score(&self) -> usize {
		self.high_score
	}

	/// Current tick interval.
	pub fn interval(&self) -> Duration {
		self.pace.interval()
	}

	/// Return the run state.
	pub fn state(&self) -> RunState {
		self.state
	}

	/// Return `true` while a game is being played.
	pub fn running(&self) -> bool {
		self.state == RunState::Running
	}

	/// Return the snake.
	pub fn snake(&self) -> &Snake {
		&self.snake
	}

	/// Return the food position.
	pub fn food(&self) -> Coordinates {
		self.food.coords()
	}

	/// Take a serializable picture of the current state for rendering.
	pub fn snapshot(&self) -> Snapshot {
		Snapshot {
			grid_size: self.grid.size,
			snake: self.snake.parts().to_vec(),
			food: self.food.coords(),
			score: self.score(),
			high_score: self.high_score,
			state: self.state,
			failure: self.failure,
		}
	}
}

impl Default for GameState {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tick_is_inert_while_idle() {
		let mut gs = GameState::new();
		let outcome = gs.tick();

		assert!(!outcome.ate);
		assert!(outcome.collision.is_none());
		assert_eq!(gs.snake().parts(), [(10, 10).into()]);
	}

	#[test]
	fn plain_move_keeps_length() -> crate::Result<()> {
		let mut gs = GameState::new();
		gs.spawn_food((1, 1).into())?;
		gs.start();

		let outcome = gs.tick();

		assert!(!outcome.ate);
		assert!(outcome.collision.is_none());
		assert_eq!(gs.snake().parts(), [(11, 10).into()]);
		assert_eq!(gs.score(), 0);
		Ok(())
	}

	#[test]
	fn eating_grows_and_ramps() -> crate::Result<()> {
		let mut gs = GameState::new();
		gs.spawn_food((11, 10).into())?;
		gs.start();

		let outcome = gs.tick();

		assert!(outcome.ate);
		assert_eq!(
			gs.snake().parts(),
			[(11, 10).into(), (10, 10).into()]
		);
		assert_eq!(gs.score(), 1);
		assert_eq!(gs.interval(), Duration::from_millis(328));
		// Fresh food, off the snake.
		assert!(!gs.snake().parts().contains(&gs.food()));
		Ok(())
	}

	#[test]
	fn steering_while_idle_sets_the_first_direction() -> crate::Result<()> {
		let mut gs = GameState::new();
		gs.spawn_food((1, 1).into())?;
		gs.steer(Direction::Up);
		gs.start();
		gs.tick();

		assert_eq!(gs.snake().head(), (10, 9).into());
		Ok(())
	}

	#[test]
	fn wall_resets_and_folds_high_score() -> crate::Result<()> {
		let mut gs = GameState::new();
		gs.spawn_food((11, 10).into())?;
		gs.start();
		assert!(gs.tick().ate); // score 1

		gs.steer(Direction::Up);
		let mut last = TickOutcome::default();
		for _ in 0..10 {
			gs.spawn_food((20, 20).into())?;
			last = gs.tick();
			if last.collision.is_some() {
				break;
			}
		}

		assert_eq!(last.collision, Some(Collision::Wall));
		assert_eq!(gs.state(), RunState::Idle);
		assert_eq!(gs.snake().parts(), [(10, 10).into()]);
		assert_eq!(gs.interval(), Pace::INITIAL_INTERVAL);
		assert_eq!(gs.high_score(), 1);
		assert_eq!(gs.snapshot().failure, Some(Collision::Wall));

		// The reason survives until the next game starts.
		gs.start();
		assert_eq!(gs.snapshot().failure, None);
		Ok(())
	}

	#[test]
	fn self_bite_ends_the_game() -> crate::Result<()> {
		let mut gs = GameState::new();
		gs.start();

		// Grow to five parts by leading the food around a corner.
		let path = [
			((11, 10), Direction::Right),
			((12, 10), Direction::Right),
			((12, 9), Direction::Up),
			((11, 9), Direction::Left),
		];
		for (food, direction) in path {
			gs.spawn_food(food.into())?;
			gs.steer(direction);
			assert!(gs.tick().ate);
		}
		assert_eq!(gs.score(), 4);

		// Turning down closes the loop onto the body.
		gs.spawn_food((20, 20).into())?;
		gs.steer(Direction::Down);
		let outcome = gs.tick();

		assert_eq!(outcome.collision, Some(Collision::SelfBite));
		assert_eq!(gs.state(), RunState::Idle);
		assert_eq!(gs.high_score(), 4);
		Ok(())
	}

	#[test]
	fn reversal_is_caught_by_the_self_check() -> crate::Result<()> {
		let mut gs = GameState::new();
		gs.start();
		for food in [(11, 10), (12, 10)] {
			gs.spawn_food(food.into())?;
			assert!(gs.tick().ate);
		}

		// Three parts heading right; reversing is accepted as-is and the
		// head lands on the middle part one tick later.
		gs.spawn_food((20, 20).into())?;
		gs.steer(Direction::Left);

		assert_eq!(gs.tick().collision, Some(Collision::SelfBite));
		Ok(())
	}

	#[test]
	fn high_score_survives_resets() -> crate::Result<()> {
		let mut gs = GameState::new();
		gs.spawn_food((11, 10).into())?;
		gs.start();
		assert!(gs.tick().ate);
		gs.spawn_food((12, 10).into())?;
		assert!(gs.tick().ate); // score 2

		// Crash into the right wall.
		for _ in 0..10 {
			gs.spawn_food((1, 1).into())?;
			if gs.tick().collision.is_some() {
				break;
			}
		}
		assert_eq!(gs.high_score(), 2);

		// A worse follow-up game does not lower it.
		gs.start();
		gs.steer(Direction::Left);
		for _ in 0..10 {
			gs.spawn_food((20, 20).into())?;
			if gs.tick().collision.is_some() {
				break;
			}
		}
		assert_eq!(gs.score(), 0);
		assert_eq!(gs.high_score(), 2);
		Ok(())
	}

	#[test]
	fn spawn_food_rejects_bad_cells() {
		let mut gs = GameState::new();

		assert!(gs.spawn_food((0, 3).into()).is_err());
		assert!(gs.spawn_food((3, 21).into()).is_err());
		assert!(gs.spawn_food((10, 10).into()).is_err()); // on the snake
		assert!(gs.spawn_food((1, 1).into()).is_ok());
	}
}
