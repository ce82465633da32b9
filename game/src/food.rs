//! Food abstractions.

use crate::{grid::Grid, snake::Snake, aux::Coordinates};
use serde::{Deserialize, Serialize};

/// Food which is going to be eaten by a snake. Occupies one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Food {
    coordinates: Coordinates,
}

impl Food {
    /// Put food on a random cell the snake does not occupy.
    ///
    /// Samples the grid uniformly and retries on occupied cells;
    /// terminates while the snake leaves at least one cell free.
    pub(crate) fn place(grid: &Grid, snake: &Snake) -> Self {
        let mut coordinates = grid.random_coords();
        while snake.parts().contains(&coordinates) {
            coordinates = grid.random_coords();
        }
        log::debug!("food placed at {}", coordinates);
        Self { coordinates }
    }

    /// Return food lying at `coordinates`, wherever that is.
    pub(crate) fn at(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }

    /// Return food's coordinates.
    pub fn coords(&self) -> Coordinates {
        self.coordinates
    }
}
