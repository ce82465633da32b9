//! Errors returned by functions related to this crate.

use crate::aux::*;
use std::{error, fmt};

/// Error type returned by crate's functions.
#[derive(Debug, Clone)]
pub enum GameError {
    /// Placing food at coordinates outside the grid.
    OutOfGrid(Coordinates),

    /// Placing food at coordinates the snake occupies.
    CellTaken(Coordinates),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfGrid(coords) => write!(f,
				"can't place food at {} because it is outside the grid", coords),
            Self::CellTaken(coords) => write!(f,
				"can't place food at {} because the snake occupies it", coords),
        }
    }
}

impl error::Error for GameError {}

/// Error returned if can't parse [`Direction`] from a string.
#[derive(Debug, Clone)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Direction because parsed string is not \"up\", \"down\", \"left\" or \"right\"")
    }
}

impl error::Error for ParseDirectionError {}
