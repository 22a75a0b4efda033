pub mod progress;
pub mod puzzle;

pub use progress::{Level, Progress};
pub use puzzle::{Direction, Grid, PlacedWord, Position, Puzzle};
