// Word-search engine

pub mod grid;
pub mod round;
pub mod scorer;
pub mod validator;

pub use grid::{GeneratorConfig, GridGenerator};
pub use round::{format_time, Round, RoundSummary};
pub use scorer::Scorer;
pub use validator::{SelectionError, SelectionPath, WordMatch, WordValidator};
