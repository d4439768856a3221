//! CLI command implementations.

pub mod compare;
pub mod normalize;
pub mod score;

pub use normalize::NormalizeCommand;
pub use score::ScoreCommand;
