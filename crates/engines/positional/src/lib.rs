//! Positional Othello Strategies
//!
//! Strategies that look at most one ply ahead:
//! - scan order: first or last legal cell in row-major order
//! - placement: prefer the center, the edges, or edge cells only
//! - greedy: maximise own disc count after the move
//!
//! Randomised tie-breaking keeps self-play games from repeating.

mod greedy;
mod placement;
mod scan;

pub use greedy::ShallowScoreStrategy;
pub use placement::{CenterStrategy, EdgeExclusiveStrategy, EdgeStrategy};
pub use scan::{FirstValidStrategy, LastValidStrategy};
