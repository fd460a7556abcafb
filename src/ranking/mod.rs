pub mod ranker;
pub mod types;

pub use ranker::{DeterministicPriorityRanker, PriorityRanker, RankingContext};
pub use types::{RankedRequest, RankingWeights};
