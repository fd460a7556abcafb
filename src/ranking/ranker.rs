use std::collections::BTreeSet;

use crate::{
    ranking::types::{RankedRequest, RankingWeights},
    types::{CategoryCode, Request},
};

pub struct RankingContext<'a> {
    pub over_demanded: &'a BTreeSet<CategoryCode>,
}

pub trait PriorityRanker: Send + Sync {
    fn score(&self, request: &Request, ctx: &RankingContext<'_>) -> u32;

    /// Highest score first. The sort is stable, so equal scores keep input
    /// order.
    fn rank<'r>(
        &self,
        requests: &[&'r Request],
        ctx: &RankingContext<'_>,
    ) -> Vec<RankedRequest<'r>> {
        let mut ranked: Vec<RankedRequest<'r>> = requests
            .iter()
            .enumerate()
            .map(|(input_index, &request)| RankedRequest {
                request,
                score: self.score(request, ctx),
                input_index,
            })
            .collect();
        ranked.sort_by(|lhs, rhs| rhs.score.cmp(&lhs.score));
        ranked
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeterministicPriorityRanker {
    pub weights: RankingWeights,
}

impl DeterministicPriorityRanker {
    pub fn new(weights: RankingWeights) -> Self {
        Self { weights }
    }
}

impl PriorityRanker for DeterministicPriorityRanker {
    fn score(&self, request: &Request, ctx: &RankingContext<'_>) -> u32 {
        let mut score = 0u32;
        if ctx.over_demanded.contains(&request.requested_category) {
            score = score.saturating_add(self.weights.over_demand_bonus);
        }
        score = score.saturating_add(self.weights.loyalty_bonus(request.loyalty));
        if self.weights.is_long_stay(request.nights) {
            score = score.saturating_add(self.weights.long_stay_bonus);
        }
        score
    }
}
