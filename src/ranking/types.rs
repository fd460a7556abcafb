use serde::{Deserialize, Serialize};

use crate::types::{LoyaltyTier, Request};

fn default_over_demand_bonus() -> u32 {
    1_000
}

fn default_lifetime_diamond_bonus() -> u32 {
    100
}

fn default_diamond_bonus() -> u32 {
    90
}

fn default_gold_bonus() -> u32 {
    80
}

fn default_long_stay_bonus() -> u32 {
    50
}

fn default_long_stay_min_nights() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingWeights {
    #[serde(default = "default_over_demand_bonus")]
    pub over_demand_bonus: u32,
    #[serde(default = "default_lifetime_diamond_bonus")]
    pub lifetime_diamond_bonus: u32,
    #[serde(default = "default_diamond_bonus")]
    pub diamond_bonus: u32,
    #[serde(default = "default_gold_bonus")]
    pub gold_bonus: u32,
    #[serde(default = "default_long_stay_bonus")]
    pub long_stay_bonus: u32,
    #[serde(default = "default_long_stay_min_nights")]
    pub long_stay_min_nights: u32,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            over_demand_bonus: default_over_demand_bonus(),
            lifetime_diamond_bonus: default_lifetime_diamond_bonus(),
            diamond_bonus: default_diamond_bonus(),
            gold_bonus: default_gold_bonus(),
            long_stay_bonus: default_long_stay_bonus(),
            long_stay_min_nights: default_long_stay_min_nights(),
        }
    }
}

impl RankingWeights {
    pub fn loyalty_bonus(&self, tier: LoyaltyTier) -> u32 {
        match tier {
            LoyaltyTier::LifetimeDiamond => self.lifetime_diamond_bonus,
            LoyaltyTier::Diamond => self.diamond_bonus,
            LoyaltyTier::Gold => self.gold_bonus,
            LoyaltyTier::Silver | LoyaltyTier::Blue | LoyaltyTier::NonMember => 0,
        }
    }

    pub fn is_long_stay(&self, nights: u32) -> bool {
        nights >= self.long_stay_min_nights
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRequest<'a> {
    pub request: &'a Request,
    pub score: u32,
    pub input_index: usize,
}
