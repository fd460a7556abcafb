mod capacity;
mod fallback;

use room_balancer::{
    AllocationEngine, PassOutput,
    catalog::{CategoryConfig, PolicyConfig},
    types::{LoyaltyTier, Request},
};
use time::{Date, macros::date};

pub fn arrival() -> Date {
    date!(2026 - 01 - 17)
}

pub fn request(id: &str, category: &str, loyalty: LoyaltyTier, nights: u32) -> Request {
    Request::new(id, format!("Guest {id}"), category, arrival())
        .with_loyalty(loyalty)
        .with_nights(nights)
}

pub fn plain(id: &str, category: &str) -> Request {
    request(id, category, LoyaltyTier::NonMember, 1)
}

pub fn category(code: &str, capacity: u32, quality_tier: u8) -> CategoryConfig {
    CategoryConfig::new(code, capacity).with_quality_tier(quality_tier)
}

pub fn engine(policy: PolicyConfig) -> AllocationEngine {
    AllocationEngine::with_defaults(&policy).expect("policy should be valid")
}

pub fn run(policy: PolicyConfig, requests: &[Request]) -> PassOutput {
    engine(policy)
        .run_pass(arrival(), requests)
        .expect("pass should succeed")
}
