use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

pub type CategoryCode = String;
pub type RequestId = String;

/// Guest loyalty standing. Declaration order is ascending, so the derived
/// `Ord` ranks `LifetimeDiamond` highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum LoyaltyTier {
    #[default]
    #[serde(rename = "Non-member", alias = "Non-Member")]
    NonMember,
    Blue,
    Silver,
    Gold,
    Diamond,
    #[serde(rename = "Lifetime Diamond")]
    LifetimeDiamond,
}

impl LoyaltyTier {
    /// Highest standing first.
    pub const DESCENDING: [LoyaltyTier; 6] = [
        LoyaltyTier::LifetimeDiamond,
        LoyaltyTier::Diamond,
        LoyaltyTier::Gold,
        LoyaltyTier::Silver,
        LoyaltyTier::Blue,
        LoyaltyTier::NonMember,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyTier::LifetimeDiamond => "Lifetime Diamond",
            LoyaltyTier::Diamond => "Diamond",
            LoyaltyTier::Gold => "Gold",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Blue => "Blue",
            LoyaltyTier::NonMember => "Non-member",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reservation arriving on a given date. Intent flags are populated by
/// the loader; `special_requests` is echoed into the output untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    pub guest_name: String,
    pub requested_category: CategoryCode,
    #[serde(default)]
    pub loyalty: LoyaltyTier,
    pub nights: u32,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub needs_accessibility: bool,
    #[serde(default)]
    pub wants_connecting: bool,
    pub arrival_date: Date,
}

impl Request {
    pub fn new(
        id: impl Into<String>,
        guest_name: impl Into<String>,
        requested_category: impl Into<String>,
        arrival_date: Date,
    ) -> Self {
        Self {
            id: id.into(),
            guest_name: guest_name.into(),
            requested_category: requested_category.into(),
            loyalty: LoyaltyTier::NonMember,
            nights: 1,
            special_requests: String::new(),
            needs_accessibility: false,
            wants_connecting: false,
            arrival_date,
        }
    }

    pub fn with_loyalty(mut self, loyalty: LoyaltyTier) -> Self {
        self.loyalty = loyalty;
        self
    }

    pub fn with_nights(mut self, nights: u32) -> Self {
        self.nights = nights;
        self
    }

    pub fn with_special_requests(mut self, special_requests: impl Into<String>) -> Self {
        self.special_requests = special_requests.into();
        self
    }

    pub fn with_accessibility(mut self, needs_accessibility: bool) -> Self {
        self.needs_accessibility = needs_accessibility;
        self
    }

    pub fn with_connecting(mut self, wants_connecting: bool) -> Self {
        self.wants_connecting = wants_connecting;
        self
    }
}
