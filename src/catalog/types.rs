use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{catalog::reference, types::CategoryCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionTier {
    PreferredSameClass,
    CrossClass,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionEdge {
    pub from: CategoryCode,
    pub to: CategoryCode,
    pub tier: SubstitutionTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryFlags {
    pub is_accessibility: bool,
    pub is_reserved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub code: CategoryCode,
    #[serde(default)]
    pub label: Option<String>,
    pub capacity: u32,
    #[serde(default)]
    pub quality_tier: u8,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(default)]
    pub reserved: bool,
}

impl CategoryConfig {
    pub fn new(code: impl Into<String>, capacity: u32) -> Self {
        Self {
            code: code.into(),
            label: None,
            capacity,
            quality_tier: 0,
            accessibility: false,
            reserved: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_quality_tier(mut self, quality_tier: u8) -> Self {
        self.quality_tier = quality_tier;
        self
    }

    pub fn accessible(mut self) -> Self {
        self.accessibility = true;
        self
    }

    pub fn reserved(mut self) -> Self {
        self.reserved = true;
        self
    }

    pub fn flags(&self) -> CategoryFlags {
        CategoryFlags {
            is_accessibility: self.accessibility,
            is_reserved: self.reserved,
        }
    }
}

/// Static inventory policy: categories in scan order plus the two tiers of
/// substitution edges. Edge lists are ordered by preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub categories: Vec<CategoryConfig>,
    #[serde(default)]
    pub preferred_upgrades: BTreeMap<CategoryCode, Vec<CategoryCode>>,
    #[serde(default)]
    pub cross_class_upgrades: BTreeMap<CategoryCode, Vec<CategoryCode>>,
}

impl PolicyConfig {
    pub fn new(categories: Vec<CategoryConfig>) -> Self {
        Self {
            categories,
            preferred_upgrades: BTreeMap::new(),
            cross_class_upgrades: BTreeMap::new(),
        }
    }

    pub fn with_preferred_upgrades(mut self, from: &str, to: &[&str]) -> Self {
        self.preferred_upgrades
            .insert(from.to_string(), to.iter().map(|code| code.to_string()).collect());
        self
    }

    pub fn with_cross_class_upgrades(mut self, from: &str, to: &[&str]) -> Self {
        self.cross_class_upgrades
            .insert(from.to_string(), to.iter().map(|code| code.to_string()).collect());
        self
    }

    pub fn total_capacity(&self) -> u64 {
        self.categories
            .iter()
            .map(|category| category.capacity as u64)
            .sum()
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        reference::reference_property_policy()
    }
}
