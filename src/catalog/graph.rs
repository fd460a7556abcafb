use std::collections::{BTreeMap, BTreeSet};

use crate::{
    catalog::types::{
        CategoryConfig, CategoryFlags, PolicyConfig, SubstitutionEdge, SubstitutionTier,
    },
    error::{AllocationError, invalid_policy},
    types::CategoryCode,
};

#[derive(Debug, Clone)]
struct CategoryNode {
    code: CategoryCode,
    label: Option<String>,
    capacity: u32,
    quality_tier: u8,
    flags: CategoryFlags,
}

/// Validated, immutable view of the inventory policy.
///
/// Lookups on unknown categories return empty edge lists and cleared
/// flags rather than errors.
#[derive(Debug, Clone)]
pub struct CategoryGraph {
    nodes: Vec<CategoryNode>,
    index: BTreeMap<CategoryCode, usize>,
    preferred: BTreeMap<CategoryCode, Vec<CategoryCode>>,
    cross_class: BTreeMap<CategoryCode, Vec<CategoryCode>>,
    accessibility_order: Vec<CategoryCode>,
}

impl CategoryGraph {
    pub fn from_policy(policy: &PolicyConfig) -> Result<Self, AllocationError> {
        if policy.categories.is_empty() {
            return Err(invalid_policy("policy must declare at least one category"));
        }

        let mut nodes = Vec::with_capacity(policy.categories.len());
        let mut index = BTreeMap::new();
        for CategoryConfig {
            code,
            label,
            capacity,
            quality_tier,
            accessibility,
            reserved,
        } in &policy.categories
        {
            if code.trim().is_empty() {
                return Err(invalid_policy("category code cannot be empty"));
            }
            if index.contains_key(code) {
                return Err(invalid_policy(format!("duplicate category '{}'", code)));
            }
            index.insert(code.clone(), nodes.len());
            nodes.push(CategoryNode {
                code: code.clone(),
                label: label.clone(),
                capacity: *capacity,
                quality_tier: *quality_tier,
                flags: CategoryFlags {
                    is_accessibility: *accessibility,
                    is_reserved: *reserved,
                },
            });
        }

        check_edges(&index, "preferred_upgrades", &policy.preferred_upgrades)?;
        check_edges(&index, "cross_class_upgrades", &policy.cross_class_upgrades)?;

        let accessibility_order = nodes
            .iter()
            .filter(|node| node.flags.is_accessibility)
            .map(|node| node.code.clone())
            .collect();

        tracing::debug!(
            target: "catalog",
            categories = nodes.len(),
            preferred_sources = policy.preferred_upgrades.len(),
            cross_class_sources = policy.cross_class_upgrades.len(),
            "category_graph_built"
        );

        Ok(Self {
            nodes,
            index,
            preferred: policy.preferred_upgrades.clone(),
            cross_class: policy.cross_class_upgrades.clone(),
            accessibility_order,
        })
    }

    pub fn preferred_upgrades(&self, category: &str) -> &[CategoryCode] {
        self.preferred
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn cross_class_upgrades(&self, category: &str) -> &[CategoryCode] {
        self.cross_class
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn upgrades(&self, category: &str, tier: SubstitutionTier) -> &[CategoryCode] {
        match tier {
            SubstitutionTier::PreferredSameClass => self.preferred_upgrades(category),
            SubstitutionTier::CrossClass => self.cross_class_upgrades(category),
        }
    }

    pub fn flags(&self, category: &str) -> CategoryFlags {
        self.node(category)
            .map(|node| node.flags)
            .unwrap_or_default()
    }

    pub fn is_accessibility(&self, category: &str) -> bool {
        self.flags(category).is_accessibility
    }

    pub fn is_reserved(&self, category: &str) -> bool {
        self.flags(category).is_reserved
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Accessible categories in the order they are scanned.
    pub fn accessibility_categories(&self) -> &[CategoryCode] {
        &self.accessibility_order
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.code.as_str())
    }

    pub fn capacity(&self, category: &str) -> u32 {
        self.node(category).map(|node| node.capacity).unwrap_or(0)
    }

    pub fn capacities(&self) -> impl Iterator<Item = (CategoryCode, u32)> + '_ {
        self.nodes
            .iter()
            .map(|node| (node.code.clone(), node.capacity))
    }

    pub fn total_capacity(&self) -> u64 {
        self.nodes.iter().map(|node| node.capacity as u64).sum()
    }

    pub fn quality_tier(&self, category: &str) -> u8 {
        self.node(category).map(|node| node.quality_tier).unwrap_or(0)
    }

    pub fn label(&self, category: &str) -> Option<&str> {
        self.node(category).and_then(|node| node.label.as_deref())
    }

    pub fn edges(&self) -> Vec<SubstitutionEdge> {
        let preferred = self.preferred.iter().flat_map(|(from, targets)| {
            targets.iter().map(move |to| SubstitutionEdge {
                from: from.clone(),
                to: to.clone(),
                tier: SubstitutionTier::PreferredSameClass,
            })
        });
        let cross_class = self.cross_class.iter().flat_map(|(from, targets)| {
            targets.iter().map(move |to| SubstitutionEdge {
                from: from.clone(),
                to: to.clone(),
                tier: SubstitutionTier::CrossClass,
            })
        });
        preferred.chain(cross_class).collect()
    }

    fn node(&self, category: &str) -> Option<&CategoryNode> {
        self.index.get(category).map(|&index| &self.nodes[index])
    }
}

impl TryFrom<&PolicyConfig> for CategoryGraph {
    type Error = AllocationError;

    fn try_from(policy: &PolicyConfig) -> Result<Self, Self::Error> {
        Self::from_policy(policy)
    }
}

fn check_edges(
    index: &BTreeMap<CategoryCode, usize>,
    section: &str,
    edges: &BTreeMap<CategoryCode, Vec<CategoryCode>>,
) -> Result<(), AllocationError> {
    for (from, targets) in edges {
        if !index.contains_key(from) {
            return Err(invalid_policy(format!(
                "{section}: unknown category '{from}'"
            )));
        }

        let mut seen = BTreeSet::new();
        for to in targets {
            if !index.contains_key(to) {
                return Err(invalid_policy(format!(
                    "{section}: '{from}' references unknown category '{to}'"
                )));
            }
            if to == from {
                return Err(invalid_policy(format!(
                    "{section}: '{from}' cannot substitute for itself"
                )));
            }
            if !seen.insert(to.as_str()) {
                return Err(invalid_policy(format!(
                    "{section}: '{from}' lists '{to}' more than once"
                )));
            }
        }
    }

    Ok(())
}
