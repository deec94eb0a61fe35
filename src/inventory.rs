//! Skein counts per floss code, and pattern requirement checks against them.
//!
//! Counts live outside the ranking engine; the search view only displays and
//! edits them next to ranked rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Owned skeins keyed by floss code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skeins owned for `code`, zero when never recorded.
    pub fn count(&self, code: &str) -> u32 {
        self.counts.get(code).copied().unwrap_or(0)
    }

    pub fn set(&mut self, code: &str, count: u32) {
        self.counts.insert(code.to_string(), count);
    }

    pub fn increment(&mut self, code: &str) -> u32 {
        let count = self.counts.entry(code.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Remove one skein; never goes below zero.
    pub fn decrement(&mut self, code: &str) -> u32 {
        match self.counts.get_mut(code) {
            Some(count) => {
                *count = count.saturating_sub(1);
                *count
            }
            None => 0,
        }
    }

    /// Codes with at least one skein, in code order.
    pub fn owned(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(code, count)| (code.as_str(), *count))
    }
}

/// One floss a pattern calls for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlossRequirement {
    pub number: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementStatus {
    Owned,
    Needed,
}

impl RequirementStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequirementStatus::Owned => "✓",
            RequirementStatus::Needed => "Needed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementRow<'a> {
    pub requirement: &'a FlossRequirement,
    pub in_inventory: u32,
    pub status: RequirementStatus,
}

/// Check each required floss against the inventory, in pattern order.
pub fn analyze_pattern<'a>(
    requirements: &'a [FlossRequirement],
    inventory: &Inventory,
) -> Vec<RequirementRow<'a>> {
    requirements
        .iter()
        .map(|requirement| {
            let in_inventory = inventory.count(&requirement.number);
            let status = if in_inventory >= 1 {
                RequirementStatus::Owned
            } else {
                RequirementStatus::Needed
            };
            RequirementRow {
                requirement,
                in_inventory,
                status,
            }
        })
        .collect()
}
