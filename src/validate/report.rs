//! Validation results.

use std::collections::{BTreeMap, BTreeSet};

use super::rules::Category;

/// Outcome of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
pub enum RuleStatus {
    Passed,
    Failed,
}

/// One record per executed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct RuleResult {
    pub id: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub status: RuleStatus,
    /// Present only when the rule's predicate could not be evaluated.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Option::is_none"))]
    pub error_detail: Option<String>,
}

impl RuleResult {
    pub fn passed(&self) -> bool {
        self.status == RuleStatus::Passed
    }
}

/// Aggregate result of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ValidationReport {
    total: usize,
    passed: usize,
    failed: usize,
    is_compliant: bool,
    results: Vec<RuleResult>,
}

impl ValidationReport {
    pub fn from_results(results: Vec<RuleResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed()).count();
        let failed = results.len() - passed;
        Self {
            total: results.len(),
            passed,
            failed,
            is_compliant: failed == 0,
            results,
        }
    }

    /// Results in execution order.
    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed_count(&self) -> usize {
        self.passed
    }

    pub fn failed_count(&self) -> usize {
        self.failed
    }

    /// True when no rule failed.
    pub fn is_compliant(&self) -> bool {
        self.is_compliant
    }

    pub fn passed(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| r.passed())
    }

    pub fn failed(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Ids of failed rules, independent of execution order.
    pub fn failed_ids(&self) -> BTreeSet<&'static str> {
        self.failed().map(|r| r.id).collect()
    }

    /// Look up the result of one rule.
    pub fn get(&self, id: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Results grouped by category, categories in numeric order.
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&RuleResult>> {
        let mut groups: BTreeMap<Category, Vec<&RuleResult>> = BTreeMap::new();
        for result in &self.results {
            groups.entry(result.category).or_default().push(result);
        }
        groups
    }
}
