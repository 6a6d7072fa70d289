//! Conformance validation.
//!
//! Runs every registered rule against a document tree and aggregates the
//! outcomes into a [`ValidationReport`]. A rule that cannot be evaluated (it
//! returns a [`RuleFault`] or panics) is recorded as failed with the fault
//! message attached; the remaining rules still run.
//!
//! # Example
//!
//! ```
//! use tagwright::dom::parse_html;
//! use tagwright::validate::validate;
//!
//! let dom = parse_html("<table><tr><td>A</td></tr></table>").unwrap();
//! let report = validate(&dom).unwrap();
//!
//! assert!(!report.is_compliant());
//! assert!(!report.get("3.1").unwrap().passed());
//! ```

mod report;
pub mod rules;

pub use report::{RuleResult, RuleStatus, ValidationReport};
pub use rules::{Category, Rule, RuleFault, find_rule, registry};

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, warn};

use crate::dom::ArenaDom;
use crate::error::{Error, Result};

/// Validate a document against the full rule registry.
pub fn validate(dom: &ArenaDom) -> Result<ValidationReport> {
    let rules: Vec<&Rule> = registry().iter().collect();
    validate_with(dom, &rules)
}

/// Validate a document against the given rules, in the given order.
///
/// Fails only when the tree has no document element; in that case no rule
/// runs and no partial report is produced.
pub fn validate_with(dom: &ArenaDom, rules: &[&Rule]) -> Result<ValidationReport> {
    ensure_document(dom)?;

    let results = rules.iter().map(|rule| evaluate(rule, dom)).collect();
    Ok(finish(results))
}

/// Validate against the full registry, evaluating rules on the rayon pool.
///
/// Results are reported in registry order.
#[cfg(feature = "parallel")]
pub fn validate_parallel(dom: &ArenaDom) -> Result<ValidationReport> {
    use rayon::prelude::*;

    ensure_document(dom)?;

    let results = registry()
        .par_iter()
        .map(|rule| evaluate(rule, dom))
        .collect();
    Ok(finish(results))
}

/// Evaluate a single rule, isolating faults and panics.
pub fn evaluate(rule: &Rule, dom: &ArenaDom) -> RuleResult {
    let outcome = catch_unwind(AssertUnwindSafe(|| (rule.check)(dom)))
        .unwrap_or_else(|payload| Err(RuleFault::Panicked(panic_message(payload.as_ref()))));

    let (status, error_detail) = match outcome {
        Ok(true) => (RuleStatus::Passed, None),
        Ok(false) => (RuleStatus::Failed, None),
        Err(fault) => {
            warn!(rule = rule.id, %fault, "rule could not be evaluated");
            (RuleStatus::Failed, Some(fault.to_string()))
        }
    };

    RuleResult {
        id: rule.id,
        category: rule.category,
        description: rule.description,
        status,
        error_detail,
    }
}

fn ensure_document(dom: &ArenaDom) -> Result<()> {
    if dom.document_element().is_none() {
        return Err(Error::InvalidInput("document has no root element".into()));
    }
    Ok(())
}

fn finish(results: Vec<RuleResult>) -> ValidationReport {
    let report = ValidationReport::from_results(results);
    debug!(
        total = report.total(),
        passed = report.passed_count(),
        failed = report.failed_count(),
        "validation complete"
    );
    report
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
