//! # tagwright
//!
//! Accessibility structure mapping, conformance validation and remediation
//! for HTML documents headed for tagged (PDF/UA-style) output.
//!
//! ## Features
//!
//! - Permissive HTML parsing into a mutable arena tree
//! - Mapping of the tree to a logical structure tree of semantic roles
//! - A fixed battery of 12 categories of conformance rules
//! - Idempotent remediation passes that repair common defects
//! - XHTML serialization of the repaired document
//!
//! ## Quick Start
//!
//! ```
//! use tagwright::{map_to_structure, parse_html, remediate, validate};
//!
//! let dom = parse_html("<h1>Report</h1><table><tr><td>A</td></tr></table>").unwrap();
//!
//! let report = validate(&dom).unwrap();
//! assert!(!report.is_compliant());
//!
//! let fixed = remediate(dom);
//! assert!(validate(&fixed).unwrap().get("3.1").unwrap().passed());
//!
//! let tree = map_to_structure(&fixed);
//! assert!(tree.node_count() > 1);
//! println!("{}", fixed.to_xhtml());
//! ```
//!
//! Validation and remediation are separate steps: remediation never
//! re-validates on its own, and a caller wanting a verdict after fixing calls
//! [`validate`] again.

pub mod dom;
pub mod error;
pub mod remediate;
pub mod structure;
pub(crate) mod util;
pub mod validate;

pub use dom::{ArenaDom, ArenaNodeId, parse_html, parse_html_bytes};
pub use error::{Error, Result};
pub use remediate::{
    Pass, RemediationConfig, RemediationReport, Remediator, remediate, remediate_in_place,
};
pub use structure::{Role, StructureNode, map_to_structure};
pub use validate::{RuleResult, RuleStatus, ValidationReport, validate};
