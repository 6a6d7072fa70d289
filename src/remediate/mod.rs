//! Remediation passes.
//!
//! Each pass repairs one class of defect in place and reports how many fixes
//! it applied. Passes are idempotent: running one twice applies no further
//! fixes the second time, and a pass never touches a node outside its own
//! defect class.
//!
//! ## Pipeline Order
//!
//! 1. **Skeleton** - Synthesize missing `html`, `head` and `body`
//! 2. **Main Content** - Wrap body content in `main`
//! 3. **Alt Text** - Give images alternative text
//! 4. **Landmark Labels** - Label `nav` and `form` elements
//! 5. **Tables** - Captions, header rows and header scopes
//! 6. **Metadata** - Description, keywords, author, charset and title
//! 7. **Heading Gaps** - Insert headings for skipped levels
//! 8. **Lists** - Wrap stray list children in `li`
//!
//! The pipeline runs once. Callers that need a verdict re-validate the result.
//!
//! # Example
//!
//! ```
//! use tagwright::dom::parse_html;
//! use tagwright::remediate::{Pass, remediate_in_place};
//!
//! let mut dom = parse_html("<img src='team_photo.jpg'>").unwrap();
//! let report = remediate_in_place(&mut dom);
//!
//! assert_eq!(report.fixes_for(Pass::AltText), 1);
//! let img = dom.find_by_tag("img").unwrap();
//! assert_eq!(dom.get_attr(img, "alt"), Some("team photo"));
//! ```

mod alt_text;
mod config;
mod headings;
mod landmarks;
mod lists;
mod metadata;
mod skeleton;
mod tables;

pub use alt_text::{describe_source, fix_alt_text};
pub use config::RemediationConfig;
pub use headings::fill_heading_gaps;
pub use landmarks::label_landmarks;
pub use lists::repair_lists;
pub use metadata::repair_metadata;
pub use skeleton::{ensure_main, ensure_skeleton};
pub use tables::repair_tables;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::dom::ArenaDom;
use crate::error::Error;

/// A single remediation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
pub enum Pass {
    Skeleton,
    MainContent,
    AltText,
    LandmarkLabels,
    Tables,
    Metadata,
    HeadingGaps,
    Lists,
}

impl Pass {
    /// Every pass, in default pipeline order.
    pub const ALL: [Pass; 8] = [
        Pass::Skeleton,
        Pass::MainContent,
        Pass::AltText,
        Pass::LandmarkLabels,
        Pass::Tables,
        Pass::Metadata,
        Pass::HeadingGaps,
        Pass::Lists,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::Skeleton => "skeleton",
            Pass::MainContent => "main_content",
            Pass::AltText => "alt_text",
            Pass::LandmarkLabels => "landmark_labels",
            Pass::Tables => "tables",
            Pass::Metadata => "metadata",
            Pass::HeadingGaps => "heading_gaps",
            Pass::Lists => "lists",
        }
    }

    /// Run this pass, returning the number of fixes applied.
    pub fn apply(self, dom: &mut ArenaDom, config: &RemediationConfig) -> usize {
        match self {
            Pass::Skeleton => ensure_skeleton(dom),
            Pass::MainContent => ensure_main(dom),
            Pass::AltText => fix_alt_text(dom, config),
            Pass::LandmarkLabels => label_landmarks(dom, config),
            Pass::Tables => repair_tables(dom, config),
            Pass::Metadata => repair_metadata(dom, config),
            Pass::HeadingGaps => fill_heading_gaps(dom, config),
            Pass::Lists => repair_lists(dom),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Pass {
    type Err = Error;

    /// Accepts the snake_case name, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Pass::ALL
            .into_iter()
            .find(|pass| pass.name() == normalized)
            .ok_or_else(|| Error::InvalidInput(format!("unknown remediation pass: {s}")))
    }
}

/// Fix count of one executed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct PassOutcome {
    pub pass: Pass,
    pub fixes: usize,
}

/// Per-pass fix counts of one pipeline run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct RemediationReport {
    pub outcomes: Vec<PassOutcome>,
}

impl RemediationReport {
    pub fn total_fixes(&self) -> usize {
        self.outcomes.iter().map(|o| o.fixes).sum()
    }

    /// Fixes applied by `pass`; zero when it did not run.
    pub fn fixes_for(&self, pass: Pass) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.pass == pass)
            .map(|o| o.fixes)
            .sum()
    }

    /// True when no pass changed the tree.
    pub fn is_noop(&self) -> bool {
        self.total_fixes() == 0
    }
}

/// Configurable remediation pipeline.
#[derive(Debug, Clone)]
pub struct Remediator {
    config: RemediationConfig,
    passes: Vec<Pass>,
}

impl Default for Remediator {
    fn default() -> Self {
        Self::new()
    }
}

impl Remediator {
    /// All passes in default order with default placeholders.
    pub fn new() -> Self {
        Self {
            config: RemediationConfig::default(),
            passes: Pass::ALL.to_vec(),
        }
    }

    pub fn with_config(mut self, config: RemediationConfig) -> Self {
        self.config = config;
        self
    }

    /// Disable one pass.
    pub fn without(mut self, pass: Pass) -> Self {
        self.passes.retain(|&p| p != pass);
        self
    }

    /// Replace the pipeline with exactly these passes, in this order.
    pub fn with_passes(mut self, passes: impl IntoIterator<Item = Pass>) -> Self {
        self.passes = passes.into_iter().collect();
        self
    }

    pub fn config(&self) -> &RemediationConfig {
        &self.config
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Run every enabled pass once, in order.
    pub fn run(&self, dom: &mut ArenaDom) -> RemediationReport {
        let outcomes = self
            .passes
            .iter()
            .map(|&pass| {
                let fixes = pass.apply(dom, &self.config);
                debug!(pass = pass.name(), fixes, "remediation pass complete");
                PassOutcome { pass, fixes }
            })
            .collect();
        RemediationReport { outcomes }
    }
}

/// Remediate a tree with the default pipeline and return it.
pub fn remediate(mut dom: ArenaDom) -> ArenaDom {
    remediate_in_place(&mut dom);
    dom
}

/// Remediate a tree in place with the default pipeline.
pub fn remediate_in_place(dom: &mut ArenaDom) -> RemediationReport {
    Remediator::new().run(dom)
}
