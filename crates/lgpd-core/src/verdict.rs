//! # Verdicts
//!
//! The canned message shown for each [`Tier`], plus the advisory text
//! for organizations that declared themselves medium businesses.

use serde::Serialize;
use utoipa::ToSchema;

use crate::evaluation::Tier;

/// Display style of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// Headline and recommendations for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Verdict {
    pub tier: Tier,
    pub severity: Severity,
    pub headline: String,
    pub recommendations: Vec<String>,
}

impl Verdict {
    pub fn for_tier(tier: Tier) -> Self {
        let (severity, headline, recommendations): (Severity, &str, &[&str]) = match tier {
            Tier::Adequate => (
                Severity::Success,
                "Diagnosis: basic compliance adequate",
                &[
                    "Review policies annually.",
                    "Keep the INV-01 register up to date.",
                ],
            ),
            Tier::PartialOrElevatedRisk => (
                Severity::Warning,
                "Diagnosis: partial compliance or elevated risk",
                &[
                    "A specialist assessment is recommended.",
                    "Assess the need for a data protection impact report (LGPD art. 38).",
                ],
            ),
            Tier::NonCompliant => (
                Severity::Error,
                "Diagnosis: non-compliance",
                &["Implement a full adequacy plan with professional support."],
            ),
        };
        Self {
            tier,
            severity,
            headline: headline.to_string(),
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Shown when the organization is a medium business.
pub const MEDIUM_BUSINESS_NOTICE: &str = "Medium business identified: the small processing agent \
regime does not apply. Adopt the full LGPD obligations (DPO, impact report, complete register, etc.).";

/// Caption shown under every result.
pub const DISCLAIMER: &str = "Initial screening tool; it does not replace legal advice.";
