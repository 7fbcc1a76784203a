//! # Compliance Evaluation
//!
//! Maps a completed questionnaire to a [`ComplianceResult`].
//!
//! The score is the number of governance controls in place (0..=6).
//! Elevated risk (sensitive data or large-scale processing) removes the
//! benefits of the simplified regime, so it always caps the tier at
//! [`Tier::PartialOrElevatedRisk`], whatever the score.
//!
//! Company size feeds an advisory notice only. Selecting a medium
//! business does not change the score or the tier.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::questionnaire::{CompanySize, GovernanceControl, QuestionnaireAnswers};

/// Highest attainable score.
pub const MAX_SCORE: u8 = GovernanceControl::COUNT as u8;

/// Minimum score for [`Tier::Adequate`] when risk is not elevated.
const ADEQUATE_THRESHOLD: u8 = 5;

/// Minimum score for [`Tier::PartialOrElevatedRisk`] when risk is not elevated.
const PARTIAL_THRESHOLD: u8 = 3;

/// Three-valued compliance classification driving the displayed verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Adequate,
    PartialOrElevatedRisk,
    NonCompliant,
}

impl Tier {
    /// Classify a score and risk flag. First matching rule wins.
    pub fn classify(score: u8, elevated_risk: bool) -> Self {
        if score >= ADEQUATE_THRESHOLD && !elevated_risk {
            Self::Adequate
        } else if (PARTIAL_THRESHOLD..ADEQUATE_THRESHOLD).contains(&score) || elevated_risk {
            Self::PartialOrElevatedRisk
        } else {
            Self::NonCompliant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adequate => "adequate",
            Self::PartialOrElevatedRisk => "partial_or_elevated_risk",
            Self::NonCompliant => "non_compliant",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct ComplianceResult {
    /// Number of governance controls in place, `0..=MAX_SCORE`.
    pub score: u8,
    /// Sensitive data or large-scale processing.
    pub elevated_risk: bool,
    pub tier: Tier,
    /// The organization declared itself a medium business.
    pub medium_business_notice: bool,
}

/// Evaluate a completed questionnaire.
pub fn evaluate(answers: &QuestionnaireAnswers) -> ComplianceResult {
    let medium_business_notice = answers.company_size == CompanySize::MediumBusiness;

    let score = GovernanceControl::all()
        .iter()
        .filter(|control| answers.has(**control))
        .count() as u8;
    let elevated_risk = answers.sensitive_data || answers.large_scale;

    ComplianceResult {
        score,
        elevated_risk,
        tier: Tier::classify(score, elevated_risk),
        medium_business_notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answers with the first `n` governance controls set to yes.
    fn answers(size: CompanySize, n: usize, sensitive: bool, large: bool) -> QuestionnaireAnswers {
        let base = QuestionnaireAnswers {
            company_size: size,
            sensitive_data: sensitive,
            large_scale: large,
            has_communication_channel: false,
            has_operations_register: false,
            has_privacy_policy: false,
            has_data_subject_process: false,
            has_security_controls: false,
            has_incident_plan: false,
        };
        GovernanceControl::all()
            .iter()
            .take(n)
            .fold(base, |acc, c| acc.with_control(*c, true))
    }

    /// Every possible questionnaire: 5 sizes × 2^8 boolean combinations.
    fn all_inputs() -> Vec<QuestionnaireAnswers> {
        let mut out = Vec::with_capacity(5 * 256);
        for size in CompanySize::all() {
            for bits in 0u16..256 {
                let bit = |i: u16| bits & (1 << i) != 0;
                out.push(QuestionnaireAnswers {
                    company_size: *size,
                    sensitive_data: bit(0),
                    large_scale: bit(1),
                    has_communication_channel: bit(2),
                    has_operations_register: bit(3),
                    has_privacy_policy: bit(4),
                    has_data_subject_process: bit(5),
                    has_security_controls: bit(6),
                    has_incident_plan: bit(7),
                });
            }
        }
        out
    }

    // -- Concrete scenarios ---------------------------------------------------

    #[test]
    fn all_controls_no_risk_is_adequate() {
        let r = evaluate(&answers(CompanySize::Micro, 6, false, false));
        assert_eq!(r.score, 6);
        assert!(!r.elevated_risk);
        assert_eq!(r.tier, Tier::Adequate);
    }

    #[test]
    fn all_controls_with_sensitive_data_is_partial() {
        let r = evaluate(&answers(CompanySize::Micro, 6, true, false));
        assert_eq!(r.score, 6);
        assert!(r.elevated_risk);
        assert_eq!(r.tier, Tier::PartialOrElevatedRisk);
    }

    #[test]
    fn three_controls_no_risk_is_partial() {
        let r = evaluate(&answers(CompanySize::SmallBusiness, 3, false, false));
        assert_eq!(r.score, 3);
        assert!(!r.elevated_risk);
        assert_eq!(r.tier, Tier::PartialOrElevatedRisk);
    }

    #[test]
    fn two_controls_no_risk_is_non_compliant() {
        let r = evaluate(&answers(CompanySize::Startup, 2, false, false));
        assert_eq!(r.score, 2);
        assert!(!r.elevated_risk);
        assert_eq!(r.tier, Tier::NonCompliant);
    }

    #[test]
    fn zero_controls_with_sensitive_data_is_partial_not_non_compliant() {
        let r = evaluate(&answers(CompanySize::Other, 0, true, false));
        assert_eq!(r.score, 0);
        assert!(r.elevated_risk);
        assert_eq!(r.tier, Tier::PartialOrElevatedRisk);
    }

    #[test]
    fn medium_business_sets_notice_only() {
        let r = evaluate(&answers(CompanySize::MediumBusiness, 4, false, false));
        assert_eq!(r.score, 4);
        assert_eq!(r.tier, Tier::PartialOrElevatedRisk);
        assert!(r.medium_business_notice);
    }

    #[test]
    fn large_scale_alone_elevates_risk() {
        let r = evaluate(&answers(CompanySize::Micro, 5, false, true));
        assert!(r.elevated_risk);
        assert_eq!(r.tier, Tier::PartialOrElevatedRisk);
    }

    #[test]
    fn classify_band_edges() {
        assert_eq!(Tier::classify(5, false), Tier::Adequate);
        assert_eq!(Tier::classify(4, false), Tier::PartialOrElevatedRisk);
        assert_eq!(Tier::classify(3, false), Tier::PartialOrElevatedRisk);
        assert_eq!(Tier::classify(2, false), Tier::NonCompliant);
        assert_eq!(Tier::classify(0, false), Tier::NonCompliant);
        for score in 0..=MAX_SCORE {
            assert_eq!(Tier::classify(score, true), Tier::PartialOrElevatedRisk);
        }
    }

    // -- Exhaustive properties ------------------------------------------------

    #[test]
    fn exhaustive_properties_hold() {
        for input in all_inputs() {
            let r = evaluate(&input);
            let expected_score = GovernanceControl::all()
                .iter()
                .filter(|c| input.has(**c))
                .count() as u8;

            assert_eq!(r.score, expected_score);
            assert!(r.score <= MAX_SCORE);
            assert_eq!(r.elevated_risk, input.sensitive_data || input.large_scale);
            assert_eq!(
                r.tier == Tier::Adequate,
                r.score >= 5 && !r.elevated_risk,
                "{input:?}"
            );
            assert_eq!(
                r.tier == Tier::NonCompliant,
                r.score < 3 && !r.elevated_risk,
                "{input:?}"
            );
            if r.elevated_risk {
                assert_eq!(r.tier, Tier::PartialOrElevatedRisk);
            }
            assert_eq!(
                r.medium_business_notice,
                input.company_size == CompanySize::MediumBusiness
            );
        }
    }

    #[test]
    fn company_size_never_changes_score_or_tier() {
        for input in all_inputs() {
            let baseline = evaluate(&input);
            for size in CompanySize::all() {
                let other = evaluate(&QuestionnaireAnswers {
                    company_size: *size,
                    ..input
                });
                assert_eq!(other.score, baseline.score);
                assert_eq!(other.tier, baseline.tier);
                assert_eq!(other.elevated_risk, baseline.elevated_risk);
            }
        }
    }

    #[test]
    fn tier_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Tier::PartialOrElevatedRisk).unwrap(),
            "\"partial_or_elevated_risk\""
        );
        for tier in [Tier::Adequate, Tier::PartialOrElevatedRisk, Tier::NonCompliant] {
            assert_eq!(
                serde_json::to_string(&tier).unwrap(),
                format!("\"{tier}\"")
            );
        }
    }
}
