//! # Diagnosis Report
//!
//! Display model assembled from one evaluation: the result, its verdict,
//! the optional medium-business notice and the configured links. The CLI
//! prints it through [`std::fmt::Display`]; the HTTP service returns it as
//! JSON.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::TriageConfig;
use crate::evaluation::{evaluate, ComplianceResult, MAX_SCORE};
use crate::questionnaire::QuestionnaireAnswers;
use crate::verdict::{Verdict, DISCLAIMER, MEDIUM_BUSINESS_NOTICE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Report {
    pub result: ComplianceResult,
    pub verdict: Verdict,
    /// Present only for medium businesses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Score formatted as `"{score}/6"`.
    pub score_display: String,
    /// `"yes"` or `"no"`.
    pub elevated_risk_display: String,
    pub disclaimer: String,
    pub contact_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_link: Option<String>,
}

impl Report {
    /// Evaluate the answers and assemble the report.
    pub fn build(answers: &QuestionnaireAnswers, config: &TriageConfig) -> Self {
        let result = evaluate(answers);
        tracing::debug!(
            score = result.score,
            elevated_risk = result.elevated_risk,
            tier = %result.tier,
            "questionnaire evaluated"
        );
        Self::from_result(result, config)
    }

    pub fn from_result(result: ComplianceResult, config: &TriageConfig) -> Self {
        Self {
            verdict: Verdict::for_tier(result.tier),
            notice: result
                .medium_business_notice
                .then(|| MEDIUM_BUSINESS_NOTICE.to_string()),
            score_display: format!("{}/{MAX_SCORE}", result.score),
            elevated_risk_display: if result.elevated_risk { "yes" } else { "no" }.to_string(),
            disclaimer: DISCLAIMER.to_string(),
            contact_link: config.contact_link.clone(),
            manual_link: config.manual_link.clone(),
            result,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(notice) = &self.notice {
            writeln!(f, "[INFO] {notice}")?;
            writeln!(f)?;
        }

        let tag = self.verdict.severity.to_string().to_uppercase();
        writeln!(f, "[{tag}] {}", self.verdict.headline)?;
        for rec in &self.verdict.recommendations {
            writeln!(f, "  - {rec}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Score: {} | Elevated risk? {}",
            self.score_display, self.elevated_risk_display
        )?;
        writeln!(f, "{}", self.disclaimer)?;
        writeln!(f)?;
        writeln!(f, "Schedule a consultation: {}", self.contact_link)?;
        if let Some(manual) = &self.manual_link {
            writeln!(f, "Full manual (PDF): {manual}")?;
        }
        Ok(())
    }
}
