//! # Questionnaire Model
//!
//! Defines the closed answer sets of the self-assessment form and the
//! ordered question catalog that front ends render.
//!
//! The form has three sections:
//!
//! 1. Organization size (single choice among five options).
//! 2. Processing scope: sensitive data and large-scale processing.
//! 3. Six governance and security controls.
//!
//! Every field of [`QuestionnaireAnswers`] is required. Deserialization
//! rejects a payload that omits any of them, so a partially answered form
//! never reaches the evaluator.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::LgpdError;

// ---------------------------------------------------------------------------
// Company size
// ---------------------------------------------------------------------------

/// Legal framing of the organization answering the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    /// Microempresa (ME).
    Micro,
    /// Empresa de Pequeno Porte (EPP).
    SmallBusiness,
    /// Startup as defined by LC 182/21.
    Startup,
    /// Medium business, outside the simplified regime.
    MediumBusiness,
    /// Anything else.
    Other,
}

impl CompanySize {
    /// All options in the order the form presents them.
    pub fn all() -> &'static [CompanySize] {
        &[
            Self::Micro,
            Self::SmallBusiness,
            Self::Startup,
            Self::MediumBusiness,
            Self::Other,
        ]
    }

    /// Stable machine token, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::SmallBusiness => "small_business",
            Self::Startup => "startup",
            Self::MediumBusiness => "medium_business",
            Self::Other => "other",
        }
    }

    /// Label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Micro => "Microenterprise (ME)",
            Self::SmallBusiness => "Small business (EPP)",
            Self::Startup => "Startup (LC 182/21)",
            Self::MediumBusiness => "Medium business (outside the simplified regime)",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanySize {
    type Err = LgpdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "micro" | "me" => Ok(Self::Micro),
            "small_business" | "epp" => Ok(Self::SmallBusiness),
            "startup" => Ok(Self::Startup),
            "medium_business" | "medium" => Ok(Self::MediumBusiness),
            "other" => Ok(Self::Other),
            _ => Err(LgpdError::InvalidCompanySize(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Yes/no answers
// ---------------------------------------------------------------------------

/// A binary answer as typed by a user.
///
/// Accepts English and Portuguese tokens, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Parse a token, naming the questionnaire field in the error.
    pub fn parse_for(field: &str, value: &str) -> Result<Self, LgpdError> {
        match value.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "sim" | "s" | "1" => Ok(Self::Yes),
            "no" | "n" | "false" | "nao" | "não" | "0" => Ok(Self::No),
            _ => Err(LgpdError::InvalidAnswer {
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl FromStr for Answer {
    type Err = LgpdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for("answer", s)
    }
}

impl From<Answer> for bool {
    fn from(answer: Answer) -> bool {
        answer.is_yes()
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Yes => "yes",
            Self::No => "no",
        })
    }
}

// ---------------------------------------------------------------------------
// Governance controls
// ---------------------------------------------------------------------------

/// One of the six governance and security controls whose count forms
/// the compliance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernanceControl {
    /// Channel through which data subjects can exercise their rights.
    CommunicationChannel,
    /// Up-to-date register of processing operations (INV-01).
    OperationsRegister,
    /// Published privacy policy.
    PrivacyPolicy,
    /// Procedure for answering data-subject requests (SOP-01).
    DataSubjectProcess,
    /// Minimum security controls.
    SecurityControls,
    /// Incident response plan (PRI-01).
    IncidentPlan,
}

impl GovernanceControl {
    /// All controls in questionnaire order.
    pub fn all() -> &'static [GovernanceControl] {
        &[
            Self::CommunicationChannel,
            Self::OperationsRegister,
            Self::PrivacyPolicy,
            Self::DataSubjectProcess,
            Self::SecurityControls,
            Self::IncidentPlan,
        ]
    }

    /// The number of governance controls.
    pub const COUNT: usize = 6;

    /// Field name of this control in [`QuestionnaireAnswers`].
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::CommunicationChannel => "has_communication_channel",
            Self::OperationsRegister => "has_operations_register",
            Self::PrivacyPolicy => "has_privacy_policy",
            Self::DataSubjectProcess => "has_data_subject_process",
            Self::SecurityControls => "has_security_controls",
            Self::IncidentPlan => "has_incident_plan",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Self::CommunicationChannel => {
                "Is there a communication channel with data subjects?"
            }
            Self::OperationsRegister => {
                "Is there an up-to-date register of processing operations (INV-01)?"
            }
            Self::PrivacyPolicy => "Is a privacy policy published?",
            Self::DataSubjectProcess => {
                "Is there a process for answering data subjects (SOP-01)?"
            }
            Self::SecurityControls => "Are minimum security controls implemented?",
            Self::IncidentPlan => "Is there an incident response plan (PRI-01)?",
        }
    }

    /// Internal document code referenced by the glossary, if any.
    pub fn document_code(&self) -> Option<&'static str> {
        match self {
            Self::OperationsRegister => Some("INV-01"),
            Self::DataSubjectProcess => Some("SOP-01"),
            Self::IncidentPlan => Some("PRI-01"),
            Self::CommunicationChannel | Self::PrivacyPolicy | Self::SecurityControls => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// A fully answered questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct QuestionnaireAnswers {
    pub company_size: CompanySize,
    /// The organization processes sensitive personal data.
    pub sensitive_data: bool,
    /// Processing reaches at least 10 000 data subjects per year, or
    /// otherwise affects a large number of people.
    pub large_scale: bool,
    pub has_communication_channel: bool,
    pub has_operations_register: bool,
    pub has_privacy_policy: bool,
    pub has_data_subject_process: bool,
    pub has_security_controls: bool,
    pub has_incident_plan: bool,
}

impl QuestionnaireAnswers {
    /// Whether the given governance control is in place.
    pub fn has(&self, control: GovernanceControl) -> bool {
        match control {
            GovernanceControl::CommunicationChannel => self.has_communication_channel,
            GovernanceControl::OperationsRegister => self.has_operations_register,
            GovernanceControl::PrivacyPolicy => self.has_privacy_policy,
            GovernanceControl::DataSubjectProcess => self.has_data_subject_process,
            GovernanceControl::SecurityControls => self.has_security_controls,
            GovernanceControl::IncidentPlan => self.has_incident_plan,
        }
    }

    /// Set a governance control, returning the updated answers.
    pub fn with_control(mut self, control: GovernanceControl, value: bool) -> Self {
        let slot = match control {
            GovernanceControl::CommunicationChannel => &mut self.has_communication_channel,
            GovernanceControl::OperationsRegister => &mut self.has_operations_register,
            GovernanceControl::PrivacyPolicy => &mut self.has_privacy_policy,
            GovernanceControl::DataSubjectProcess => &mut self.has_data_subject_process,
            GovernanceControl::SecurityControls => &mut self.has_security_controls,
            GovernanceControl::IncidentPlan => &mut self.has_incident_plan,
        };
        *slot = value;
        self
    }

    /// Controls answered "no", in questionnaire order.
    pub fn missing_controls(&self) -> Vec<GovernanceControl> {
        GovernanceControl::all()
            .iter()
            .copied()
            .filter(|c| !self.has(*c))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Question catalog
// ---------------------------------------------------------------------------

/// Kind of input a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Single choice among [`CompanySize::all()`].
    CompanySize,
    /// Yes or no.
    YesNo,
}

/// One question of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Form section, 1-based.
    pub section: u8,
    /// Field name in [`QuestionnaireAnswers`].
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

/// Section headings, indexed by `section - 1`.
pub const SECTIONS: [&str; 3] = [
    "Organization size",
    "Data processing scope",
    "Governance and security controls",
];

/// The ordered question catalog.
pub fn questions() -> Vec<Question> {
    let mut out = vec![
        Question {
            section: 1,
            id: "company_size",
            prompt: "Select the organization's framing:",
            kind: QuestionKind::CompanySize,
        },
        Question {
            section: 2,
            id: "sensitive_data",
            prompt: "Does the company process sensitive data?",
            kind: QuestionKind::YesNo,
        },
        Question {
            section: 2,
            id: "large_scale",
            prompt: "Is the processing carried out at large scale?",
            kind: QuestionKind::YesNo,
        },
    ];
    out.extend(GovernanceControl::all().iter().map(|c| Question {
        section: 3,
        id: c.field_name(),
        prompt: c.prompt(),
        kind: QuestionKind::YesNo,
    }));
    out
}
