//! # Evaluate Subcommand
//!
//! Collects a complete questionnaire, either from one flag per question
//! or from an answers file (YAML or JSON), and prints the diagnosis.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use lgpd_core::{Answer, CompanySize, QuestionnaireAnswers, Report, TriageConfig};

use crate::OutputFormat;

/// Arguments for the `lgpd evaluate` subcommand.
#[derive(Args, Debug, Default)]
pub struct EvaluateArgs {
    /// Read all answers from a YAML or JSON file.
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Organization framing: micro (me), small_business (epp), startup,
    /// medium_business, other.
    #[arg(long, value_name = "SIZE")]
    pub company_size: Option<CompanySize>,

    /// The company processes sensitive data.
    #[arg(long, value_name = "YES|NO")]
    pub sensitive_data: Option<Answer>,

    /// Processing is carried out at large scale.
    #[arg(long, value_name = "YES|NO")]
    pub large_scale: Option<Answer>,

    /// A communication channel with data subjects exists.
    #[arg(long, value_name = "YES|NO")]
    pub communication_channel: Option<Answer>,

    /// The register of operations (INV-01) is up to date.
    #[arg(long, value_name = "YES|NO")]
    pub operations_register: Option<Answer>,

    /// A privacy policy is published.
    #[arg(long, value_name = "YES|NO")]
    pub privacy_policy: Option<Answer>,

    /// A process for answering data subjects (SOP-01) exists.
    #[arg(long, value_name = "YES|NO")]
    pub data_subject_process: Option<Answer>,

    /// Minimum security controls are implemented.
    #[arg(long, value_name = "YES|NO")]
    pub security_controls: Option<Answer>,

    /// An incident response plan (PRI-01) exists.
    #[arg(long, value_name = "YES|NO")]
    pub incident_plan: Option<Answer>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl EvaluateArgs {
    fn has_inline_answers(&self) -> bool {
        self.company_size.is_some()
            || [
                self.sensitive_data,
                self.large_scale,
                self.communication_channel,
                self.operations_register,
                self.privacy_policy,
                self.data_subject_process,
                self.security_controls,
                self.incident_plan,
            ]
            .iter()
            .any(Option::is_some)
    }
}

/// Execute the evaluate subcommand.
///
/// Returns exit code 0; incomplete or unreadable answers are errors.
pub fn run_evaluate(args: &EvaluateArgs, config: &TriageConfig, out: &mut dyn Write) -> Result<u8> {
    let answers = collect_answers(args)?;
    let report = Report::build(&answers, config);

    tracing::info!(
        tier = %report.result.tier,
        score = report.result.score,
        "diagnosis complete"
    );

    match args.format {
        OutputFormat::Text => write!(out, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(0)
}

/// Build a complete questionnaire from the arguments.
pub fn collect_answers(args: &EvaluateArgs) -> Result<QuestionnaireAnswers> {
    if let Some(path) = &args.answers {
        if args.has_inline_answers() {
            bail!("--answers cannot be combined with per-question flags");
        }
        return load_answers_file(path);
    }

    let mut missing = Vec::new();
    let company_size = match args.company_size {
        Some(size) => size,
        None => {
            missing.push("--company-size");
            CompanySize::Other
        }
    };

    let answers = QuestionnaireAnswers {
        company_size,
        sensitive_data: require(args.sensitive_data, "--sensitive-data", &mut missing),
        large_scale: require(args.large_scale, "--large-scale", &mut missing),
        has_communication_channel: require(
            args.communication_channel,
            "--communication-channel",
            &mut missing,
        ),
        has_operations_register: require(
            args.operations_register,
            "--operations-register",
            &mut missing,
        ),
        has_privacy_policy: require(args.privacy_policy, "--privacy-policy", &mut missing),
        has_data_subject_process: require(
            args.data_subject_process,
            "--data-subject-process",
            &mut missing,
        ),
        has_security_controls: require(
            args.security_controls,
            "--security-controls",
            &mut missing,
        ),
        has_incident_plan: require(args.incident_plan, "--incident-plan", &mut missing),
    };

    if !missing.is_empty() {
        bail!(
            "every question must be answered; missing: {} (or pass --answers FILE)",
            missing.join(", ")
        );
    }
    Ok(answers)
}

fn require(value: Option<Answer>, flag: &'static str, missing: &mut Vec<&'static str>) -> bool {
    match value {
        Some(answer) => answer.is_yes(),
        None => {
            missing.push(flag);
            false
        }
    }
}

/// Parse an answers file. `.json` files use the JSON parser, anything
/// else is read as YAML.
pub fn load_answers_file(path: &Path) -> Result<QuestionnaireAnswers> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse answers file: {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse answers file: {}", path.display()))
    }
}
