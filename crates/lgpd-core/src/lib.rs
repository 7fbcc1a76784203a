//! # lgpd-core — LGPD Small-Agent Triage
//!
//! Foundational types for a preliminary LGPD self-assessment aimed at
//! small processing agents (ME, EPP, startups) under Resolution
//! CD/ANPD nº 2/2022. Every front end in the workspace depends on this
//! crate; it depends on nothing internal.
//!
//! ## Modules
//!
//! - **Questionnaire** (`questionnaire.rs`): company size, governance
//!   controls, yes/no answer parsing, and the ordered question catalog.
//! - **Evaluation** (`evaluation.rs`): the pure compliance evaluator that
//!   maps answers to a score, an elevated-risk flag and a tier.
//! - **Verdict** (`verdict.rs`): the canned message shown for each tier.
//! - **Report** (`report.rs`): the display model assembled from a result,
//!   its verdict and the configured links.
//! - **Glossary** (`glossary.rs`): term explanations shown next to the form.
//! - **Config / Template** (`config.rs`, `template.rs`): link constants and
//!   the downloadable register template.
//!
//! ## Crate Policy
//!
//! - `evaluate()` is total and side-effect free. It never logs.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Public data types derive `Debug`, `Clone`, and implement `Serialize`.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod glossary;
pub mod questionnaire;
pub mod report;
pub mod template;
pub mod verdict;

// Re-export primary types for ergonomic imports.
pub use config::TriageConfig;
pub use error::LgpdError;
pub use evaluation::{evaluate, ComplianceResult, Tier, MAX_SCORE};
pub use glossary::{GlossaryEntry, GLOSSARY};
pub use questionnaire::{Answer, CompanySize, GovernanceControl, QuestionnaireAnswers};
pub use report::Report;
pub use template::TemplateFile;
pub use verdict::{Severity, Verdict};
