//! # lgpd-cli — Command-Line Front End
//!
//! Provides the `lgpd` command. Argument parsing lives here; evaluation,
//! verdict text and rendering come from `lgpd-core`.
//!
//! ## Subcommands
//!
//! - `lgpd evaluate` — Answer the questionnaire and print the diagnosis.
//! - `lgpd questions` — Print the questionnaire.
//! - `lgpd glossary` — Print the glossary, or one term.
//! - `lgpd template` — Export the INV-01 register template.
//!
//! ```bash
//! lgpd evaluate --company-size epp --sensitive-data no --large-scale no \
//!     --communication-channel yes --operations-register yes \
//!     --privacy-policy yes --data-subject-process no \
//!     --security-controls yes --incident-plan no
//! lgpd evaluate --answers answers.yaml --format json
//! ```
//!
//! Handlers return a process exit code and write to a caller-supplied
//! writer so they can be exercised without a terminal.

pub mod evaluate;
pub mod questions;
pub mod template;

/// Output format shared by subcommands that print structured data.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
