//! # Questions and Glossary Subcommands
//!
//! Print the questionnaire in form order, and the glossary that explains
//! its terms.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;

use lgpd_core::glossary::{self, GLOSSARY};
use lgpd_core::questionnaire::{questions, QuestionKind, SECTIONS};
use lgpd_core::CompanySize;

use crate::OutputFormat;

/// Arguments for the `lgpd questions` subcommand.
#[derive(Args, Debug, Default)]
pub struct QuestionsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `lgpd glossary` subcommand.
#[derive(Args, Debug, Default)]
pub struct GlossaryArgs {
    /// Show only the term starting with this text.
    #[arg(value_name = "TERM")]
    pub term: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run_questions(args: &QuestionsArgs, out: &mut dyn Write) -> Result<u8> {
    let qs = questions();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &qs)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let mut section = 0;
            for q in &qs {
                if q.section != section {
                    section = q.section;
                    if section > 1 {
                        writeln!(out)?;
                    }
                    writeln!(out, "{section} · {}", SECTIONS[usize::from(section) - 1])?;
                }
                writeln!(out, "  [{}] {}", q.id, q.prompt)?;
                match q.kind {
                    QuestionKind::YesNo => writeln!(out, "      yes | no")?,
                    QuestionKind::CompanySize => {
                        for size in CompanySize::all() {
                            writeln!(out, "      {:<16} {}", size.as_str(), size.label())?;
                        }
                    }
                }
            }
        }
    }
    Ok(0)
}

/// Print the glossary. An unknown term is an error.
pub fn run_glossary(args: &GlossaryArgs, out: &mut dyn Write) -> Result<u8> {
    let entries: Vec<_> = match &args.term {
        Some(term) => match glossary::lookup(term) {
            Some(entry) => vec![*entry],
            None => bail!("unknown glossary term: {term}"),
        },
        None => GLOSSARY.to_vec(),
    };

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for e in &entries {
                writeln!(out, "{}: {}", e.term, e.explanation)?;
            }
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_text_lists_every_section() {
        let mut out: Vec<u8> = Vec::new();
        run_questions(&QuestionsArgs::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for heading in SECTIONS {
            assert!(text.contains(heading), "{heading} missing:\n{text}");
        }
        assert!(text.contains("medium_business"));
        assert!(text.contains("[has_incident_plan]"));
    }

    #[test]
    fn questions_json_is_ordered() {
        let mut out: Vec<u8> = Vec::new();
        let args = QuestionsArgs {
            format: OutputFormat::Json,
        };
        run_questions(&args, &mut out).unwrap();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(json.len(), 9);
        assert_eq!(json[0]["id"], "company_size");
        assert_eq!(json[0]["kind"], "company_size");
        assert_eq!(json[8]["id"], "has_incident_plan");
    }

    #[test]
    fn glossary_single_term() {
        let mut out: Vec<u8> = Vec::new();
        let args = GlossaryArgs {
            term: Some("large".to_string()),
            ..GlossaryArgs::default()
        };
        run_glossary(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Large scale:"));
    }

    #[test]
    fn glossary_unknown_term_errors() {
        let args = GlossaryArgs {
            term: Some("quantum".to_string()),
            ..GlossaryArgs::default()
        };
        assert!(run_glossary(&args, &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn glossary_full_listing() {
        let mut out: Vec<u8> = Vec::new();
        run_glossary(&GlossaryArgs::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), GLOSSARY.len());
    }
}
