//! # Template Subcommand
//!
//! Exports the INV-01 register template. A missing template is reported
//! as a warning and is not an error.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use lgpd_core::template::TEMPLATE_FILE_NAME;
use lgpd_core::{TemplateFile, TriageConfig};

/// Arguments for the `lgpd template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Destination path. Defaults to `INV-01.xlsx` in the current directory.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

pub fn run_template(args: &TemplateArgs, config: &TriageConfig, out: &mut dyn Write) -> Result<u8> {
    let template = TemplateFile::locate(&config.template_path);
    let Some(bytes) = template.read().with_context(|| {
        format!("failed to read template: {}", template.path().display())
    })?
    else {
        writeln!(
            out,
            "warning: {TEMPLATE_FILE_NAME} not found at {}",
            template.path().display()
        )?;
        return Ok(0);
    };

    let dest = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(TEMPLATE_FILE_NAME));
    std::fs::write(&dest, &bytes)
        .with_context(|| format!("failed to write template: {}", dest.display()))?;

    tracing::info!(dest = %dest.display(), bytes = bytes.len(), "template exported");
    writeln!(out, "wrote {}", dest.display())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_template() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join(TEMPLATE_FILE_NAME);
        std::fs::write(&src, b"register").unwrap();
        let config = TriageConfig {
            template_path: src,
            ..TriageConfig::default()
        };
        let dest = dir.path().join("copy.xlsx");

        let mut out: Vec<u8> = Vec::new();
        let code = run_template(
            &TemplateArgs {
                out: Some(dest.clone()),
            },
            &config,
            &mut out,
        )
        .unwrap();

        assert_eq!(code, 0);
        assert_eq!(std::fs::read(&dest).unwrap(), b"register");
        assert!(String::from_utf8(out).unwrap().starts_with("wrote "));
    }

    #[test]
    fn missing_template_warns_and_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = TriageConfig {
            template_path: dir.path().join("absent.xlsx"),
            ..TriageConfig::default()
        };
        let dest = dir.path().join("copy.xlsx");

        let mut out: Vec<u8> = Vec::new();
        let code = run_template(
            &TemplateArgs {
                out: Some(dest.clone()),
            },
            &config,
            &mut out,
        )
        .unwrap();

        assert_eq!(code, 0);
        assert!(!dest.exists());
        assert!(String::from_utf8(out).unwrap().starts_with("warning:"));
    }
}
