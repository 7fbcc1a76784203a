//! # Glossary
//!
//! Plain-language explanations of the terms used by the questionnaire.

use serde::Serialize;

/// One glossary term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub explanation: &'static str,
}

const fn entry(term: &'static str, explanation: &'static str) -> GlossaryEntry {
    GlossaryEntry { term, explanation }
}

pub const GLOSSARY: [GlossaryEntry; 13] = [
    entry(
        "Small processing agent (ATPP)",
        "ME, EPP or startup (art. 2, Resolution 2/2022).",
    ),
    entry(
        "Personal data",
        "Information that identifies or can identify someone (e.g. name, CPF, IP address).",
    ),
    entry(
        "Sensitive data",
        "Health, biometrics, political opinion, religion, sexual orientation, racial or ethnic origin.",
    ),
    entry(
        "Large scale",
        "Processing of 10 000 or more data subjects per year, or a volume affecting a large number of people.",
    ),
    entry(
        "High-risk processing",
        "Sensitive data or large scale or systematic monitoring; removes the simplified benefits.",
    ),
    entry(
        "Communication channel",
        "E-mail or form available for data subjects to exercise their rights.",
    ),
    entry(
        "Data protection officer (DPO)",
        "Contact person for data subjects and the ANPD; optional for small agents, which keep the channel.",
    ),
    entry(
        "Register of operations (INV-01)",
        "Simplified inventory of processing activities (spreadsheet).",
    ),
    entry(
        "Privacy policy",
        "Public document listing collected data, purposes, legal bases and rights.",
    ),
    entry(
        "Data subject process (SOP-01)",
        "Internal procedure for answering data subject requests within 15 days.",
    ),
    entry(
        "Minimum security controls",
        "Strong passwords or 2FA, 3-2-1 backups, antivirus, encryption, updates.",
    ),
    entry(
        "Incident plan (PRI-01)",
        "Detection, analysis, containment, notification (within 2 business days), lessons learned.",
    ),
    entry(
        "ANPD",
        "National Data Protection Authority; supervises and applies sanctions.",
    ),
];

/// Look up a term, case-insensitively, by prefix.
pub fn lookup(term: &str) -> Option<&'static GlossaryEntry> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    GLOSSARY
        .iter()
        .find(|e| e.term.to_lowercase().starts_with(&needle))
}
