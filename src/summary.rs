//! Short human-readable repository description.
//!
//! Pulls the first meaningful prose out of a README, skipping badges,
//! headings, and markup noise, with the manifest description as fallback.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

pub const NO_DESCRIPTION: &str = "No description available.";

const MAX_SUMMARY_CHARS: usize = 500;
const TARGET_CHARS: usize = 300;
const TARGET_SENTENCES: usize = 2;
const MIN_SUMMARY_CHARS: usize = 20;

static BADGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[!\[.*?\]\(.*?\)\]\(.*?\)|^!\[.*?\]\(.*?\)").unwrap());
static LINK_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[[\w-]+\]:\s*https?://").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^<[\w\s="'-]+>|^</\w+>$"#).unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}\s").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*_]{3,}$").unwrap());
static HTML_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<!--|-->$").unwrap());

/// Best-effort description for a checked-out repository.
pub fn describe_repository(root: &Path) -> String {
    if let Some(readme) = find_readme(root) {
        if let Ok(text) = std::fs::read_to_string(&readme) {
            if let Some(summary) = summarize_readme(&text) {
                return summary;
            }
        }
    }

    manifest_description(root).unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

fn find_readme(root: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(root).ok()?;
    entries
        .flatten()
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_lowercase().starts_with("readme"))
                .unwrap_or(false)
        })
}

/// Extract the leading meaningful prose from README text.
///
/// Returns `None` when nothing substantial survives the noise filter.
pub fn summarize_readme(text: &str) -> Option<String> {
    let mut meaningful: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_noise_line(trimmed) {
            continue;
        }

        meaningful.push(trimmed);

        let combined = meaningful.join(" ");
        let sentences = combined.matches('.').count();
        if combined.len() > TARGET_CHARS || sentences >= TARGET_SENTENCES {
            break;
        }
    }

    let summary: String = meaningful
        .join(" ")
        .chars()
        .take(MAX_SUMMARY_CHARS)
        .collect();

    (summary.len() > MIN_SUMMARY_CHARS).then_some(summary)
}

fn is_noise_line(line: &str) -> bool {
    BADGE.is_match(line)
        || LINK_REF.is_match(line)
        || HTML_TAG.is_match(line)
        || HEADING.is_match(line)
        || HORIZONTAL_RULE.is_match(line)
        || HTML_COMMENT.is_match(line)
}

/// Description field from package.json or Cargo.toml, if present.
fn manifest_description(root: &Path) -> Option<String> {
    if let Ok(text) = std::fs::read_to_string(root.join("package.json")) {
        if let Ok(pkg) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(desc) = pkg.get("description").and_then(|d| d.as_str()) {
                if !desc.is_empty() {
                    return Some(desc.to_string());
                }
            }
        }
    }

    if let Ok(text) = std::fs::read_to_string(root.join("Cargo.toml")) {
        if let Ok(manifest) = text.parse::<toml::Value>() {
            if let Some(desc) = manifest
                .get("package")
                .and_then(|p| p.get("description"))
                .and_then(|d| d.as_str())
            {
                if !desc.is_empty() {
                    return Some(desc.to_string());
                }
            }
        }
    }

    None
}
