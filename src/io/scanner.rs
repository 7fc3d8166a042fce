//! Repository scanner: produces the raw per-file records the classifier
//! consumes.
//!
//! Walks the tree gitignore-aware, skips binary files, counts lines, and
//! captures a truncated content snippet. Unreadable files are logged and
//! skipped; scanning never fails on individual files.

use crate::core::RawFileRecord;
use crate::errors::Result;
use ignore::WalkBuilder;
use log::warn;
use std::collections::HashMap;
use std::path::Path;

/// Lines of content captured as the classification snippet.
const SNIPPET_LINES: usize = 50;

/// Bytes sniffed for the binary heuristic (NUL byte check).
const BINARY_SNIFF_BYTES: usize = 8000;

/// Scan a checked-out repository into raw file records.
///
/// `churn` maps repository-relative paths to commit-touch counts; files
/// absent from it get churn 0.
pub fn scan_repository(root: &Path, churn: &HashMap<String, usize>) -> Result<Vec<RawFileRecord>> {
    let mut records = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let rel = relative_path(root, path);

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("skipping unreadable file {rel}: {err}");
                continue;
            }
        };

        if is_binary(&bytes) {
            continue;
        }

        let content = String::from_utf8_lossy(&bytes);
        let loc = content.lines().count();
        let snippet = content
            .lines()
            .take(SNIPPET_LINES)
            .collect::<Vec<_>>()
            .join("\n");

        records.push(RawFileRecord {
            extension: extension_of(&rel),
            churn: churn.get(&rel).copied().unwrap_or(0),
            path: rel,
            loc,
            snippet,
        });
    }

    Ok(records)
}

/// NUL byte within the sniff window means binary.
fn is_binary(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(BINARY_SNIFF_BYTES)];
    window.contains(&0)
}

/// Repository-relative path with forward slashes.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lowercased extension including the leading dot, empty when absent.
fn extension_of(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name[idx..].to_lowercase(),
        _ => String::new(),
    }
}
