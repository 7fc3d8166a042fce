//! Per-file classification: signal evaluation, layer selection, and the
//! façade that combines them with module resolution.
//!
//! Everything here is a pure function of the file record and the shared
//! read-only rule table, so classification is safe to run in parallel across
//! files with no locking.

use crate::core::{FileAnalysisResult, Layer, LayerScores, RawFileRecord, Signal};
use crate::modules::resolve_module;
use crate::rules::RuleTable;
use rayon::prelude::*;

/// Total matched weight at which confidence saturates to 1.0.
///
/// Calibrated as "roughly one strong rule match".
pub const CONFIDENCE_SATURATION_WEIGHT: u32 = 7;

/// Extensions that default to Domain when no rule matches.
static SOURCE_CODE_EXTENSIONS: &[&str] = &[".ts", ".js", ".go", ".py", ".java", ".cs", ".rb"];

/// Extensions that default to Tooling when no rule matches.
static STRUCTURED_CONFIG_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml", ".xml", ".toml"];

/// Evaluate every rule in table order against one file.
///
/// Returns the per-layer score totals plus the matched signals in rule-table
/// order. No rule evaluation can fail; an unmatched pattern is simply no
/// match.
pub fn evaluate(table: &RuleTable, file: &RawFileRecord) -> (LayerScores, Vec<Signal>) {
    let mut scores = LayerScores::default();
    let mut signals = Vec::new();

    for rule in table.iter() {
        if rule.matches(&file.path, &file.extension, &file.snippet) {
            scores.add(rule.layer, rule.weight);
            signals.push(Signal {
                rule: rule.id.clone(),
                weight: rule.weight,
                description: format!("Matched {}", rule.id),
            });
        }
    }

    (scores, signals)
}

/// Pick the winning layer and its score.
///
/// Scans layers in declared priority order keeping the first strictly-higher
/// score, so ties resolve to the earlier layer. A zero maximum falls through
/// to the extension heuristic.
fn pick_layer(scores: &LayerScores, extension: &str) -> (Layer, u32) {
    let mut best = Layer::Domain;
    let mut max_score = 0;

    for layer in Layer::ALL {
        let score = scores.get(layer);
        if score > max_score {
            max_score = score;
            best = layer;
        }
    }

    if max_score == 0 {
        best = fallback_layer(extension);
    }

    (best, max_score)
}

/// Zero-score heuristic: source code reads as Domain, structured config as
/// Tooling, anything else as Domain.
fn fallback_layer(extension: &str) -> Layer {
    if SOURCE_CODE_EXTENSIONS.contains(&extension) {
        Layer::Domain
    } else if STRUCTURED_CONFIG_EXTENSIONS.contains(&extension) {
        Layer::Tooling
    } else {
        Layer::Domain
    }
}

/// Best subcategory among winning-layer rules that matched this file.
///
/// Re-derives matches rather than reusing evaluation state; keeps the
/// earliest-declared rule on equal weights (strict `>`).
fn pick_subcategory(table: &RuleTable, file: &RawFileRecord, winner: Layer) -> Option<String> {
    let mut best: Option<(&str, u32)> = None;

    for rule in table.iter() {
        if rule.layer != winner {
            continue;
        }
        let Some(subcat) = rule.subcategory.as_deref() else {
            continue;
        };
        if !rule.matches(&file.path, &file.extension, &file.snippet) {
            continue;
        }
        if best.map_or(true, |(_, w)| rule.weight > w) {
            best = Some((subcat, rule.weight));
        }
    }

    best.map(|(subcat, _)| subcat.to_string())
}

/// Classify one file: layer, confidence, subcategory, signals, and module.
pub fn classify_file(table: &RuleTable, file: &RawFileRecord) -> FileAnalysisResult {
    let (scores, signals) = evaluate(table, file);
    let (layer, max_score) = pick_layer(&scores, &file.extension);
    let confidence = (f64::from(max_score) / f64::from(CONFIDENCE_SATURATION_WEIGHT)).min(1.0);
    let subcategory = pick_subcategory(table, file, layer);

    FileAnalysisResult {
        path: file.path.clone(),
        extension: file.extension.clone(),
        loc: file.loc,
        churn: file.churn,
        layer,
        subcategory,
        confidence,
        signals,
        module: resolve_module(&file.path),
    }
}

/// Classify a batch of files in parallel, preserving input order.
pub fn classify_all(table: &RuleTable, files: &[RawFileRecord]) -> Vec<FileAnalysisResult> {
    files
        .par_iter()
        .map(|file| classify_file(table, file))
        .collect()
}

/// Sequential variant of [`classify_all`].
pub fn classify_all_serial(table: &RuleTable, files: &[RawFileRecord]) -> Vec<FileAnalysisResult> {
    files.iter().map(|file| classify_file(table, file)).collect()
}
