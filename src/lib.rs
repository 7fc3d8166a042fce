// Export modules for library usage
pub mod aggregate;
pub mod analysis;
pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod modules;
pub mod rules;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{
    FileAnalysisResult, Layer, LayerScores, LayerStats, LayerTotals, ModuleSummary, RawFileRecord,
    RepoReport, Signal,
};

pub use crate::aggregate::{layer_stats, layer_stats_parallel, module_summaries};
pub use crate::classify::{
    classify_all, classify_all_serial, classify_file, evaluate, CONFIDENCE_SATURATION_WEIGHT,
};
pub use crate::errors::{Error, Result};
pub use crate::modules::{resolve_module, ROOT_MODULE};
pub use crate::rules::{Matcher, Rule, RuleKind, RuleSpec, RuleTable};
