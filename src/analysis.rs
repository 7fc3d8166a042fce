//! End-to-end repository analysis: scan, classify, aggregate, describe.

use crate::aggregate::{layer_stats, layer_stats_parallel, module_summaries};
use crate::classify::{classify_all, classify_all_serial};
use crate::core::RepoReport;
use crate::errors::Result;
use crate::io::{churn, scanner};
use crate::rules::RuleTable;
use crate::summary;
use chrono::Utc;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyzeOptions {
    /// Skip the git-history walk and report churn 0 everywhere.
    pub no_churn: bool,
    /// Classify and aggregate on a single thread.
    pub no_parallel: bool,
}

/// Analyze a checked-out repository into a full report.
pub fn analyze_repository(
    root: &Path,
    table: &RuleTable,
    options: AnalyzeOptions,
) -> Result<RepoReport> {
    let churn_counts = if options.no_churn {
        HashMap::new()
    } else {
        churn::commit_touch_counts(root)
    };

    let records = scanner::scan_repository(root, &churn_counts)?;
    debug!("scanned {} files under {}", records.len(), root.display());

    let files = if options.no_parallel {
        classify_all_serial(table, &records)
    } else {
        classify_all(table, &records)
    };

    let stats = if options.no_parallel {
        layer_stats(&files)
    } else {
        layer_stats_parallel(&files)
    };
    let modules = module_summaries(&files);

    Ok(RepoReport {
        root: root.to_path_buf(),
        generated_at: Utc::now(),
        description: summary::describe_repository(root),
        total_files: stats.total_files(),
        total_loc: stats.total_loc(),
        layer_stats: stats,
        modules,
        files,
    })
}
