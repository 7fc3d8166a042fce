//! Whole-repository aggregation over classified files.
//!
//! Reductions here are order-independent: layer stats are associative
//! count/loc sums and module rollups group through a sorted map, so a
//! shuffled input produces identical output. Averages are always computed as
//! sum ÷ count at the end, never merged as averages.

use crate::core::{FileAnalysisResult, Layer, LayerStats, ModuleSummary};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Per-layer file counts and line totals, all five layers always present.
pub fn layer_stats(results: &[FileAnalysisResult]) -> LayerStats {
    results.iter().fold(LayerStats::new(), |mut stats, file| {
        stats.record(file.layer, file.loc);
        stats
    })
}

/// Parallel fold-and-merge variant of [`layer_stats`].
pub fn layer_stats_parallel(results: &[FileAnalysisResult]) -> LayerStats {
    results
        .par_iter()
        .fold(LayerStats::new, |mut stats, file| {
            stats.record(file.layer, file.loc);
            stats
        })
        .reduce(LayerStats::new, LayerStats::merge)
}

#[derive(Default)]
struct ModuleAccum {
    loc: usize,
    churn_sum: usize,
    files: usize,
    layer_counts: [usize; 5],
}

impl ModuleAccum {
    fn record(&mut self, file: &FileAnalysisResult) {
        self.loc += file.loc;
        self.churn_sum += file.churn;
        self.files += 1;
        self.layer_counts[file.layer.index()] += 1;
    }

    /// Layer with the most files; equal counts resolve to the layer earlier
    /// in the fixed priority order, keeping the result independent of input
    /// order.
    fn dominant_layer(&self) -> Layer {
        let mut best = Layer::Domain;
        let mut max_count = 0;
        for layer in Layer::ALL {
            let count = self.layer_counts[layer.index()];
            if count > max_count {
                max_count = count;
                best = layer;
            }
        }
        best
    }
}

/// Group results by module name and roll each group up.
///
/// Output is sorted by module name. Average churn is the exact sum of member
/// churn divided by member count.
pub fn module_summaries(results: &[FileAnalysisResult]) -> Vec<ModuleSummary> {
    let mut groups: BTreeMap<&str, ModuleAccum> = BTreeMap::new();

    for file in results {
        groups.entry(&file.module).or_default().record(file);
    }

    groups
        .into_iter()
        .map(|(name, accum)| ModuleSummary {
            name: name.to_string(),
            layer: accum.dominant_layer(),
            loc: accum.loc,
            churn_avg: if accum.files > 0 {
                accum.churn_sum as f64 / accum.files as f64
            } else {
                0.0
            },
            files: accum.files,
        })
        .collect()
}
