use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Architectural layer a file can be assigned to.
///
/// Variant order is the tie-break priority used by the classifier: when two
/// layers accumulate equal scores, the one declared earlier here wins. Code
/// that needs to scan layers must iterate [`Layer::ALL`] rather than a map, so
/// the priority stays an explicit contract.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Presentation,
    Application,
    Domain,
    Infrastructure,
    Tooling,
}

impl Layer {
    /// All layers in declared priority order.
    pub const ALL: [Layer; 5] = [
        Layer::Presentation,
        Layer::Application,
        Layer::Domain,
        Layer::Infrastructure,
        Layer::Tooling,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Layer, &str)] = &[
            (Layer::Presentation, "Presentation"),
            (Layer::Application, "Application"),
            (Layer::Domain, "Domain"),
            (Layer::Infrastructure, "Infrastructure"),
            (Layer::Tooling, "Tooling"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(l, _)| l == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Raw per-file input produced by the scanner.
///
/// `extension` is lowercased and keeps its leading dot (empty when the file
/// has none). `snippet` holds roughly the first 50 lines of content.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawFileRecord {
    pub path: String,
    pub extension: String,
    pub loc: usize,
    pub churn: usize,
    pub snippet: String,
}

/// Evidence that a rule matched a file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Signal {
    pub rule: String,
    pub weight: u32,
    pub description: String,
}

/// Per-layer accumulated rule weights for a single file.
///
/// Always carries an entry for each of the five layers, zero by default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerScores {
    scores: [u32; 5],
}

impl LayerScores {
    pub fn get(&self, layer: Layer) -> u32 {
        self.scores[layer.index()]
    }

    pub fn add(&mut self, layer: Layer, weight: u32) {
        self.scores[layer.index()] += weight;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Layer, u32)> + '_ {
        Layer::ALL.iter().map(|&l| (l, self.scores[l.index()]))
    }
}

/// Fully classified file: the output of the per-file façade.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FileAnalysisResult {
    pub path: String,
    pub extension: String,
    pub loc: usize,
    pub churn: usize,
    pub layer: Layer,
    pub subcategory: Option<String>,
    pub confidence: f64,
    pub signals: Vec<Signal>,
    pub module: String,
}

/// File count and line total for one layer.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayerTotals {
    pub count: usize,
    pub loc: usize,
}

/// Per-layer rollup over a whole repository.
///
/// All five layers are always present, even with zero files.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayerStats {
    totals: [LayerTotals; 5],
}

impl LayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, layer: Layer, loc: usize) {
        let entry = &mut self.totals[layer.index()];
        entry.count += 1;
        entry.loc += loc;
    }

    pub fn get(&self, layer: Layer) -> LayerTotals {
        self.totals[layer.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Layer, LayerTotals)> + '_ {
        Layer::ALL.iter().map(|&l| (l, self.totals[l.index()]))
    }

    /// Associative merge of two partial rollups.
    pub fn merge(mut self, other: Self) -> Self {
        for layer in Layer::ALL {
            let i = layer.index();
            self.totals[i].count += other.totals[i].count;
            self.totals[i].loc += other.totals[i].loc;
        }
        self
    }

    pub fn total_files(&self) -> usize {
        self.totals.iter().map(|t| t.count).sum()
    }

    pub fn total_loc(&self) -> usize {
        self.totals.iter().map(|t| t.loc).sum()
    }
}

/// Rollup for one inferred module.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModuleSummary {
    pub name: String,
    pub layer: Layer,
    pub loc: usize,
    pub churn_avg: f64,
    pub files: usize,
}

/// Complete analysis output for one repository run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepoReport {
    pub root: std::path::PathBuf,
    pub generated_at: DateTime<Utc>,
    pub description: String,
    pub total_files: usize,
    pub total_loc: usize,
    pub layer_stats: LayerStats,
    pub modules: Vec<ModuleSummary>,
    pub files: Vec<FileAnalysisResult>,
}
