//! Classification rule table.
//!
//! Rules are ordered, immutable configuration: each one pairs a matcher
//! (path pattern, exact extension, or content pattern) with a target layer,
//! a weight, and an optional subcategory. Table order is significant — the
//! evaluator walks it front to back and the subcategory tie-break keeps the
//! earliest-declared rule.

use crate::core::Layer;
use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::collections::HashSet;

/// Which attribute of a file a rule inspects.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Pattern matched anywhere in the relative path
    PathPattern,
    /// Extension equals one of a listed set (lowercased, leading dot)
    ExtensionExact,
    /// Pattern matched anywhere in the content snippet
    ContentPattern,
}

/// Serde-friendly rule description, compiled into a [`Rule`] at load time.
///
/// `pattern` is required for path/content rules, `extensions` for extension
/// rules; supplying the wrong one is a configuration error, caught when the
/// table is built rather than during classification.
#[derive(Clone, Debug, Deserialize)]
pub struct RuleSpec {
    pub id: String,
    pub kind: RuleKind,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    pub layer: Layer,
    pub weight: u32,
    #[serde(default)]
    pub subcategory: Option<String>,
}

/// Compiled matcher, one variant per [`RuleKind`].
#[derive(Clone, Debug)]
pub enum Matcher {
    PathPattern(Regex),
    ExtensionExact(Vec<String>),
    ContentPattern(Regex),
}

#[derive(Clone, Debug)]
pub struct Rule {
    pub id: String,
    pub matcher: Matcher,
    pub layer: Layer,
    pub weight: u32,
    pub subcategory: Option<String>,
}

impl Rule {
    /// Whether this rule matches the given file attributes.
    ///
    /// Total: an unmatched pattern is "no match", never an error.
    pub fn matches(&self, path: &str, extension: &str, snippet: &str) -> bool {
        match &self.matcher {
            Matcher::PathPattern(re) => re.is_match(path),
            Matcher::ExtensionExact(exts) => exts.iter().any(|e| e == extension),
            Matcher::ContentPattern(re) => re.is_match(snippet),
        }
    }
}

/// Ordered, immutable rule table.
///
/// Built once (startup-time validation per the error model), shared read-only
/// across worker threads afterwards.
#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compile and validate a table from specs, preserving order.
    pub fn from_specs(specs: Vec<RuleSpec>) -> Result<Self> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut rules = Vec::with_capacity(specs.len());

        for spec in specs {
            if !seen.insert(spec.id.clone()) {
                return Err(Error::Configuration(format!(
                    "duplicate rule id `{}`",
                    spec.id
                )));
            }
            if spec.weight == 0 {
                return Err(Error::Configuration(format!(
                    "rule `{}` has zero weight",
                    spec.id
                )));
            }
            rules.push(compile_rule(spec)?);
        }

        Ok(Self { rules })
    }

    /// The built-in table, mirroring the stock classifier rule set.
    pub fn builtin() -> &'static RuleTable {
        static BUILTIN: Lazy<RuleTable> = Lazy::new(|| {
            RuleTable::from_specs(builtin_specs()).expect("builtin rule table is valid")
        });
        &BUILTIN
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn compile_rule(spec: RuleSpec) -> Result<Rule> {
    let matcher = match spec.kind {
        RuleKind::PathPattern => Matcher::PathPattern(compile_pattern(&spec)?),
        RuleKind::ContentPattern => Matcher::ContentPattern(compile_pattern(&spec)?),
        RuleKind::ExtensionExact => {
            let exts = spec.extensions.clone().unwrap_or_default();
            if exts.is_empty() {
                return Err(Error::Configuration(format!(
                    "extension rule `{}` lists no extensions",
                    spec.id
                )));
            }
            Matcher::ExtensionExact(exts.into_iter().map(normalize_extension).collect())
        }
    };

    Ok(Rule {
        id: spec.id,
        matcher,
        layer: spec.layer,
        weight: spec.weight,
        subcategory: spec.subcategory,
    })
}

fn compile_pattern(spec: &RuleSpec) -> Result<Regex> {
    let pattern = spec.pattern.as_deref().ok_or_else(|| {
        Error::Configuration(format!("rule `{}` is missing a pattern", spec.id))
    })?;

    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::Pattern {
            rule: spec.id.clone(),
            source,
        })
}

fn normalize_extension(ext: String) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') || lower.is_empty() {
        lower
    } else {
        format!(".{lower}")
    }
}

fn path_rule(id: &str, pattern: &str, layer: Layer, weight: u32, subcat: &str) -> RuleSpec {
    RuleSpec {
        id: id.to_string(),
        kind: RuleKind::PathPattern,
        pattern: Some(pattern.to_string()),
        extensions: None,
        layer,
        weight,
        subcategory: Some(subcat.to_string()),
    }
}

fn ext_rule(id: &str, extensions: &[&str], layer: Layer, weight: u32, subcat: &str) -> RuleSpec {
    RuleSpec {
        id: id.to_string(),
        kind: RuleKind::ExtensionExact,
        pattern: None,
        extensions: Some(extensions.iter().map(|e| e.to_string()).collect()),
        layer,
        weight,
        subcategory: Some(subcat.to_string()),
    }
}

fn content_rule(id: &str, pattern: &str, layer: Layer, weight: u32, subcat: &str) -> RuleSpec {
    RuleSpec {
        id: id.to_string(),
        kind: RuleKind::ContentPattern,
        pattern: Some(pattern.to_string()),
        extensions: None,
        layer,
        weight,
        subcategory: Some(subcat.to_string()),
    }
}

/// The stock rule set, in evaluation order.
pub(crate) fn builtin_specs() -> Vec<RuleSpec> {
    use Layer::*;

    vec![
        // Presentation: UI, API routes, CLI commands
        path_rule(
            "pres-web-folder",
            r"(^|/)(ui|views|pages|components|frontend|web|public|assets|styles)(/|$)",
            Presentation,
            5,
            "Web UI",
        ),
        ext_rule(
            "pres-web-ext",
            &[
                ".tsx", ".jsx", ".css", ".scss", ".less", ".sass", ".vue", ".svelte", ".html",
            ],
            Presentation,
            5,
            "Web UI",
        ),
        path_rule(
            "pres-next-app",
            r"(^|/)(page|layout|loading|template|error|not-found|global-error|route)\.(tsx|jsx|js|ts)$",
            Presentation,
            6,
            "Web UI",
        ),
        path_rule(
            "pres-api-routes",
            r"(^|/)(api|routes|endpoints|graphql|rpc)(/|$)",
            Presentation,
            5,
            "API Route",
        ),
        content_rule(
            "pres-api-content",
            r"@Controller|@Get|@Post|router\.|app\.get|ServeHTTP|func.*Handler",
            Presentation,
            4,
            "API Route",
        ),
        path_rule(
            "pres-cli-folder",
            r"(^|/)(cmd|cli|commands)(/|$)",
            Presentation,
            5,
            "CLI Command",
        ),
        content_rule(
            "pres-cli-content",
            r"cobra\.Command|flags\.String|console\.log|print\(",
            Presentation,
            2,
            "CLI Command",
        ),
        // Application: services, state, orchestration
        path_rule(
            "app-service",
            r"(^|/)(services|usecases|logic|hooks|actions)(/|$)",
            Application,
            5,
            "Service",
        ),
        content_rule(
            "app-service-content",
            r"class.*Service|type.*UseCase|function.*Hook",
            Application,
            4,
            "Service",
        ),
        path_rule(
            "app-state",
            r"(^|/)(store|state|reducers|slices|atoms|context)(/|$)",
            Application,
            5,
            "State Management",
        ),
        content_rule(
            "app-state-content",
            r"createSlice|configureStore|createStore|RecoilRoot|atom\(|createContext|dispatch\(",
            Application,
            4,
            "State Management",
        ),
        path_rule(
            "app-controller",
            r"(^|/)(controllers)(/|$)",
            Application,
            4,
            "Controller",
        ),
        path_rule(
            "app-jobs",
            r"(^|/)(jobs|workers|queues|tasks)(/|$)",
            Application,
            5,
            "Job/Worker",
        ),
        // Domain: entities, types, constants, pure utilities
        path_rule(
            "dom-model",
            r"(^|/)(models|entities|domain|schemas|dtos|dto)(/|$)",
            Domain,
            6,
            "Model",
        ),
        path_rule(
            "dom-types",
            r"(^|/)(types|interfaces)(/|$)",
            Domain,
            6,
            "Type/Interface",
        ),
        path_rule(
            "dom-util",
            r"(^|/)(utils|util|lib|helpers|validations|common|shared)(/|$)",
            Domain,
            4,
            "Utility",
        ),
        path_rule(
            "dom-const",
            r"(^|/)(constants|config|enums)(/|$)",
            Domain,
            5,
            "Constant/Config",
        ),
        // Infrastructure: persistence, external IO, adapters
        path_rule(
            "infra-db-folder",
            r"(^|/)(db|database|prisma|drizzle|sql|migrations|seeds|data)(/|$)",
            Infrastructure,
            6,
            "Database",
        ),
        ext_rule(
            "infra-db-ext",
            &[".sql", ".prisma", ".db", ".sqlite"],
            Infrastructure,
            6,
            "Database",
        ),
        path_rule(
            "infra-repo",
            r"(^|/)(repositories|dao|store)(/|$)",
            Infrastructure,
            5,
            "Repository",
        ),
        path_rule(
            "infra-client",
            r"(^|/)(clients|adapters|providers|integrations|sdk|webhooks)(/|$)",
            Infrastructure,
            5,
            "Adapter",
        ),
        content_rule(
            "infra-content",
            r"fetch\(|axios\.|grpc\.|s3\.|aws-sdk|pg\.|mysql\.",
            Infrastructure,
            3,
            "Adapter",
        ),
        // Tooling: builds, CI, tests, docs
        path_rule(
            "tool-config-files",
            r"^(package\.json|go\.mod|requirements\.txt|tsconfig\.json|\.gitignore|Dockerfile|Makefile|docker-compose.*)$",
            Tooling,
            7,
            "Configuration",
        ),
        path_rule(
            "tool-config-folder",
            r"(^|/)(build|dist|deploy|scripts|infra|terraform|\.github|k8s)(/|$)",
            Tooling,
            6,
            "Configuration",
        ),
        ext_rule(
            "tool-infra-ext",
            &[
                ".tf", ".tfvars", ".yaml", ".yml", ".toml", ".conf", ".xml", ".gradle",
            ],
            Tooling,
            2,
            "Configuration",
        ),
        path_rule(
            "tool-test-folder",
            r"(^|/)(test|tests|__tests__|spec|e2e|cypress)(/|$)",
            Tooling,
            7,
            "Test",
        ),
        path_rule("tool-test-file", r"(\.|_)(test|spec)\.", Tooling, 7, "Test"),
        content_rule(
            "tool-test-content",
            r"describe\(|it\(|expect\(|assert\.|TestMain",
            Tooling,
            4,
            "Test",
        ),
        path_rule(
            "tool-docs",
            r"(^|/)(docs|documentation)(/|$)",
            Tooling,
            6,
            "Documentation",
        ),
        path_rule(
            "tool-docs-file",
            r"^(README|LICENSE|CHANGELOG).*$",
            Tooling,
            7,
            "Documentation",
        ),
        ext_rule("tool-docs-ext", &[".md", ".txt"], Tooling, 2, "Documentation"),
    ]
}
