//! Rules-file loading.
//!
//! A TOML rules file can extend the built-in table with extra rules
//! (appended after it, so built-in rules keep evaluation priority) or replace
//! it wholesale. All validation happens here, at load time.
//!
//! ```toml
//! replace_builtin = false
//!
//! [[rules]]
//! id = "infra-proto"
//! kind = "extension_exact"
//! extensions = [".proto"]
//! layer = "Infrastructure"
//! weight = 6
//! subcategory = "Adapter"
//! ```

use crate::errors::Result;
use crate::rules::{RuleSpec, RuleTable};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub replace_builtin: bool,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// Load and compile a rule table from a TOML rules file.
pub fn load_rules(path: &Path) -> Result<RuleTable> {
    let text = std::fs::read_to_string(path)?;
    let config: RulesConfig = toml::from_str(&text)?;
    table_from_config(config)
}

fn table_from_config(config: RulesConfig) -> Result<RuleTable> {
    if config.replace_builtin {
        RuleTable::from_specs(config.rules)
    } else {
        let mut specs = crate::rules::builtin_specs();
        specs.extend(config.rules);
        RuleTable::from_specs(specs)
    }
}
