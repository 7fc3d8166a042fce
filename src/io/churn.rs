//! Churn counts from git history.
//!
//! Churn is the number of commits that touched a file, walked along
//! first-parent history. Repositories without git history simply yield an
//! empty map; churn is a signal, not a requirement.

use crate::errors::Result;
use git2::{Repository, Sort};
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// Commit-touch counts per repository-relative path.
///
/// Infallible wrapper: a missing or unreadable git history produces an empty
/// map and a debug log entry rather than an error.
pub fn commit_touch_counts(root: &Path) -> HashMap<String, usize> {
    match try_commit_touch_counts(root) {
        Ok(counts) => counts,
        Err(err) => {
            debug!("no churn data for {}: {err}", root.display());
            HashMap::new()
        }
    }
}

fn try_commit_touch_counts(root: &Path) -> Result<HashMap<String, usize>> {
    let repo = Repository::discover(root)?;
    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(Sort::TIME)?;
    revwalk.simplify_first_parent()?;

    let mut counts: HashMap<String, usize> = HashMap::new();

    for oid in revwalk {
        let commit = repo.find_commit(oid?)?;
        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None, // root commit diffs against the empty tree
        };

        let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().and_then(|p| p.to_str()) {
                *counts.entry(path.to_string()).or_insert(0) += 1;
            }
        }
    }

    Ok(counts)
}
