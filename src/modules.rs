//! Module name inference from path structure.
//!
//! A module is the logical ownership unit a file belongs to, inferred purely
//! from path segments in four phases: skip structural roots, drill through
//! generic passthrough roots, group grouper roots with their child, then fall
//! back to the directory containing the file. Total function; every path maps
//! to a non-empty name with `"(root)"` as the universal fallback.

/// Sentinel module for files owned by no meaningful directory.
pub const ROOT_MODULE: &str = "(root)";

/// Directories dropped entirely while they lead the path.
static SKIP_ROOTS: &[&str] = &["src", "source", "dist", "build", "out", ".next", "public"];

/// Generic containers drilled through when a subdirectory still follows.
static PASSTHROUGH_ROOTS: &[&str] = &[
    "app",
    "lib",
    "pkg",
    "internal",
    "cmd",
    "components",
    "utils",
    "common",
    "shared",
    "ui",
    "services",
    "features",
];

/// Directories whose immediate child names the module together with them,
/// e.g. `packages/core`.
static GROUPER_ROOTS: &[&str] = &["agents", "packages", "modules", "scripts", "plugins", "apps", "examples"];

fn is_skip(segment: &str) -> bool {
    SKIP_ROOTS.contains(&segment)
}

fn is_passthrough(segment: &str) -> bool {
    PASSTHROUGH_ROOTS.contains(&segment)
}

fn is_grouper(segment: &str) -> bool {
    GROUPER_ROOTS.contains(&segment)
}

/// Resolve the module name for a relative, `/`-separated file path.
pub fn resolve_module(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if parts.is_empty() {
        return ROOT_MODULE.to_string();
    }

    // Phase 1: skip structural roots.
    let mut p = 0;
    while p < parts.len() && is_skip(parts[p]) {
        p += 1;
    }
    if p >= parts.len() {
        return ROOT_MODULE.to_string();
    }

    // Phase 2: drill through passthrough roots while a subdirectory and a
    // filename both still follow, so `lib/analysis/scanner.ts` resolves to
    // `analysis` rather than the generic `lib`.
    while p + 2 < parts.len() && is_passthrough(parts[p]) {
        p += 1;
    }

    // Phase 3: groupers keep their child, `packages/core/index.ts` ->
    // `packages/core`.
    if p + 2 < parts.len() && is_grouper(parts[p]) {
        return format!("{}/{}", parts[p], parts[p + 1]);
    }

    // Phase 4: we ran out of directories. Standing on the filename means the
    // parent directory names the module, unless it is itself structural.
    if p == parts.len() - 1 {
        if p > 0 {
            let parent = parts[p - 1];
            if is_skip(parent) || is_passthrough(parent) {
                return ROOT_MODULE.to_string();
            }
            return parent.to_string();
        }
        return ROOT_MODULE.to_string();
    }

    // Standing on the directory that directly contains the file: a skip or
    // passthrough name here is too generic to own a module, so fall back to
    // the root sentinel (`app/page.tsx` -> "(root)").
    if p == parts.len() - 2 && (is_skip(parts[p]) || is_passthrough(parts[p])) {
        return ROOT_MODULE.to_string();
    }

    parts[p].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drills_through_passthrough_to_inner_directory() {
        assert_eq!(resolve_module("src/lib/analysis/scanner.ts"), "analysis");
        assert_eq!(resolve_module("lib/analysis/scanner.ts"), "analysis");
    }

    #[test]
    fn grouper_keeps_child() {
        assert_eq!(resolve_module("packages/core/index.ts"), "packages/core");
        assert_eq!(resolve_module("agents/application/trade.py"), "agents/application");
    }

    #[test]
    fn bare_file_is_root() {
        assert_eq!(resolve_module("README.md"), ROOT_MODULE);
    }

    #[test]
    fn file_directly_under_skip_root_is_root() {
        assert_eq!(resolve_module("src/index.ts"), ROOT_MODULE);
        assert_eq!(resolve_module("src/dist/bundle.js"), ROOT_MODULE);
    }

    #[test]
    fn passthrough_without_subdirectory_falls_to_root() {
        // Pins the interaction between the passthrough drill and the final
        // fallback: a lone passthrough directory does not own a module.
        assert_eq!(resolve_module("app/page.tsx"), ROOT_MODULE);
        assert_eq!(resolve_module("lib/utils.ts"), ROOT_MODULE);
    }

    #[test]
    fn ordinary_directory_names_the_module() {
        assert_eq!(resolve_module("analysis/scanner.ts"), "analysis");
        assert_eq!(resolve_module("docs/guide/intro.md"), "docs");
    }

    #[test]
    fn deep_paths_use_first_meaningful_segment() {
        assert_eq!(resolve_module("src/app/api/users/route.ts"), "api");
    }

    #[test]
    fn empty_path_is_root() {
        assert_eq!(resolve_module(""), ROOT_MODULE);
    }
}
