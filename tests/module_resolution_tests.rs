use layermap::{resolve_module, ROOT_MODULE};

#[test]
fn skip_roots_are_dropped() {
    assert_eq!(resolve_module("src/analysis/scanner.ts"), "analysis");
    assert_eq!(resolve_module("dist/build/out/app/core/x.js"), "core");
}

#[test]
fn passthrough_roots_drill_to_inner_directory() {
    assert_eq!(resolve_module("src/lib/analysis/scanner.ts"), "analysis");
    assert_eq!(resolve_module("internal/server/handlers.go"), "server");
    assert_eq!(resolve_module("components/forms/input.tsx"), "forms");
}

#[test]
fn lone_passthrough_directory_resolves_to_root() {
    // A passthrough segment with only the filename after it never names the
    // module; the resolver falls back to the root sentinel.
    assert_eq!(resolve_module("app/page.tsx"), ROOT_MODULE);
    assert_eq!(resolve_module("src/app/page.tsx"), ROOT_MODULE);
}

#[test]
fn groupers_keep_their_child() {
    assert_eq!(resolve_module("packages/core/index.ts"), "packages/core");
    assert_eq!(resolve_module("packages/core/deep/nested/x.ts"), "packages/core");
    assert_eq!(resolve_module("apps/web/main.tsx"), "apps/web");
}

#[test]
fn grouper_without_child_directory_is_its_own_module() {
    // `scripts/build.sh` has no subdirectory between grouper and filename,
    // so phase 3 does not apply and the containing directory wins.
    assert_eq!(resolve_module("scripts/build.sh"), "scripts");
}

#[test]
fn rootless_files_resolve_to_root() {
    assert_eq!(resolve_module("README.md"), ROOT_MODULE);
    assert_eq!(resolve_module("Cargo.toml"), ROOT_MODULE);
    assert_eq!(resolve_module("src/main.rs"), ROOT_MODULE);
}

#[test]
fn result_is_never_empty() {
    for path in [
        "",
        "/",
        "a",
        "a/b",
        "a/b/c",
        "src",
        "src/",
        "src/lib/x.ts",
        "very/deep/nested/path/to/file.ts",
    ] {
        assert!(!resolve_module(path).is_empty(), "path {path:?}");
    }
}
