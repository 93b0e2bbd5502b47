//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the seams crate source tree for antipatterns. Each pattern
//! has a budget (ideally zero). The budget never grows: fix an existing hit
//! before adding a new one.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    reason: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0, reason: "crashes the host page" },
    Budget { pattern: ".expect(", max: 0, reason: "crashes the host page" },
    Budget { pattern: "panic!(", max: 0, reason: "crashes the host page" },
    Budget { pattern: "unreachable!(", max: 0, reason: "crashes the host page" },
    Budget { pattern: "todo!(", max: 0, reason: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, reason: "unfinished stub" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, reason: "discards a result without inspecting it" },
    Budget { pattern: ".ok()", max: 0, reason: "discards an error without inspecting it" },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, reason: "dead code should be deleted" },
];

/// Files allowed to combine pane width and gap into a surface offset.
const FRAME_SEAM_FILES: &[&str] = &["layout.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|f| {
            let n = f.content.lines().filter(|l| l.contains(pattern)).count();
            (n > 0).then(|| (f.path.clone(), n))
        })
        .collect()
}

fn report(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(p, n)| format!("  {p}: {n}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "no sources under src/; run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` budget exceeded ({}): found {count}, max {}\n{}",
                budget.pattern,
                budget.reason,
                budget.max,
                report(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

#[test]
fn surface_offsets_come_from_layout() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !FRAME_SEAM_FILES.iter().any(|name| f.path.ends_with(name)))
        .collect();
    let found = hits(&files, "pane_width + ");
    assert!(
        found.is_empty(),
        "pane offsets must go through Layout::pane_offset / mapper::to_surface:\n{}",
        report(&found)
    );
}
