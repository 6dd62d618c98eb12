//! Source budgets for both crates, checked at test time.
//!
//! Event handlers run inside the browser's task loop, where a panic takes
//! down the whole page and a dropped `Result` hides a broken binding. The
//! gesture core must also stay free of browser crates so it keeps running
//! under plain `cargo test`. Each budget caps how many production lines may
//! contain a pattern; `_test.rs` files are not scanned.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// `gesture/src`: the browser-free interaction core.
    Core,
    /// `src`: content, layout and the DOM host.
    Host,
    Both,
}

impl Scope {
    fn covers(self, crate_scope: Scope) -> bool {
        self == Scope::Both || self == crate_scope
    }
}

struct Budget {
    pattern: &'static str,
    max: usize,
    scope: Scope,
    reason: &'static str,
}

const fn budget(pattern: &'static str, max: usize, scope: Scope, reason: &'static str) -> Budget {
    Budget { pattern, max, scope, reason }
}

const BUDGETS: &[Budget] = &[
    budget(".unwrap()", 0, Scope::Both, "a panic in a handler kills the page"),
    budget(".expect(", 0, Scope::Both, "a panic in a handler kills the page"),
    budget("panic!(", 0, Scope::Both, "a panic in a handler kills the page"),
    budget("unreachable!(", 0, Scope::Both, "a panic in a handler kills the page"),
    budget("todo!(", 0, Scope::Both, "unfinished paths panic"),
    budget("unimplemented!(", 0, Scope::Both, "unfinished paths panic"),
    budget("let _ =", 0, Scope::Both, "log or propagate DOM failures"),
    budget(".ok()", 0, Scope::Both, "log or propagate DOM failures"),
    budget("#[allow(dead_code)]", 0, Scope::Both, "test-only helpers go behind #[cfg(test)]"),
    budget("static mut ", 0, Scope::Both, "shared state is injected"),
    budget("thread_local!", 0, Scope::Both, "shared state is injected"),
    budget("web_sys", 0, Scope::Core, "the core stays browser-free"),
    budget("wasm_bindgen", 0, Scope::Core, "the core stays browser-free"),
    budget("js_sys", 0, Scope::Core, "the core stays browser-free"),
    budget("gloo_timers", 0, Scope::Core, "the core returns delays; the host owns timers"),
    // One in `dom::listen`, one for the delayed mobile warning.
    budget(".forget()", 2, Scope::Host, "every leaked closure or timer lives for the page"),
    budget("Closure::wrap", 1, Scope::Host, "listeners are registered through dom::listen only"),
    // `append_child` hands back the node already held by the caller.
    budget(".map(|_| ())", 2, Scope::Host, "only discard values that are already owned"),
];

struct SourceFile {
    path: PathBuf,
    scope: Scope,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    collect(&root.join("gesture").join("src"), Scope::Core, &mut files);
    collect(&root.join("src"), Scope::Host, &mut files);
    files
}

fn collect(dir: &Path, scope: Scope, out: &mut Vec<SourceFile>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| panic!("cannot read {}: {err}", dir.display()));
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, scope, out);
            continue;
        }
        let is_source = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_source && !is_test {
            let content = fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
            out.push(SourceFile { path, scope, content });
        }
    }
}

/// Lines matching `budget` in the files it covers, as `path:line` locations.
fn hits(files: &[&SourceFile], budget: &Budget) -> Vec<String> {
    files
        .iter()
        .filter(|file| budget.scope.covers(file.scope))
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(budget.pattern))
                .map(move |(n, _)| format!("{}:{}", file.path.display(), n + 1))
        })
        .collect()
}

fn overruns(files: &[SourceFile], scope: Scope) -> Vec<String> {
    let files: Vec<&SourceFile> = files.iter().filter(|f| f.scope == scope).collect();
    BUDGETS
        .iter()
        .filter(|b| b.scope.covers(scope))
        .filter_map(|b| {
            let found = hits(&files, b);
            (found.len() > b.max).then(|| {
                format!(
                    "`{}`: found {}, max {} ({})\n    {}",
                    b.pattern,
                    found.len(),
                    b.max,
                    b.reason,
                    found.join("\n    ")
                )
            })
        })
        .collect()
}

#[test]
fn both_crates_are_scanned() {
    let files = source_files();
    for (scope, lib) in [(Scope::Core, "gesture/src/lib.rs"), (Scope::Host, "src/lib.rs")] {
        let found = files.iter().any(|f| f.scope == scope && f.path.ends_with(lib));
        assert!(found, "{lib} missing from the {scope:?} scan");
    }
    assert!(files.iter().all(|f| !f.path.to_string_lossy().ends_with("_test.rs")));
}

#[test]
fn core_budgets_hold() {
    let files = source_files();
    let over = overruns(&files, Scope::Core);
    assert!(over.is_empty(), "gesture/src over budget:\n{}", over.join("\n"));
}

#[test]
fn host_budgets_hold() {
    let files = source_files();
    let over = overruns(&files, Scope::Host);
    assert!(over.is_empty(), "src over budget:\n{}", over.join("\n"));
}

#[test]
fn budget_counts_matching_lines_only_in_scope() {
    let files = vec![
        SourceFile { path: "gesture/src/a.rs".into(), scope: Scope::Core, content: "x.forget();\nweb_sys::window()".into() },
        SourceFile { path: "src/b.rs".into(), scope: Scope::Host, content: "a.forget(); b.forget();\nweb_sys::window()".into() },
    ];
    let files: Vec<&SourceFile> = files.iter().collect();
    let forget = budget(".forget()", 0, Scope::Host, "");
    assert_eq!(hits(&files, &forget), vec!["src/b.rs:1".to_owned()]);
    let browser = budget("web_sys", 0, Scope::Core, "");
    assert_eq!(hits(&files, &browser), vec!["gesture/src/a.rs:2".to_owned()]);
    let shared = budget("web_sys", 0, Scope::Both, "");
    assert_eq!(hits(&files, &shared).len(), 2);
}
