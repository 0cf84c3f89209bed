//! Architecture enforcement lint - keeps browser access behind the platform seam.
//!
//! The theme store is built from injected collaborators so it can run against
//! in-memory doubles. That only holds while nothing outside
//! `src/platform/web.rs` reaches for the browser bindings directly.
//!
//! This test scans `src/` and flags:
//! - `web_sys::`, `js_sys::` or `wasm_bindgen` outside the web platform module
//! - `.unwrap()` / `.expect(` in non-test code of the store and platform modules
//! - `Arc`/`Mutex` in the store (it is single-threaded by construction)

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Browser binding paths that only the web platform module may use
const BROWSER_BINDINGS: &[&str] = &["web_sys::", "js_sys::", "wasm_bindgen"];

/// Files allowed to use browser bindings
const BINDING_ALLOWED_FILES: &[&str] = &["platform/web.rs"];

/// Directories whose non-test code must propagate errors instead of panicking
const NO_PANIC_DIRS: &[&str] = &["theme", "platform"];

const PANICKING_CALLS: &[&str] = &[".unwrap()", ".expect("];

/// Code before the `#[cfg(test)]` module, which is what ships
fn non_test_code(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(pos) => &content[..pos],
        None => content,
    }
}

fn line_of(content: &str, pos: usize) -> usize {
    content[..pos].matches('\n').count() + 1
}

fn find_all(content: &str, pattern: &str) -> Vec<usize> {
    content.match_indices(pattern).map(|(pos, _)| pos).collect()
}

fn source_files() -> Vec<(String, String)> {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|e| {
            let rel = e
                .path()
                .strip_prefix(&src_dir)
                .ok()?
                .to_string_lossy()
                .replace('\\', "/");
            let content = fs::read_to_string(e.path()).ok()?;
            Some((rel, content))
        })
        .collect()
}

fn report(title: &str, violations: &[String]) {
    if violations.is_empty() {
        return;
    }
    let mut error_msg = format!(
        "\n\n\
        ╔══════════════════════════════════════════════════════════════════════════════╗\n\
        ║  ARCHITECTURE VIOLATION: {:<52}║\n\
        ╚══════════════════════════════════════════════════════════════════════════════╝\n\n\
        Violations found:\n\n",
        title
    );
    for violation in violations {
        error_msg.push_str(&format!("  {}\n", violation));
    }
    panic!("{}", error_msg);
}

#[test]
fn browser_bindings_stay_in_web_platform() {
    let mut violations = Vec::new();

    for (path, content) in source_files() {
        if BINDING_ALLOWED_FILES.iter().any(|allowed| path.ends_with(allowed)) {
            continue;
        }
        for pattern in BROWSER_BINDINGS {
            for pos in find_all(&content, pattern) {
                violations.push(format!(
                    "src/{}:{} uses `{}` - go through crate::platform instead",
                    path,
                    line_of(&content, pos),
                    pattern
                ));
            }
        }
    }

    report("browser bindings outside platform", &violations);
}

#[test]
fn store_and_platform_do_not_panic() {
    let mut violations = Vec::new();

    for (path, content) in source_files() {
        if !NO_PANIC_DIRS
            .iter()
            .any(|dir| path.starts_with(&format!("{}/", dir)))
        {
            continue;
        }
        let shipped = non_test_code(&content);
        for pattern in PANICKING_CALLS {
            for pos in find_all(shipped, pattern) {
                violations.push(format!(
                    "src/{}:{} calls `{}` - return a ThemeError instead",
                    path,
                    line_of(shipped, pos),
                    pattern
                ));
            }
        }
    }

    report("panicking call in store", &violations);
}

#[test]
fn store_is_single_threaded() {
    let content = fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("src/theme/store.rs"),
    )
    .expect("Failed to read src/theme/store.rs");
    let shipped = non_test_code(&content);

    for pattern in ["Arc<", "Mutex<", "RwLock<"] {
        assert!(
            !shipped.contains(pattern),
            "src/theme/store.rs uses `{}`; the store lives on the UI thread and uses Rc/RefCell",
            pattern
        );
    }
}

#[test]
fn native_main_does_not_launch_a_renderer() {
    // Default features enable no Dioxus platform; launching there panics at startup.
    let content = fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("src/main.rs"))
        .expect("Failed to read src/main.rs");

    let native_start = content
        .find("#[cfg(feature = \"native\")]")
        .expect("src/main.rs should have a native entry point");
    let native_end = content
        .find("#[cfg(not(feature = \"native\"))]")
        .unwrap_or(content.len());
    let native_main = &content[native_start..native_end];

    for pattern in ["launch(", "LaunchBuilder"] {
        assert!(
            !native_main.contains(pattern),
            "native main calls `{}`; render with app::render_page instead",
            pattern
        );
    }
}
