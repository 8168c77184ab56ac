// tests/no_direct_fs_writes.rs
// Fails if filesystem write calls appear in runtime code outside the modules
// that own the on-disk layout (projects) and the settings file (settings).
// Inline test modules are ignored.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_whitelisted(path: &Path) -> bool {
    let p = path.to_string_lossy();
    p.contains("/src/projects/") || p.contains("\\src\\projects\\") ||
    p.contains("/src/settings/") || p.contains("\\src\\settings\\")
}

/// Source up to the first inline test module.
fn runtime_part(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(idx) => &content[..idx],
        None => content,
    }
}

#[test]
fn no_direct_fs_writes_in_runtime() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let src_dir = Path::new(manifest_dir).join("src");

    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);
    assert!(!files.is_empty(), "no sources found under {:?}", src_dir);

    let bad_patterns = [
        "fs::write(",
        "fs::create_dir",
        "fs::remove_",
        "fs::rename(",
        "File::create(",
        "OpenOptions::new(",
    ];

    let mut offenders: Vec<(String, String)> = Vec::new();

    for file in files {
        if is_whitelisted(&file) { continue; }
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        let runtime = runtime_part(&content);

        for pat in &bad_patterns {
            if runtime.contains(pat) {
                offenders.push((file.to_string_lossy().to_string(), pat.to_string()));
            }
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::from("Filesystem write calls found outside projects/settings:\n");
        for (file, pat) in offenders {
            msg.push_str(&format!("  {} contains pattern '{}': go through ProjectLayout or settings::io instead\n", file, pat));
        }
        panic!("{}", msg);
    }
}
