//! Shared fixtures for integration tests.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// One node of a fixture tree.
pub enum Entry {
    File(&'static str, &'static str),
    Dir(&'static str, Vec<Entry>),
}

/// Materialize a fixture tree under `root`.
pub fn build_tree(root: &Path, entries: &[Entry]) {
    for entry in entries {
        match entry {
            Entry::File(name, contents) => {
                fs::write(root.join(name), contents).unwrap();
            }
            Entry::Dir(name, children) => {
                let dir = root.join(name);
                fs::create_dir_all(&dir).unwrap();
                build_tree(&dir, children);
            }
        }
    }
}

/// Every file under `root`, as root-relative paths. Comparing two snapshots
/// is how the idempotence tests tell "rewrote the same files" apart from
/// "grew something new".
pub fn file_set(root: &Path) -> BTreeSet<String> {
    let mut files = BTreeSet::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let relative = entry.path().strip_prefix(root).unwrap();
            files.insert(relative.to_string_lossy().to_string());
        }
    }
    files
}
