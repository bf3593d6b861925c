//! Depth-first discovery of manifest files under a scan root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::parser::{self, ManifestKind};

/// Directory names never descended into: VCS metadata, dependency caches,
/// virtualenvs, build output and editor state.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "vendor",
    "bower_components",
    "__pycache__",
    ".pytest_cache",
    ".tox",
    "venv",
    "env",
    ".env",
    ".venv",
    "target",
    "build",
    "dist",
    ".build",
    ".idea",
    ".vscode",
    ".vs",
];

/// Set of directory base names to prune. Always a superset of [`PRUNE_DIRS`].
#[derive(Debug, Clone)]
pub struct PruneSet {
    names: HashSet<String>,
}

impl PruneSet {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: HashSet<String> = PRUNE_DIRS.iter().map(|s| s.to_string()).collect();
        names.extend(extra.into_iter().map(Into::into));
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for PruneSet {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    pub prune: PruneSet,
    /// Descend through symlinked directories. Loops are reported by the
    /// walker as errors instead of recursing forever.
    pub follow_links: bool,
}

/// A file whose base name is a known manifest.
pub struct Candidate {
    pub path: PathBuf,
    pub kind: &'static ManifestKind,
}

/// Lazily walk `root`, yielding every manifest file outside pruned
/// directories in directory-enumeration order.
///
/// The root itself is never pruned. Any non-directory entry with a matching
/// name is yielded, including symlinks; whether it can be read is the
/// caller's concern.
pub fn manifests(
    root: &Path,
    options: WalkOptions,
) -> impl Iterator<Item = Result<Candidate, walkdir::Error>> {
    let WalkOptions {
        prune,
        follow_links,
    } = options;

    WalkDir::new(root)
        .follow_links(follow_links)
        .into_iter()
        .filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .map_or(true, |name| !prune.contains(name))
        })
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) => {
                let kind = parser::lookup(entry.file_name().to_str()?)?;
                Some(Ok(Candidate {
                    path: entry.into_path(),
                    kind,
                }))
            }
            Err(err) => Some(Err(err)),
        })
}
