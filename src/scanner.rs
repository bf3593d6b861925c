use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::error::ScanError;
use crate::models::{DependencyRecord, Ecosystem};
use crate::parser::Pair;
use crate::report::terminal;
use crate::walker::{self, Candidate, WalkOptions};

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub walk: WalkOptions,
    /// Ecosystems whose manifests are skipped without being read.
    pub exclude: Vec<Ecosystem>,
}

/// Everything a single scan produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// In discovery order, then parser emission order. No deduplication.
    pub records: Vec<DependencyRecord>,
    /// Manifests successfully parsed, per ecosystem (lockfiles included).
    pub manifests: BTreeMap<Ecosystem, usize>,
    /// Files or directories skipped along the way, in the order hit.
    pub issues: Vec<ScanError>,
}

/// Walks a tree once, parsing every manifest it finds.
pub struct Scanner {
    root: PathBuf,
    options: ScanOptions,
    progress: ProgressBar,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, options: ScanOptions) -> Self {
        Self {
            root: root.into(),
            options,
            progress: ProgressBar::hidden(),
        }
    }

    /// Show the manifest being parsed on `progress`; diagnostics are printed
    /// through it.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn scan(&self) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        for candidate in walker::manifests(&self.root, self.options.walk.clone()) {
            let candidate = match candidate {
                Ok(candidate) => candidate,
                Err(source) => {
                    let path = source
                        .path()
                        .map_or_else(|| self.root.clone(), Path::to_path_buf);
                    self.report(&mut outcome, ScanError::Walk { path, source });
                    continue;
                }
            };

            let ecosystem = candidate.kind.ecosystem;
            if self.options.exclude.contains(&ecosystem) {
                continue;
            }

            let file = self.relative(&candidate.path);
            self.progress.set_message(file.clone());

            match parse_candidate(&candidate) {
                Ok(pairs) => {
                    *outcome.manifests.entry(ecosystem).or_default() += 1;
                    outcome
                        .records
                        .extend(pairs.into_iter().map(|(package, version)| DependencyRecord {
                            ecosystem,
                            package,
                            version,
                            file: file.clone(),
                        }));
                }
                Err(err) => self.report(&mut outcome, err),
            }
        }

        outcome
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }

    fn report(&self, outcome: &mut ScanOutcome, err: ScanError) {
        self.progress.suspend(|| terminal::print_issue(&err));
        outcome.issues.push(err);
    }
}

/// Read and parse one manifest. The file handle is closed before parsing.
fn parse_candidate(candidate: &Candidate) -> Result<Vec<Pair>, ScanError> {
    let bytes = std::fs::read(&candidate.path).map_err(|source| ScanError::Read {
        path: candidate.path.clone(),
        source,
    })?;
    let content = normalize_newlines(decode(bytes));

    candidate
        .kind
        .extract(&content)
        .map_err(|err| ScanError::from_parse(candidate.path.clone(), err))
}

/// UTF-8, falling back to Latin-1 (every byte maps to the code point of the
/// same value, so this cannot fail).
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Treat `\r\n` and a lone `\r` as line breaks, as text-mode readers do.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
