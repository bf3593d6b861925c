//! Manifest dispatch and per-format extraction.
//!
//! Every parser is a heuristic line/regex scan over the whole file text, not a
//! conformant reader for the underlying format. Lockfiles are recognised but
//! deliberately yield nothing; their non-lock counterpart carries the
//! declared dependencies.

use anyhow::Result;
use regex::Regex;

use crate::error::InvalidManifest;
use crate::models::Ecosystem;

pub mod go;
pub mod java;
pub mod node;
pub mod php;
pub mod python;
pub mod ruby;
pub mod rust;

/// A `(package, version)` pair as emitted by a parser.
pub type Pair = (String, String);

/// Signature shared by all format parsers.
pub type ParseFn = fn(&str) -> Result<Vec<Pair>>;

/// A recognised manifest file name and how to read it.
pub struct ManifestKind {
    pub file_name: &'static str,
    pub ecosystem: Ecosystem,
    pub parse: ParseFn,
}

/// Exact-match table of every manifest name the scanner understands.
pub static MANIFESTS: &[ManifestKind] = &[
    ManifestKind {
        file_name: "package.json",
        ecosystem: Ecosystem::Npm,
        parse: node::parse_package_json,
    },
    ManifestKind {
        file_name: "package-lock.json",
        ecosystem: Ecosystem::Npm,
        parse: skip_lockfile,
    },
    ManifestKind {
        file_name: "requirements.txt",
        ecosystem: Ecosystem::Pip,
        parse: python::parse_requirements,
    },
    ManifestKind {
        file_name: "Pipfile",
        ecosystem: Ecosystem::Pip,
        parse: python::parse_pipfile,
    },
    ManifestKind {
        file_name: "Pipfile.lock",
        ecosystem: Ecosystem::Pip,
        parse: skip_lockfile,
    },
    ManifestKind {
        file_name: "go.mod",
        ecosystem: Ecosystem::Go,
        parse: go::parse_go_mod,
    },
    ManifestKind {
        file_name: "go.sum",
        ecosystem: Ecosystem::Go,
        parse: skip_lockfile,
    },
    ManifestKind {
        file_name: "Gemfile",
        ecosystem: Ecosystem::Gem,
        parse: ruby::parse_gemfile,
    },
    ManifestKind {
        file_name: "Gemfile.lock",
        ecosystem: Ecosystem::Gem,
        parse: skip_lockfile,
    },
    ManifestKind {
        file_name: "Cargo.toml",
        ecosystem: Ecosystem::Cargo,
        parse: rust::parse_cargo,
    },
    ManifestKind {
        file_name: "Cargo.lock",
        ecosystem: Ecosystem::Cargo,
        parse: skip_lockfile,
    },
    ManifestKind {
        file_name: "pom.xml",
        ecosystem: Ecosystem::Maven,
        parse: java::parse_pom,
    },
    ManifestKind {
        file_name: "build.gradle",
        ecosystem: Ecosystem::Gradle,
        parse: java::parse_gradle,
    },
    ManifestKind {
        file_name: "composer.json",
        ecosystem: Ecosystem::Composer,
        parse: php::parse_composer,
    },
];

/// Look up a manifest by its base name. No globbing, no extension matching.
pub fn lookup(file_name: &str) -> Option<&'static ManifestKind> {
    MANIFESTS.iter().find(|m| m.file_name == file_name)
}

impl ManifestKind {
    /// Run this kind's parser over already-decoded file text.
    pub fn extract(&self, content: &str) -> Result<Vec<Pair>> {
        if content.contains('\0') {
            return Err(InvalidManifest::new("binary content").into());
        }
        (self.parse)(content)
    }
}

/// Lockfiles are redundant with the manifest next to them.
pub fn skip_lockfile(_content: &str) -> Result<Vec<Pair>> {
    Ok(Vec::new())
}

/// Pull `"name": "version"` pairs out of the first object following one of
/// `keys` in a JSON document, line by line.
///
/// The block starts on a line containing one of the quoted keys and ends at
/// the first line containing `}`. Nested objects are not tracked, so the
/// first nested `}` also ends the block.
pub(crate) fn json_block_pairs(content: &str, keys: &[&str]) -> Result<Vec<Pair>> {
    let re = Regex::new(r#""([^"]+)":\s*"([^"]+)""#)?;
    let mut pairs = Vec::new();
    let mut in_block = false;

    for line in content.lines() {
        if let Some(rest) = keys
            .iter()
            .find_map(|key| line.find(key).map(|idx| &line[idx + key.len()..]))
        {
            // Text after the key on the opening line, up to any closing brace.
            let (head, closed) = match rest.find('}') {
                Some(idx) => (&rest[..idx], true),
                None => (rest, false),
            };
            push_captures(&re, head, &mut pairs);
            in_block = !closed;
            continue;
        }

        if in_block {
            if line.contains('}') {
                in_block = false;
                continue;
            }
            push_captures(&re, line, &mut pairs);
        }
    }

    Ok(pairs)
}

fn push_captures(re: &Regex, text: &str, pairs: &mut Vec<Pair>) {
    for caps in re.captures_iter(text) {
        pairs.push((caps[1].to_string(), caps[2].to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("package.json").unwrap().ecosystem, Ecosystem::Npm);
        assert_eq!(lookup("build.gradle").unwrap().ecosystem, Ecosystem::Gradle);
        assert_eq!(lookup("composer.json").unwrap().ecosystem, Ecosystem::Composer);
        assert!(lookup("build.gradle.kts").is_none());
        assert!(lookup("Package.json").is_none());
        assert!(lookup("dev-requirements.txt").is_none());
        assert!(lookup("pyproject.toml").is_none());
    }

    #[test]
    fn test_table_covers_fourteen_names() {
        assert_eq!(MANIFESTS.len(), 14);
        for kind in MANIFESTS {
            assert!(std::ptr::eq(lookup(kind.file_name).unwrap(), kind));
        }
    }

    #[test]
    fn test_lockfiles_yield_nothing() {
        let content = r#"
[[package]]
name = "serde"
version = "1.0.150"
"#;
        for name in [
            "package-lock.json",
            "Pipfile.lock",
            "go.sum",
            "Gemfile.lock",
            "Cargo.lock",
        ] {
            let kind = lookup(name).unwrap();
            assert!(kind.extract(content).unwrap().is_empty(), "{name}");
        }
    }

    #[test]
    fn test_binary_content_is_rejected() {
        let kind = lookup("go.mod").unwrap();
        let err = kind.extract("module x\0y").unwrap_err();
        assert!(err.downcast_ref::<InvalidManifest>().is_some());
    }

    #[test]
    fn test_json_block_nested_object_closes_block() {
        let content = r#"{
  "dependencies": {
    "a": "1.0.0",
    "b": {
      "c": "2.0.0"
    },
    "d": "3.0.0"
  }
}"#;
        let pairs = json_block_pairs(content, &[r#""dependencies""#]).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1.0.0".to_string()),
                ("c".to_string(), "2.0.0".to_string()),
            ]
        );
    }
}
