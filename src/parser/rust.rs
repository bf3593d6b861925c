use anyhow::Result;
use regex::Regex;

use super::Pair;

/// Parse `Cargo.toml` — `name = "version"` lines under `[dependencies]`.
///
/// Table-form specs (`serde = { version = "1", ... }`) and the other
/// dependency tables (`[dev-dependencies]`, `[target.*.dependencies]`) are
/// not read.
pub fn parse_cargo(content: &str) -> Result<Vec<Pair>> {
    let re = Regex::new(r#"^([a-zA-Z0-9\-_]+)\s*=\s*"([^"]+)""#)?;
    let mut deps = Vec::new();
    let mut in_deps = false;

    for line in content.lines() {
        if line.contains("[dependencies]") {
            in_deps = true;
            continue;
        }
        let line = line.trim();
        if line.starts_with('[') {
            in_deps = false;
        }
        if in_deps {
            if let Some(caps) = re.captures(line) {
                deps.push((caps[1].to_string(), caps[2].to_string()));
            }
        }
    }

    Ok(deps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, version: &str) -> Pair {
        (name.to_string(), version.to_string())
    }

    #[test]
    fn test_parse_cargo_toml() {
        let content = r#"
        [package]
        name = "myapp"
        version = "0.1.0"

        [dependencies]
        serde = "1.0"
        tokio = "1.17"
        "#;
        let deps = parse_cargo(content).unwrap();
        assert_eq!(deps, vec![pair("serde", "1.0"), pair("tokio", "1.17")]);
    }

    #[test]
    fn test_table_specs_and_later_sections_are_skipped() {
        let content = r#"[dependencies]
anyhow = "1"
clap = { version = "4", features = ["derive"] }
regex    =   "1.10"

[dev-dependencies]
tempfile = "3"
"#;
        let deps = parse_cargo(content).unwrap();
        assert_eq!(deps, vec![pair("anyhow", "1"), pair("regex", "1.10")]);
    }
}
