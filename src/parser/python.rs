use anyhow::Result;
use regex::Regex;

use super::Pair;

/// Parse `requirements.txt` — `name` optionally followed by a specifier.
///
/// The specifier (operator included) is kept verbatim; a bare name gets `*`.
/// Lines that are not a plain name/specifier (options, URLs, extras) are
/// skipped.
pub fn parse_requirements(content: &str) -> Result<Vec<Pair>> {
    let re = Regex::new(r"^([a-zA-Z0-9\-_]+)\s*([>=<~!]+.*)?$")?;
    let mut deps = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(caps) = re.captures(line) {
            let version = caps.get(2).map_or("*", |m| m.as_str());
            deps.push((caps[1].to_string(), version.to_string()));
        }
    }

    Ok(deps)
}

/// Parse `Pipfile` — `name = "version"` lines in the `[packages]` table.
pub fn parse_pipfile(content: &str) -> Result<Vec<Pair>> {
    let mut deps = Vec::new();
    let mut in_packages = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("[packages]") {
            in_packages = true;
            continue;
        }
        if trimmed.starts_with('[') {
            in_packages = false;
        }
        if !in_packages {
            continue;
        }
        if let Some((name, version)) = line.split_once('=') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let version = version.trim().trim_matches(|c| c == '"' || c == '\'');
            deps.push((name.to_string(), version.to_string()));
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
    fn test_parse_requirements() {
        let content = "requests>=2.25.1\nflask==1.1.2\nnumpy\n# comment\ndjango>=3.0";
        let deps = parse_requirements(content).unwrap();
        assert_eq!(
            deps,
            vec![
                pair("requests", ">=2.25.1"),
                pair("flask", "==1.1.2"),
                pair("numpy", "*"),
                pair("django", ">=3.0"),
            ]
        );
    }

    #[test]
    fn test_requirements_indented_and_operators() {
        let content = r#"
        django~=3.0
        six != 1.0
        -r other.txt
        git+https://github.com/psf/requests.git
        urllib3<2
        "#;
        let deps = parse_requirements(content).unwrap();
        assert_eq!(
            deps,
            vec![pair("django", "~=3.0"), pair("six", "!= 1.0"), pair("urllib3", "<2")]
        );
    }

    #[test]
    fn test_parse_pipfile() {
        let content = r#"
[[source]]
url = "https://pypi.org/simple"
verify_ssl = true

[packages]
requests = "*"
flask = '==2.0.1'
django = {version = ">=3.0"}

[dev-packages]
pytest = "*"
"#;
        let deps = parse_pipfile(content).unwrap();
        assert_eq!(
            deps,
            vec![
                pair("requests", "*"),
                pair("flask", "==2.0.1"),
                pair("django", r#"{version = ">=3.0"}"#),
            ]
        );
    }
}
