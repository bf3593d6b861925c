use anyhow::Result;
use regex::Regex;

use super::Pair;

/// Parse `pom.xml` by pairing element values positionally.
///
/// All `<artifactId>`, `<groupId>` and `<version>` values are collected in
/// document order and zipped by index, up to the shorter of the artifact and
/// version lists. A missing group becomes `unknown`. The project's own
/// coordinates and any parent/plugin entries take part in the pairing, so
/// documents that are not one uniform triple per entry will mismatch.
pub fn parse_pom(content: &str) -> Result<Vec<Pair>> {
    let artifact_re = Regex::new(r"<artifactId>([^<]+)</artifactId>")?;
    let group_re = Regex::new(r"<groupId>([^<]+)</groupId>")?;
    let version_re = Regex::new(r"<version>([^<]+)</version>")?;

    let collect = |re: &Regex| -> Vec<String> {
        re.captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect()
    };
    let artifacts = collect(&artifact_re);
    let groups = collect(&group_re);
    let versions = collect(&version_re);

    let deps = artifacts
        .iter()
        .zip(&versions)
        .enumerate()
        .map(|(i, (artifact, version))| {
            let group = groups.get(i).map_or("unknown", String::as_str);
            (format!("{group}:{artifact}"), version.clone())
        })
        .collect();

    Ok(deps)
}

/// Parse `build.gradle` — `implementation 'group:artifact:version'` strings.
///
/// Coordinates with fewer than three colon-separated parts are skipped; any
/// classifier after the version is dropped. Other configurations
/// (`api`, `testImplementation`, ...) are not read.
pub fn parse_gradle(content: &str) -> Result<Vec<Pair>> {
    let re = Regex::new(r#"implementation\s+['"]([^'"]+)['"]"#)?;
    let mut deps = Vec::new();

    for caps in re.captures_iter(content) {
        let parts: Vec<&str> = caps[1].split(':').collect();
        if parts.len() >= 3 {
            deps.push((format!("{}:{}", parts[0], parts[1]), parts[2].to_string()));
        }
    }

    Ok(deps)
}
