use anyhow::Result;
use regex::Regex;

use super::Pair;

/// Parse `go.mod` — every `path version` line, leading `v` dropped.
///
/// Not directive-aware: `module`, `go` and `require (` lines match the same
/// two-token shape and are emitted as well.
pub fn parse_go_mod(content: &str) -> Result<Vec<Pair>> {
    let re = Regex::new(r"^\s*(\S+)\s+v?(\S+)")?;
    let mut deps = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        if let Some(caps) = re.captures(line) {
            deps.push((caps[1].to_string(), caps[2].to_string()));
        }
    }

    Ok(deps)
}
