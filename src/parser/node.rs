use anyhow::Result;

use super::{json_block_pairs, Pair};

/// Parse `package.json` — pairs inside `dependencies` and `devDependencies`.
pub fn parse_package_json(content: &str) -> Result<Vec<Pair>> {
    json_block_pairs(content, &[r#""dependencies""#, r#""devDependencies""#])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, version: &str) -> Pair {
        (name.to_string(), version.to_string())
    }

    #[test]
    fn test_parse_package_json() {
        let json = r#"{
  "name": "my-app",
  "version": "1.0.0",
  "dependencies": {
    "express": "^4.17.1",
    "lodash": "^4.17.21"
  },
  "scripts": {
    "test": "jest"
  }
}"#;
        let deps = parse_package_json(json).unwrap();
        assert_eq!(
            deps,
            vec![pair("express", "^4.17.1"), pair("lodash", "^4.17.21")]
        );
    }

    #[test]
    fn test_dev_dependencies_are_included() {
        let json = r#"{
  "dependencies": {
    "react": "18.2.0"
  },
  "devDependencies": {
    "jest": "^29.0.0",
    "@types/node": "~20.1.0"
  }
}"#;
        let deps = parse_package_json(json).unwrap();
        assert_eq!(
            deps,
            vec![
                pair("react", "18.2.0"),
                pair("jest", "^29.0.0"),
                pair("@types/node", "~20.1.0"),
            ]
        );
    }

    #[test]
    fn test_single_line_document() {
        let deps = parse_package_json(r#"{"dependencies": {"valid": "1.0.0"}}"#).unwrap();
        assert_eq!(deps, vec![pair("valid", "1.0.0")]);
    }

    #[test]
    fn test_peer_dependencies_are_ignored() {
        let json = r#"{
  "peerDependencies": {
    "react": ">=16"
  }
}"#;
        assert!(parse_package_json(json).unwrap().is_empty());
    }
}
