use anyhow::Result;
use regex::Regex;

use super::Pair;

/// Parse `Gemfile` — every `gem 'name'` / `gem 'name', 'version'` call.
///
/// Matches across the whole text rather than per line; quotes may be single
/// or double and mixed. Only the first version argument is taken.
pub fn parse_gemfile(content: &str) -> Result<Vec<Pair>> {
    let re = Regex::new(r#"gem\s+['"]([^'"]+)['"](?:,\s*['"]([^'"]+)['"])?"#)?;

    let deps = re
        .captures_iter(content)
        .map(|caps| {
            let version = caps.get(2).map_or("*", |m| m.as_str());
            (caps[1].to_string(), version.to_string())
        })
        .collect();

    Ok(deps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, version: &str) -> Pair {
        (name.to_string(), version.to_string())
    }

    #[test]
    fn test_parse_gemfile() {
        let content = "gem 'rails', '6.1.0'\ngem 'pg'\ngem \"redis\", \"4.2.5\"";
        let deps = parse_gemfile(content).unwrap();
        assert_eq!(
            deps,
            vec![pair("rails", "6.1.0"), pair("pg", "*"), pair("redis", "4.2.5")]
        );
    }

    #[test]
    fn test_gemfile_with_groups_and_options() {
        let content = r#"
source 'https://rubygems.org'

gem 'puma', "~> 5.0"
group :development, :test do
  gem 'rspec-rails', require: false
end
"#;
        let deps = parse_gemfile(content).unwrap();
        assert_eq!(deps, vec![pair("puma", "~> 5.0"), pair("rspec-rails", "*")]);
    }
}
