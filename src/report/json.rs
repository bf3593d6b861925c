use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::DependencyRecord;

/// Write `records` to `path` as a pretty-printed JSON array.
pub fn write_file(records: &[DependencyRecord], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, records)?;
    writeln!(out)?;
    out.flush()
        .with_context(|| format!("cannot write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ecosystem;

    #[test]
    fn test_write_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("deps.json");
        let records = vec![DependencyRecord {
            ecosystem: Ecosystem::Composer,
            package: "monolog/monolog".into(),
            version: "^3.0".into(),
            file: "composer.json".into(),
        }];
        write_file(&records, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["ecosystem"], "composer");
        assert_eq!(value[0]["package"], "monolog/monolog");
        assert_eq!(value[0]["version"], "^3.0");
        assert_eq!(value[0]["file"], "composer.json");
    }
}
