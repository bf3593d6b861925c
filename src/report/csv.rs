use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::DependencyRecord;

/// Write `records` to `path`, header first, with standard CSV quoting.
pub fn write_file(records: &[DependencyRecord], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_to(file, records).with_context(|| format!("cannot write {}", path.display()))
}

/// Serialize `records` as CSV into any writer.
pub fn write_to<W: Write>(out: W, records: &[DependencyRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
