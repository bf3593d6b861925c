use anyhow::Result;

use super::{json_block_pairs, Pair};

/// Parse `composer.json` — pairs inside the `require` object.
///
/// `require-dev` is not read.
pub fn parse_composer(content: &str) -> Result<Vec<Pair>> {
    json_block_pairs(content, &[r#""require""#])
}
