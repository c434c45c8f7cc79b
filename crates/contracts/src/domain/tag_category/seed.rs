use anyhow::{bail, Context, Result};
use serde_json::Value;

use super::aggregate::TagCategory;

/// Decode seed data: either a sequence of records or a single record.
/// Anything else is an error for the caller to report; the store then starts
/// empty.
pub fn parse(value: &Value) -> Result<Vec<TagCategory>> {
    match value {
        Value::Array(_) => serde_json::from_value(value.clone())
            .context("invalid tag category in seed sequence"),
        Value::Object(_) => {
            let record: TagCategory = serde_json::from_value(value.clone())
                .context("invalid tag category record in seed")?;
            Ok(vec![record])
        }
        other => bail!("seed data is neither a sequence nor a record: {other}"),
    }
}

pub fn parse_str(raw: &str) -> Result<Vec<TagCategory>> {
    let value: Value = serde_json::from_str(raw).context("seed data is not valid JSON")?;
    parse(&value)
}
