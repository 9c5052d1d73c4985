use anyhow::Result;
use std::path::Path;

use crate::open_storage;

pub(crate) fn countries(db_path: &Path) -> Result<()> {
    let storage = open_storage(db_path)?;
    for country in storage.distinct_countries()? {
        println!("{country}");
    }
    Ok(())
}

pub(crate) fn winners(db_path: &Path) -> Result<()> {
    let storage = open_storage(db_path)?;
    let winners = storage.list_winners()?;
    println!("{}", serde_json::to_string_pretty(&winners)?);
    Ok(())
}
