use crate::conf::load_config;
use std::io::Write;
use std::path::Path;

pub fn dump<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let cfg = load_config(path)?;
    let s = serde_json::to_string_pretty(&cfg)?;
    writeln!(out, "{s}")?;
    Ok(())
}
