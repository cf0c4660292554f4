use crate::render::Renderer;
use anyhow::Result;
use mydocs_core::Journal;
use tracing::debug;

/// `mydocs create [DATE]`: writes a new day file, the renderer reports the path.
pub fn create_mode(date: Option<&str>, renderer: &Renderer, journal: &Journal) -> Result<()> {
    let entry = journal.create_entry(date, renderer)?;
    debug!(date = %entry.date, "create mode finished");
    Ok(())
}
