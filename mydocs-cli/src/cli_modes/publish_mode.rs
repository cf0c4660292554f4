use crate::render::Renderer;
use anyhow::Result;
use mydocs_core::Journal;
use tracing::debug;

/// `mydocs publish`: links every unlisted entry from the home file.
pub fn publish_mode(renderer: &Renderer, journal: &Journal) -> Result<()> {
    let added = journal.publish_index(renderer)?;
    debug!(added, "publish mode finished");
    Ok(())
}
