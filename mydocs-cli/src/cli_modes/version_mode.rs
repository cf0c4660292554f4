use crate::render::Renderer;

const COPYRIGHT_YEAR: u16 = 2025;

pub fn version_mode(renderer: &Renderer) {
    renderer.print_md(&version_banner());
}

/// Markdown for `mydocs version`.
pub fn version_banner() -> String {
    format!(
        "# 📝 mydocs `v{version}`\n\n\
         ## Author & License:\n\n\
         Copyright (c) {COPYRIGHT_YEAR} {authors}\n\
         Licensed under the {license} License\n\n\
         *{description}*\n",
        version = env!("CARGO_PKG_VERSION"),
        authors = env!("CARGO_PKG_AUTHORS"),
        license = env!("CARGO_PKG_LICENSE"),
        description = env!("CARGO_PKG_DESCRIPTION"),
    )
}
