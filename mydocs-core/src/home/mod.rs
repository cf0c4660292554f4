mod home_file;
mod reconcile;

pub use home_file::{HomeFile, LINK_MARKER, parse_existing_links};
pub use reconcile::find_new_entries;
