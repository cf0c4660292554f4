pub mod config;
pub mod error;
pub mod home;
pub mod journal;
pub mod notify;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::JournalError;
pub use journal::{EntryRef, Journal, JournalEntry};
pub use notify::{Notifier, SilentNotifier};
