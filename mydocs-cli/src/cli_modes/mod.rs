mod create_mode;
mod publish_mode;
mod version_mode;

pub use create_mode::create_mode;
pub use publish_mode::publish_mode;
pub use version_mode::version_mode;
