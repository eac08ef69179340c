pub mod bootstrap;
pub mod config;
pub mod driver;
pub mod paths;
pub mod scaffold;
pub mod structure;
pub mod templates;

// Re-export commonly used types
pub use config::{Config, Settings, TemplateSource};
pub use scaffold::Scaffold;
pub use structure::Node;
