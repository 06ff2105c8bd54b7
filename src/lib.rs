pub mod error;
pub mod manifest;
pub mod paths;
pub mod platform;
pub mod plugins;
pub mod project;
pub mod scanner;
pub mod settings;

// Re-export commonly used types
pub use manifest::Manifest;
pub use project::Project;
pub use settings::Settings;
