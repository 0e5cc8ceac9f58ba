// Core data types for widget configuration and services

pub mod options;
pub mod service;

// Re-export commonly used types
pub use options::{Options, OptionsOverride, Orientation, Theme, UrlSource};
pub use service::{Localized, Service};
