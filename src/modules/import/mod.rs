pub mod application;
pub mod handlers;

// Re-exports for easy access
pub use application::service::{FeatureImportItem, ImportService};
