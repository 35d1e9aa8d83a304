pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::FeatureService;
pub use domain::entities::feature::Feature;
pub use domain::repositories::feature_repository::FeatureRepository;
