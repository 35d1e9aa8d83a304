pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::LayerService;
pub use domain::entities::layer::Layer;
pub use domain::repositories::layer_repository::LayerRepository;
