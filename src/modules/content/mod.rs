pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::ContentService;
pub use domain::entities::content::Content;
pub use domain::entities::content_block::ContentBlock;
pub use domain::repositories::content_repository::ContentRepository;
