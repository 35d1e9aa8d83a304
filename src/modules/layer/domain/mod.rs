pub mod entities;
pub mod repositories;

pub use entities::layer::Layer;
pub use repositories::layer_repository::LayerRepository;
