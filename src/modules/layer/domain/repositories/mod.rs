pub mod layer_repository;

pub use layer_repository::LayerRepository;
