pub mod layer_repository_impl;

pub use layer_repository_impl::LayerRepositoryImpl;
