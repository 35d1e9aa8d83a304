pub mod content_repository_impl;

pub use content_repository_impl::ContentRepositoryImpl;
