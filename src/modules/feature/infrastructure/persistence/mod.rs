pub mod feature_repository_impl;

pub use feature_repository_impl::FeatureRepositoryImpl;
