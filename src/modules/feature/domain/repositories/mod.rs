pub mod feature_repository;

pub use feature_repository::FeatureRepository;
