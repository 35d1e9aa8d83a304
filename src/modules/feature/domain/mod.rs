pub mod entities;
pub mod repositories;

pub use entities::feature::Feature;
pub use repositories::feature_repository::FeatureRepository;
