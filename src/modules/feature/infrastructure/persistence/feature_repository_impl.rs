use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::feature::domain::{
    entities::feature::Feature, repositories::FeatureRepository,
};
use crate::modules::feature::infrastructure::models::{
    FeatureChangeset, FeatureModel, NewFeature,
};
use crate::schema::features;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct FeatureRepositoryImpl {
    db: Arc<Database>,
}

impl FeatureRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeatureRepository for FeatureRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Feature>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<FeatureModel>> {
            let mut conn = db.get_connection()?;
            let m = features::table
                .filter(features::id.eq(id))
                .first::<FeatureModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(FeatureModel::into_entity))
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Feature>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<FeatureModel>> {
            let mut conn = db.get_connection()?;
            let rows = features::table
                .order(features::created_at.desc())
                .offset(offset)
                .limit(limit)
                .load::<FeatureModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(FeatureModel::into_entity).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        let total = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = features::table.count().get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(total as u64)
    }

    async fn save(&self, feature: &Feature) -> AppResult<Feature> {
        let db = Arc::clone(&self.db);
        let new_row = NewFeature::from(feature);
        let changes = FeatureChangeset::from(feature);

        let saved = task::spawn_blocking(move || -> AppResult<FeatureModel> {
            let mut conn = db.get_connection()?;

            let saved = diesel::insert_into(features::table)
                .values(&new_row)
                .on_conflict(features::id)
                .do_update()
                .set(&changes)
                .get_result::<FeatureModel>(&mut conn)?;

            Ok(saved)
        })
        .await??;

        Ok(saved.into_entity())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(features::table.filter(features::id.eq(id)))
                .execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound("Feature not found.".to_string()));
            }
            Ok(())
        })
        .await?
    }
}
