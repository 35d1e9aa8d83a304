use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::layer::domain::{entities::layer::Layer, repositories::LayerRepository};
use crate::modules::layer::infrastructure::models::{LayerChangeset, LayerModel, NewLayer};
use crate::schema::layers;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct LayerRepositoryImpl {
    db: Arc<Database>,
}

impl LayerRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LayerRepository for LayerRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Layer>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<LayerModel>> {
            let mut conn = db.get_connection()?;
            let m = layers::table
                .filter(layers::id.eq(id))
                .first::<LayerModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(LayerModel::into_entity))
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Layer>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<LayerModel>> {
            let mut conn = db.get_connection()?;
            let rows = layers::table
                .order(layers::created_at.desc())
                .offset(offset)
                .limit(limit)
                .load::<LayerModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(LayerModel::into_entity).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        let total = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let n = layers::table.count().get_result::<i64>(&mut conn)?;
            Ok(n)
        })
        .await??;

        Ok(total as u64)
    }

    async fn save(&self, layer: &Layer) -> AppResult<Layer> {
        let db = Arc::clone(&self.db);
        let new_row = NewLayer::from(layer);
        let changes = LayerChangeset::from(layer);

        let saved = task::spawn_blocking(move || -> AppResult<LayerModel> {
            let mut conn = db.get_connection()?;

            let saved = diesel::insert_into(layers::table)
                .values(&new_row)
                .on_conflict(layers::id)
                .do_update()
                .set(&changes)
                .get_result::<LayerModel>(&mut conn)?;

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
            let n = diesel::delete(layers::table.filter(layers::id.eq(id)))
                .execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound("Layer not found.".to_string()));
            }
            Ok(())
        })
        .await?
    }
}
