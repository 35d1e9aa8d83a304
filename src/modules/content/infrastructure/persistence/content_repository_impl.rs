use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::content::domain::{
    entities::content::Content, repositories::ContentRepository,
};
use crate::modules::content::infrastructure::models::{
    ContentChangeset, ContentModel, NewContent,
};
use crate::schema::contents;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct ContentRepositoryImpl {
    db: Arc<Database>,
}

impl ContentRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Content>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<ContentModel>> {
            let mut conn = db.get_connection()?;
            let m = contents::table
                .filter(contents::id.eq(id))
                .first::<ContentModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(ContentModel::into_entity))
    }

    async fn save(&self, content: &Content) -> AppResult<Content> {
        let db = Arc::clone(&self.db);
        let new_row = NewContent::from(content);
        let changes = ContentChangeset::from(content);

        let saved = task::spawn_blocking(move || -> AppResult<ContentModel> {
            let mut conn = db.get_connection()?;

            let saved = diesel::insert_into(contents::table)
                .values(&new_row)
                .on_conflict(contents::id)
                .do_update()
                .set(&changes)
                .get_result::<ContentModel>(&mut conn)?;

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
            let n = diesel::delete(contents::table.filter(contents::id.eq(id)))
                .execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound("Content not found.".to_string()));
            }
            Ok(())
        })
        .await?
    }
}
