use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use thiserror::Error;

use crate::entity::comment;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not get the database connection")]
    Unavailable,
    #[error("comment {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Data access for the `comments` table.
///
/// Holds no handle when the database could not be reached at startup; every
/// operation then fails with [`StoreError::Unavailable`].
#[derive(Clone, Debug)]
pub struct CommentRepository {
    db: Option<DatabaseConnection>,
}

impl CommentRepository {
    pub fn new(db: Option<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn conn(&self) -> Result<&DatabaseConnection, StoreError> {
        self.db.as_ref().ok_or(StoreError::Unavailable)
    }

    pub async fn create(&self, text: String, user_id: i64) -> Result<comment::Model, StoreError> {
        let db = self.conn()?;
        let model = comment::ActiveModel {
            comment: Set(text),
            user_id: Set(user_id),
            ..Default::default()
        };
        Ok(model.insert(db).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<comment::Model>, StoreError> {
        let db = self.conn()?;
        Ok(comment::Entity::find().all(db).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<comment::Model, StoreError> {
        let db = self.conn()?;
        comment::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces both mutable fields of the row.
    pub async fn update(
        &self,
        id: i64,
        text: String,
        user_id: i64,
    ) -> Result<comment::Model, StoreError> {
        let db = self.conn()?;
        let model = comment::ActiveModel {
            id: Set(id),
            comment: Set(text),
            user_id: Set(user_id),
        };
        model.update(db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => StoreError::NotFound(id),
            e => StoreError::Db(e),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let db = self.conn()?;
        comment::Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
