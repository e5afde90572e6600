//! User repository for database operations.

use sea_orm::{prelude::DateTimeUtc, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::entities::user;

/// Repository for user-related database operations.
pub struct UserRepository;

impl UserRepository {
    /// Insert a user whose password has already been hashed, returning the new id.
    pub async fn create<C>(conn: &C, username: &str, password_hash: String, now: DateTimeUtc) -> Result<i32, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = user::Entity::insert(model).exec(conn).await?;
        Ok(result.last_insert_id)
    }

    /// Get a single user by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<user::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        user::Entity::find_by_id(id).one(conn).await
    }

    /// Get a single user by username.
    pub async fn get_by_username<C>(conn: &C, username: &str) -> Result<Option<user::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(conn)
            .await
    }
}
