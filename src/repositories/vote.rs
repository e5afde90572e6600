//! Vote repository for database operations.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::entities::vote;

/// Repository for vote-related database operations.
pub struct VoteRepository;

impl VoteRepository {
    /// Insert a vote, or overwrite the direction of the existing vote for the
    /// same (post, user) pair.
    pub async fn upsert<C>(conn: &C, post_id: i32, user_id: i32, vote_direction: i32) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let model = vote::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            vote_direction: ActiveValue::Set(vote_direction),
        };

        vote::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([vote::Column::PostId, vote::Column::UserId])
                    .update_column(vote::Column::VoteDirection)
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;

        Ok(())
    }

    /// Get the vote a user cast on a post, if any.
    pub async fn get<C>(conn: &C, post_id: i32, user_id: i32) -> Result<Option<vote::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        vote::Entity::find_by_id((post_id, user_id)).one(conn).await
    }

    /// Count the vote rows recorded for a post.
    pub async fn count_for_post<C>(conn: &C, post_id: i32) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        vote::Entity::find()
            .filter(vote::Column::PostId.eq(post_id))
            .count(conn)
            .await
    }
}
