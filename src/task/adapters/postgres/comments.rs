//! `PostgreSQL` repository implementation for task comments.

use super::{
    models::{CommentRow, NewCommentRow},
    schema::task_comments,
};
use crate::email::EmailAddress;
use crate::persistence::{PgPool, run_blocking};
use crate::task::{
    domain::{CommentContent, CommentId, PersistedCommentData, TaskComment, TaskId},
    ports::{CommentRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed comment repository.
#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn store(&self, comment: &TaskComment) -> TaskRepositoryResult<()> {
        let comment_id = comment.id();
        let task_id = comment.task_id();
        let new_row = to_new_row(comment);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(task_comments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateComment(comment_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TaskRepositoryError::NotFound(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_by_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskComment>> {
        run_blocking(&self.pool, move |connection| {
            task_comments::table
                .filter(task_comments::task_id.eq(task_id.into_inner()))
                .order((task_comments::created_at.asc(), task_comments::id.asc()))
                .select(CommentRow::as_select())
                .load::<CommentRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_comment)
                .collect()
        })
        .await
    }
}

fn to_new_row(comment: &TaskComment) -> NewCommentRow {
    NewCommentRow {
        id: comment.id().into_inner(),
        task_id: comment.task_id().into_inner(),
        content: comment.content().as_str().to_owned(),
        author_email: comment.author_email().as_str().to_owned(),
        created_at: comment.created_at(),
    }
}

fn row_to_comment(row: CommentRow) -> TaskRepositoryResult<TaskComment> {
    let data = PersistedCommentData {
        id: CommentId::from_uuid(row.id),
        task_id: TaskId::from_uuid(row.task_id),
        content: CommentContent::new(row.content).map_err(TaskRepositoryError::persistence)?,
        author_email: EmailAddress::new(row.author_email)
            .map_err(TaskRepositoryError::persistence)?,
        created_at: row.created_at,
    };
    Ok(TaskComment::from_persisted(data))
}
