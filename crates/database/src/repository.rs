use crate::DbError;
use async_trait::async_trait;
use core_types::{NewNote, Note, NotePage};
use sqlx::postgres::PgPool;

/// Data access for notes, as seen by the HTTP layer.
///
/// Each call is one unit of work: implementations acquire whatever handle
/// they need, use it for a single statement and release it before returning,
/// on the error path as well.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Issues a trivial query to confirm storage is reachable.
    async fn ping(&self) -> Result<(), DbError>;

    /// Inserts a note and returns it with its generated id.
    async fn create_note(&self, note: &NewNote) -> Result<Note, DbError>;

    /// Returns a window of notes in insertion order.
    async fn list_notes(&self, page: NotePage) -> Result<Vec<Note>, DbError>;

    async fn find_note(&self, note_id: i32) -> Result<Option<Note>, DbError>;
}

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for DbRepository {
    async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_optional(&mut *conn)
            .await?
            .map(|_| ())
            .ok_or(DbError::ProbeFailed)
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note, DbError> {
        // Dropping `tx` without committing rolls back and returns the
        // connection to the pool.
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (name, description, done)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, done
            "#,
        )
        .bind(&note.name)
        .bind(&note.description)
        .bind(note.done)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(note_id = created.id, "Note created.");
        Ok(created)
    }

    async fn list_notes(&self, page: NotePage) -> Result<Vec<Note>, DbError> {
        let mut tx = self.pool.begin().await?;

        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, name, description, done
            FROM notes
            ORDER BY id ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(notes)
    }

    async fn find_note(&self, note_id: i32) -> Result<Option<Note>, DbError> {
        let mut tx = self.pool.begin().await?;

        let note = sqlx::query_as::<_, Note>(
            "SELECT id, name, description, done FROM notes WHERE id = $1",
        )
        .bind(note_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(note)
    }
}
