/// Task model and database operations
///
/// This module provides the Task model. Each task is optionally assigned to
/// one user via the nullable `assigned_to` column.
///
/// # Assignment states
///
/// ```text
/// unassigned → assigned(u)   via assign(t, u)
/// assigned(u) → assigned(u') via assign(t, u')   (overwrite, no unassign needed)
/// assigned(u) → unassigned   via unassign(t)
/// unassigned → unassigned    via unassign(t)     (no-op)
/// ```
///
/// Tasks are created unassigned. Deleting a task is never blocked by its
/// assignment state; nothing references a task.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     title TEXT NOT NULL,
///     assigned_to BIGINT REFERENCES users (id)
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{Task, CreateTask};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     title: "Complete project".to_string(),
/// }).await?;
/// assert!(task.assigned_to.is_none());
///
/// // Assign it to user 1
/// let task = Task::assign(&pool, task.id, 1).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task model
///
/// `assigned_to` is serialized as `null` when the task is unassigned; API
/// clients rely on the field always being present.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the database
    pub id: i64,

    /// Task title (non-empty, validated at the API boundary)
    pub title: String,

    /// ID of the user this task is assigned to, if any
    pub assigned_to: Option<i64>,
}

/// Input for creating a new task
///
/// Tasks always start unassigned; there is no way to create one with an
/// assignment in the same statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title
    pub title: String,
}

impl Task {
    /// True when the task is assigned to some user
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    /// Creates a new task in the database
    ///
    /// The new task starts unassigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title)
            VALUES ($1)
            RETURNING id, title, assigned_to
            "#,
        )
        .bind(data.title)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    ///
    /// Returns the task if found, None otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, assigned_to
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, assigned_to
            FROM tasks
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Deletes a task by ID
    ///
    /// Returns true if a row was deleted, false if the task didn't exist.
    /// Never blocked by assignment state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Assigns a task to a user, overwriting any prior assignment
    ///
    /// Returns the updated task, or None if the task doesn't exist. The
    /// caller is expected to have checked the user exists; if the user
    /// vanishes between that check and this update, the foreign-key
    /// constraint rejects the write.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error::Database` with a foreign-key violation if
    /// `user_id` doesn't reference an existing user
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use taskboard_shared::models::task::Task;
    /// # use sqlx::PgPool;
    /// # async fn example(pool: PgPool, task_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
    /// if let Some(task) = Task::assign(&pool, task_id, user_id).await? {
    ///     assert_eq!(task.assigned_to, Some(user_id));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn assign(
        pool: &PgPool,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET assigned_to = $2
            WHERE id = $1
            RETURNING id, title, assigned_to
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Clears a task's assignment
    ///
    /// Returns the updated task, or None if the task doesn't exist.
    /// A no-op when the task is already unassigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn unassign(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET assigned_to = NULL
            WHERE id = $1
            RETURNING id, title, assigned_to
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_struct() {
        let create_task = CreateTask {
            title: "Test Task".to_string(),
        };

        assert_eq!(create_task.title, "Test Task");
    }

    #[test]
    fn test_is_assigned() {
        let mut task = Task {
            id: 1,
            title: "Test Task".to_string(),
            assigned_to: None,
        };
        assert!(!task.is_assigned());

        task.assigned_to = Some(42);
        assert!(task.is_assigned());
    }

    #[test]
    fn test_assigned_to_serializes_as_null_when_unassigned() {
        let task = Task {
            id: 1,
            title: "Test Task".to_string(),
            assigned_to: None,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert!(json.as_object().unwrap().contains_key("assigned_to"));
        assert!(json["assigned_to"].is_null());
    }

    // Integration tests for database operations are in tests/model_tests.rs
}
