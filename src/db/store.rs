//! Storage seam for the seeding procedure

use async_trait::async_trait;
use sqlx::{Connection, MySqlConnection};

use crate::{
    config::DatabaseConfig,
    db::repositories::{ProblemRepository, UserRepository},
    error::AppResult,
    models::{NewProblem, NewTestCase, Organizer},
};

/// Everything the seeder needs from the database
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedStore: Send {
    /// Look up the organizer account by email
    async fn find_organizer(&mut self, email: &str) -> AppResult<Option<Organizer>>;

    /// Whether a problem with this title already exists
    async fn problem_exists(&mut self, title: &str) -> AppResult<bool>;

    /// Insert a problem together with all of its test cases
    async fn insert_problem(
        &mut self,
        problem: &NewProblem,
        test_cases: &[NewTestCase],
    ) -> AppResult<()>;
}

/// [`SeedStore`] backed by a single MySQL connection
pub struct MySqlStore {
    conn: MySqlConnection,
}

impl MySqlStore {
    /// Connect and verify the connection is usable
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut conn = super::connect(config).await?;
        super::test_connection(&mut conn).await?;

        Ok(Self { conn })
    }

    /// Close the connection gracefully
    pub async fn close(self) -> AppResult<()> {
        self.conn.close().await?;
        Ok(())
    }
}

#[async_trait]
impl SeedStore for MySqlStore {
    async fn find_organizer(&mut self, email: &str) -> AppResult<Option<Organizer>> {
        UserRepository::find_organizer_by_email(&mut self.conn, email).await
    }

    async fn problem_exists(&mut self, title: &str) -> AppResult<bool> {
        let id = ProblemRepository::find_id_by_title(&mut self.conn, title).await?;
        Ok(id.is_some())
    }

    async fn insert_problem(
        &mut self,
        problem: &NewProblem,
        test_cases: &[NewTestCase],
    ) -> AppResult<()> {
        // A problem never lands without its test cases.
        let mut tx = self.conn.begin().await?;

        ProblemRepository::create(&mut tx, problem).await?;
        for test_case in test_cases {
            ProblemRepository::create_test_case(&mut tx, test_case).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
