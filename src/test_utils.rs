//! Test utilities: an in-memory [`SeedStore`]

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::SeedStore,
    error::{AppError, AppResult},
    models::{AccessType, Difficulty, NewProblem, NewTestCase, Organizer},
};

/// Build an organizer account for `email`
pub fn organizer(email: &str) -> Organizer {
    Organizer {
        id: Uuid::new_v4().to_string(),
        username: "organizer".to_string(),
        email: email.to_string(),
    }
}

/// Stores rows in vectors, mirroring the `users`, `problems` and `testcases` tables
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub users: Vec<Organizer>,
    pub problems: Vec<NewProblem>,
    pub test_cases: Vec<NewTestCase>,
    fail_on_title: Option<String>,
}

impl MemoryStore {
    pub fn with_user(user: Organizer) -> Self {
        Self {
            users: vec![user],
            ..Self::default()
        }
    }

    /// Insert a problem row as if an earlier run had created it
    pub fn preload_problem(&mut self, title: &str) {
        self.problems.push(NewProblem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "Seeded earlier".to_string(),
            difficulty: Difficulty::Medium,
            constraints: String::new(),
            input_format: String::new(),
            output_format: String::new(),
            additional_info: None,
            access_type: AccessType::Private,
            created_by_id: "earlier".to_string(),
        });
    }

    /// Make inserting the problem with this title fail like a database error
    pub fn fail_on_insert(&mut self, title: &str) {
        self.fail_on_title = Some(title.to_string());
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn find_organizer(&mut self, email: &str) -> AppResult<Option<Organizer>> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn problem_exists(&mut self, title: &str) -> AppResult<bool> {
        Ok(self.problems.iter().any(|p| p.title == title))
    }

    async fn insert_problem(
        &mut self,
        problem: &NewProblem,
        test_cases: &[NewTestCase],
    ) -> AppResult<()> {
        if self.fail_on_title.as_deref() == Some(problem.title.as_str()) {
            return Err(AppError::Database("connection reset".to_string()));
        }

        self.problems.push(problem.clone());
        self.test_cases.extend_from_slice(test_cases);
        Ok(())
    }
}
