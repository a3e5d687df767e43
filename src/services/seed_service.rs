//! Seed service
//!
//! Inserts every catalog problem that is not yet present (keyed by title),
//! crediting the organizer as creator.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    catalog::ProblemDefinition,
    db::SeedStore,
    error::{AppError, AppResult},
    models::{NewProblem, NewTestCase, Organizer},
};

/// Outcome of a seeding run
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub organizer: Organizer,
    /// Titles inserted during this run, in catalog order
    pub inserted: Vec<String>,
    /// Titles that already existed
    pub skipped: Vec<String>,
    pub test_cases_inserted: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SeedReport {
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// Seed service for the seeding procedure
pub struct SeedService;

impl SeedService {
    /// Seed `problems` into `store`.
    ///
    /// Fails with [`AppError::OrganizerNotFound`] before touching anything
    /// else if the organizer email does not resolve. The first error aborts
    /// the run.
    pub async fn run<S>(
        store: &mut S,
        problems: &[ProblemDefinition],
        organizer_email: &str,
    ) -> AppResult<SeedReport>
    where
        S: SeedStore + ?Sized,
    {
        let started_at = Utc::now();

        let organizer = store
            .find_organizer(organizer_email)
            .await?
            .ok_or_else(|| AppError::OrganizerNotFound(organizer_email.to_string()))?;

        tracing::info!(
            "Using organizer: {} ({})",
            organizer.username,
            organizer.email
        );

        let mut inserted = Vec::new();
        let mut skipped = Vec::new();
        let mut test_cases_inserted = 0;

        for definition in problems {
            if store.problem_exists(&definition.title).await? {
                tracing::info!("Problem already exists, skipping: {}", definition.title);
                skipped.push(definition.title.clone());
                continue;
            }

            let problem_id = Uuid::new_v4();
            let problem = NewProblem::from_definition(problem_id, definition, &organizer.id);
            let test_cases = NewTestCase::for_problem(definition, problem_id);

            store.insert_problem(&problem, &test_cases).await?;

            tracing::info!(
                problem_id = %problem_id,
                test_cases = test_cases.len(),
                "Inserted problem: {}",
                definition.title
            );

            test_cases_inserted += test_cases.len();
            inserted.push(definition.title.clone());
        }

        Ok(SeedReport {
            organizer,
            inserted,
            skipped,
            test_cases_inserted,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
