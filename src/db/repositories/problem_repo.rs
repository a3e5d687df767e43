//! Problem repository

use sqlx::MySqlConnection;

use crate::{
    error::AppResult,
    models::{NewProblem, NewTestCase},
};

/// Repository for problem and test case database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Find a problem id by its title
    pub async fn find_id_by_title(
        conn: &mut MySqlConnection,
        title: &str,
    ) -> AppResult<Option<String>> {
        let id = sqlx::query_scalar::<_, String>(
            r#"SELECT id FROM problems WHERE title = ? LIMIT 1"#,
        )
        .bind(title)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(id)
    }

    /// Insert a problem row
    pub async fn create(conn: &mut MySqlConnection, problem: &NewProblem) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO problems (
                id, title, description, difficulty, constraints,
                inputFormat, outputFormat, additionalInfo, accessType, createdById
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(problem.id.to_string())
        .bind(&problem.title)
        .bind(&problem.description)
        .bind(problem.difficulty.as_str())
        .bind(&problem.constraints)
        .bind(&problem.input_format)
        .bind(&problem.output_format)
        .bind(problem.additional_info.as_deref())
        .bind(problem.access_type.as_str())
        .bind(&problem.created_by_id)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Insert a test case row
    pub async fn create_test_case(
        conn: &mut MySqlConnection,
        test_case: &NewTestCase,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO testcases (id, input, expectedOutput, isHidden, problemId)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(test_case.id.to_string())
        .bind(&test_case.input)
        .bind(&test_case.expected_output)
        .bind(test_case.is_hidden)
        .bind(test_case.problem_id.to_string())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}
