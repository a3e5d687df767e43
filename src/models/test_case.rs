//! Test case model

use uuid::Uuid;

use crate::catalog::ProblemDefinition;

/// A test case row ready to be inserted into `testcases`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestCase {
    pub id: Uuid,
    pub input: String,
    pub expected_output: String,
    pub is_hidden: bool,
    pub problem_id: Uuid,
}

impl NewTestCase {
    /// Expand a catalog entry's tests into rows owned by `problem_id`.
    ///
    /// Visible tests come first and are flagged unhidden, followed by the
    /// hidden tests. Every row gets a fresh id.
    pub fn for_problem(definition: &ProblemDefinition, problem_id: Uuid) -> Vec<Self> {
        let visible = definition.visible_tests.iter().map(|t| (t, false));
        let hidden = definition.hidden_tests.iter().map(|t| (t, true));

        visible
            .chain(hidden)
            .map(|(test, is_hidden)| Self {
                id: Uuid::new_v4(),
                input: test.input.clone(),
                expected_output: test.expected_output.clone(),
                is_hidden,
                problem_id,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_visible_rows_precede_hidden_rows() {
        let problems = catalog::embedded().unwrap();
        let problem_id = Uuid::new_v4();
        let rows = NewTestCase::for_problem(&problems[0], problem_id);

        let flags: Vec<bool> = rows.iter().map(|r| r.is_hidden).collect();
        assert_eq!(flags[..2], [false, false]);
        assert!(flags[2..].iter().all(|hidden| *hidden));
        assert!(rows.iter().all(|r| r.problem_id == problem_id));
        assert_eq!(rows[0].input, "8\n10 9 2 5 3 7 101 18\n");
    }
}
