//! Assertion types and builders for verifying step results.

use scribe_mutation::CascadeReport;
use scribe_session::{OperationOutput, SessionResult};

use crate::error::{ScenarioError, ScenarioResult};

/// A complete assertion for a step result.
#[derive(Default)]
pub struct Assertion {
    // Result shape
    pub returned: Option<usize>,
    pub ids: Option<Vec<String>>,
    pub contains: Vec<String>,
    pub excludes: Vec<String>,

    // Delete cascades
    pub cascaded_posts: Option<Vec<String>>,
    pub cascaded_comments: Option<Vec<String>>,

    // Error assertions
    pub error_kind: Option<String>,
    pub error: Option<String>,

    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&OperationOutput) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("returned", &self.returned)
            .field("ids", &self.ids)
            .field("contains", &self.contains)
            .field("excludes", &self.excludes)
            .field("cascaded_posts", &self.cascaded_posts)
            .field("cascaded_comments", &self.cascaded_comments)
            .field("error_kind", &self.error_kind)
            .field("error", &self.error)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    fn expects_error(&self) -> bool {
        self.error_kind.is_some() || self.error.is_some()
    }

    /// Verify the assertion against a result.
    pub fn verify(&self, step: &str, result: &SessionResult<OperationOutput>) -> ScenarioResult<()> {
        if self.expects_error() {
            let err = match result {
                Err(err) => err,
                Ok(output) => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected an error, but step returned {:?}", output),
                    ))
                }
            };
            if let Some(ref kind) = self.error_kind {
                if err.kind() != kind {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected {} error, got {}: {}", kind, err.kind(), err),
                    ));
                }
            }
            if let Some(ref expected) = self.error {
                if !err.to_string().contains(expected.as_str()) {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("expected error containing '{}', got: {}", expected, err),
                    ));
                }
            }
            return Ok(());
        }

        let output = result
            .as_ref()
            .map_err(|e| ScenarioError::assertion_failed(step, format!("step failed: {}", e)))?;

        if let Some(ref custom) = self.custom {
            if !custom(output) {
                return Err(ScenarioError::assertion_failed(step, "custom assertion failed"));
            }
        }

        self.verify_records(step, output)?;
        if let Some(cascade) = cascade_of(output) {
            self.verify_cascade(step, cascade)?;
        } else if self.cascaded_posts.is_some() || self.cascaded_comments.is_some() {
            return Err(ScenarioError::assertion_failed(
                step,
                "cascade expected, but the step was not a delete",
            ));
        }

        Ok(())
    }

    fn verify_records(&self, step: &str, output: &OperationOutput) -> ScenarioResult<()> {
        if let Some(expected) = self.returned {
            if output.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} records, got {}", expected, output.len()),
                ));
            }
        }

        let actual = output_ids(output);

        if let Some(ref expected) = self.ids {
            if &actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "id mismatch:\n  expected: {:?}\n  actual:   {:?}",
                        expected, actual
                    ),
                ));
            }
        }

        for id in &self.contains {
            if !actual.contains(id) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected id {} in {:?}", id, actual),
                ));
            }
        }

        for id in &self.excludes {
            if actual.contains(id) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("did not expect id {} in {:?}", id, actual),
                ));
            }
        }

        Ok(())
    }

    fn verify_cascade(&self, step: &str, cascade: &CascadeReport) -> ScenarioResult<()> {
        if let Some(ref expected) = self.cascaded_posts {
            let actual: Vec<String> = cascade.posts.iter().map(|id| id.to_string()).collect();
            if &actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "cascaded posts mismatch:\n  expected: {:?}\n  actual:   {:?}",
                        expected, actual
                    ),
                ));
            }
        }

        if let Some(ref expected) = self.cascaded_comments {
            let actual: Vec<String> = cascade.comments.iter().map(|id| id.to_string()).collect();
            if &actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "cascaded comments mismatch:\n  expected: {:?}\n  actual:   {:?}",
                        expected, actual
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for fluent assertion construction.
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self {
            assertion: Assertion::new(),
        }
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ========== Result assertions ==========

    /// Assert that N records were returned.
    pub fn returned(mut self, n: usize) -> Self {
        self.assertion.returned = Some(n);
        self
    }

    /// Assert that nothing was returned.
    pub fn empty(self) -> Self {
        self.returned(0)
    }

    /// Assert the exact ids returned, in order.
    pub fn ids(mut self, ids: &[&str]) -> Self {
        self.assertion.ids = Some(to_strings(ids));
        self
    }

    /// Assert that a record with this id was returned.
    pub fn contains(mut self, id: &str) -> Self {
        self.assertion.contains.push(id.to_string());
        self
    }

    /// Assert that no record with this id was returned.
    pub fn excludes(mut self, id: &str) -> Self {
        self.assertion.excludes.push(id.to_string());
        self
    }

    // ========== Cascade assertions ==========

    /// Assert the posts removed alongside a deleted record, in order.
    pub fn cascaded_posts(mut self, ids: &[&str]) -> Self {
        self.assertion.cascaded_posts = Some(to_strings(ids));
        self
    }

    /// Assert the comments removed alongside a deleted record, in order.
    pub fn cascaded_comments(mut self, ids: &[&str]) -> Self {
        self.assertion.cascaded_comments = Some(to_strings(ids));
        self
    }

    // ========== Error assertions ==========

    /// Assert that the step fails with the given error kind label.
    pub fn error_kind(mut self, kind: impl Into<String>) -> Self {
        self.assertion.error_kind = Some(kind.into());
        self
    }

    /// Assert that the step fails with an error containing the given string.
    pub fn error(mut self, contains: impl Into<String>) -> Self {
        self.assertion.error = Some(contains.into());
        self
    }

    // ========== Advanced ==========

    /// Custom assertion function.
    pub fn assert_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&OperationOutput) -> bool + Send + Sync + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }
}

impl Default for AssertionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions

fn to_strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Ids of the records a step returned, in order.
pub(crate) fn output_ids(output: &OperationOutput) -> Vec<String> {
    match output {
        OperationOutput::Users(users) => users.iter().map(|u| u.id.to_string()).collect(),
        OperationOutput::Posts(posts) => posts.iter().map(|p| p.id.to_string()).collect(),
        OperationOutput::Comments(comments) => comments.iter().map(|c| c.id.to_string()).collect(),
        OperationOutput::User(user) => vec![user.id.to_string()],
        OperationOutput::Post(post) => vec![post.id.to_string()],
        OperationOutput::Comment(comment) => vec![comment.id.to_string()],
        OperationOutput::DeletedUser(deleted) => vec![deleted.record.id.to_string()],
        OperationOutput::DeletedPost(deleted) => vec![deleted.record.id.to_string()],
    }
}

fn cascade_of(output: &OperationOutput) -> Option<&CascadeReport> {
    match output {
        OperationOutput::DeletedUser(deleted) => Some(&deleted.cascade),
        OperationOutput::DeletedPost(deleted) => Some(&deleted.cascade),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::{EntityKind, Post, PostId, UserId};
    use scribe_mutation::MutationError;

    fn posts(ids: &[&str]) -> OperationOutput {
        OperationOutput::Posts(
            ids.iter()
                .map(|id| Post {
                    id: PostId::new(*id),
                    title: "t".to_string(),
                    body: "b".to_string(),
                    published: true,
                    author: UserId::new("0"),
                })
                .collect(),
        )
    }

    #[test]
    fn test_ids_in_order() {
        let assertion = AssertionBuilder::new().ids(&["0", "2"]).build();
        assert!(assertion.verify("s", &Ok(posts(&["0", "2"]))).is_ok());
        assert!(assertion.verify("s", &Ok(posts(&["2", "0"]))).is_err());
    }

    #[test]
    fn test_error_kind_mismatch_fails() {
        // GIVEN
        let assertion = AssertionBuilder::new().error_kind("CONFLICT").build();
        let result = Err(MutationError::not_found(EntityKind::User, "9").into());

        // WHEN
        let outcome = assertion.verify("delete", &result);

        // THEN
        let message = outcome.unwrap_err().to_string();
        assert!(message.contains("expected CONFLICT error, got NOT_FOUND"));
    }

    #[test]
    fn test_expected_error_but_success_fails() {
        let assertion = AssertionBuilder::new().error("Email taken").build();
        assert!(assertion.verify("s", &Ok(posts(&[]))).is_err());
    }

    #[test]
    fn test_cascade_on_query_fails() {
        let assertion = AssertionBuilder::new().cascaded_comments(&[]).build();
        assert!(assertion.verify("s", &Ok(posts(&["0"]))).is_err());
    }
}
