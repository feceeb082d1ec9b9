//! Session manager.

use scribe_core::{
    Comment, CreateCommentInput, CreatePostInput, CreateUserInput, Post, PostId, User, UserId,
};
use scribe_graph::Store;
use scribe_mutation::{Deleted, IdGenerator, MutationExecutor, UuidIds};
use scribe_query::QueryExecutor;
use tracing::debug;

use crate::error::SessionResult;
use crate::operation::{Operation, OperationOutput};
use crate::seed;

/// A Scribe session: one store plus the id source for new records.
pub struct Session {
    /// All stored records.
    store: Store,
    /// Id source for created records.
    ids: Box<dyn IdGenerator>,
}

impl Session {
    /// Create an empty session that assigns UUIDs.
    pub fn new() -> Self {
        Self::with_store(Store::new(), UuidIds)
    }

    /// Create an empty session with a custom id source.
    pub fn with_ids(ids: impl IdGenerator + 'static) -> Self {
        Self::with_store(Store::new(), ids)
    }

    /// Create a session over an existing store.
    pub fn with_store(store: Store, ids: impl IdGenerator + 'static) -> Self {
        Self {
            store,
            ids: Box::new(ids),
        }
    }

    /// Create a session holding the demo data set.
    pub fn seeded() -> SessionResult<Self> {
        let store = seed::demo_store()?;
        debug!(counts = ?store.counts(), "loaded demo data");
        Ok(Self::with_store(store, UuidIds))
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    fn queries(&self) -> QueryExecutor<'_> {
        QueryExecutor::new(&self.store)
    }

    fn mutations(&mut self) -> MutationExecutor<'_, '_> {
        MutationExecutor::new(&mut self.store, &mut *self.ids)
    }

    // ==================== Queries ====================

    /// Users, optionally filtered by a case-insensitive name search.
    pub fn users(&self, query: Option<&str>) -> Vec<&User> {
        self.queries().users(query)
    }

    /// Posts, optionally filtered by a case-insensitive title/body search.
    pub fn posts(&self, query: Option<&str>) -> Vec<&Post> {
        self.queries().posts(query)
    }

    /// All comments.
    pub fn comments(&self) -> Vec<&Comment> {
        self.queries().comments()
    }

    // ==================== Mutations ====================

    pub fn create_user(&mut self, data: CreateUserInput) -> SessionResult<User> {
        Ok(self.mutations().create_user(data)?)
    }

    pub fn delete_user(&mut self, id: &UserId) -> SessionResult<Deleted<User>> {
        Ok(self.mutations().delete_user(id)?)
    }

    pub fn create_post(&mut self, data: CreatePostInput) -> SessionResult<Post> {
        Ok(self.mutations().create_post(data)?)
    }

    pub fn delete_post(&mut self, id: &PostId) -> SessionResult<Deleted<Post>> {
        Ok(self.mutations().delete_post(id)?)
    }

    pub fn create_comment(&mut self, data: CreateCommentInput) -> SessionResult<Comment> {
        Ok(self.mutations().create_comment(data)?)
    }

    /// Execute one operation, returning owned records.
    pub fn execute(&mut self, operation: Operation) -> SessionResult<OperationOutput> {
        debug!(operation = operation.name(), "executing");
        let output = match operation {
            Operation::Users { query } => {
                OperationOutput::Users(cloned(self.users(query.as_deref())))
            }
            Operation::Posts { query } => {
                OperationOutput::Posts(cloned(self.posts(query.as_deref())))
            }
            Operation::Comments => OperationOutput::Comments(cloned(self.comments())),
            Operation::CreateUser(data) => OperationOutput::User(self.create_user(data)?),
            Operation::DeleteUser(id) => OperationOutput::DeletedUser(self.delete_user(&id)?),
            Operation::CreatePost(data) => OperationOutput::Post(self.create_post(data)?),
            Operation::DeletePost(id) => OperationOutput::DeletedPost(self.delete_post(&id)?),
            Operation::CreateComment(data) => {
                OperationOutput::Comment(self.create_comment(data)?)
            }
        };
        Ok(output)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("counts", &self.store.counts())
            .finish_non_exhaustive()
    }
}

fn cloned<R: Clone>(records: Vec<&R>) -> Vec<R> {
    records.into_iter().cloned().collect()
}
