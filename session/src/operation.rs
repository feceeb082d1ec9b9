//! Operations routed by value.

use scribe_core::{
    Comment, CreateCommentInput, CreatePostInput, CreateUserInput, Post, PostId, User, UserId,
};
use scribe_mutation::Deleted;

/// One request against a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Users { query: Option<String> },
    Posts { query: Option<String> },
    Comments,
    CreateUser(CreateUserInput),
    DeleteUser(UserId),
    CreatePost(CreatePostInput),
    DeletePost(PostId),
    CreateComment(CreateCommentInput),
}

impl Operation {
    /// The operation's field name on the public surface.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Users { .. } => "users",
            Operation::Posts { .. } => "posts",
            Operation::Comments => "comments",
            Operation::CreateUser(_) => "createUser",
            Operation::DeleteUser(_) => "deleteUser",
            Operation::CreatePost(_) => "createPost",
            Operation::DeletePost(_) => "deletePost",
            Operation::CreateComment(_) => "createComment",
        }
    }

    /// Returns true if the operation writes to the store.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Operation::Users { .. } | Operation::Posts { .. } | Operation::Comments
        )
    }
}

/// Output of an executed [`Operation`]. Records are owned copies.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput {
    Users(Vec<User>),
    Posts(Vec<Post>),
    Comments(Vec<Comment>),
    User(User),
    Post(Post),
    Comment(Comment),
    DeletedUser(Deleted<User>),
    DeletedPost(Deleted<Post>),
}

impl OperationOutput {
    /// Number of records returned (cascaded records are not counted).
    pub fn len(&self) -> usize {
        match self {
            OperationOutput::Users(users) => users.len(),
            OperationOutput::Posts(posts) => posts.len(),
            OperationOutput::Comments(comments) => comments.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
