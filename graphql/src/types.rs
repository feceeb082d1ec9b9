//! GraphQL object and input types.

use async_graphql::{Context, InputObject, Object, Result, ID};
use scribe_core::{
    Comment, CreateCommentInput, CreatePostInput, CreateUserInput, Post, User, UserId,
};
use scribe_resolver as resolve;

use crate::context::{read, to_error};

// ══════════════════════════════════════════════════════════════════════════════
// OBJECTS
// ══════════════════════════════════════════════════════════════════════════════

/// A user of the blog.
pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn age(&self) -> Option<i32> {
        self.0.age
    }

    /// Posts written by this user.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let session = read(ctx)?;
        Ok(resolve::user_posts(session.store(), &self.0)
            .into_iter()
            .cloned()
            .map(PostObject)
            .collect())
    }

    /// Comments written by this user.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<CommentObject>> {
        let session = read(ctx)?;
        Ok(resolve::user_comments(session.store(), &self.0)
            .into_iter()
            .cloned()
            .map(CommentObject)
            .collect())
    }
}

/// A blog post.
pub struct PostObject(pub Post);

#[Object(name = "Post")]
impl PostObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn body(&self) -> &str {
        &self.0.body
    }

    async fn published(&self) -> bool {
        self.0.published
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<UserObject> {
        let session = read(ctx)?;
        let author = resolve::post_author(session.store(), &self.0).map_err(to_error)?;
        Ok(UserObject(author.clone()))
    }

    /// Comments attached to this post.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<CommentObject>> {
        let session = read(ctx)?;
        Ok(resolve::post_comments(session.store(), &self.0)
            .into_iter()
            .cloned()
            .map(CommentObject)
            .collect())
    }
}

/// A comment on a post.
pub struct CommentObject(pub Comment);

#[Object(name = "Comment")]
impl CommentObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id.to_string())
    }

    async fn text(&self) -> &str {
        &self.0.text
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<UserObject> {
        let session = read(ctx)?;
        let author = resolve::comment_author(session.store(), &self.0).map_err(to_error)?;
        Ok(UserObject(author.clone()))
    }

    async fn post(&self, ctx: &Context<'_>) -> Result<PostObject> {
        let session = read(ctx)?;
        let post = resolve::comment_post(session.store(), &self.0).map_err(to_error)?;
        Ok(PostObject(post.clone()))
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// INPUTS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(InputObject)]
#[graphql(name = "CreateUserInput")]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<CreateUserData> for CreateUserInput {
    fn from(data: CreateUserData) -> Self {
        CreateUserInput {
            name: data.name,
            email: data.email,
            age: data.age,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "CreatePostInput")]
pub struct CreatePostData {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author: ID,
}

impl From<CreatePostData> for CreatePostInput {
    fn from(data: CreatePostData) -> Self {
        CreatePostInput::new(data.title, data.body, data.published, UserId::new(data.author.0))
    }
}

#[derive(InputObject)]
#[graphql(name = "CreateCommentInput")]
pub struct CreateCommentData {
    pub text: String,
    pub author: ID,
    pub post: ID,
}

impl From<CreateCommentData> for CreateCommentInput {
    fn from(data: CreateCommentData) -> Self {
        CreateCommentInput::new(data.text, data.author.0, data.post.0)
    }
}
