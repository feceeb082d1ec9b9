use async_graphql::{Context, Object, Result};

use crate::context::read;
use crate::types::{CommentObject, PostObject, UserObject};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Users, optionally filtered by a case-insensitive name search.
    async fn users(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<UserObject>> {
        let session = read(ctx)?;
        Ok(session
            .users(query.as_deref())
            .into_iter()
            .cloned()
            .map(UserObject)
            .collect())
    }

    /// Posts, optionally filtered by a case-insensitive title or body search.
    async fn posts(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<PostObject>> {
        let session = read(ctx)?;
        Ok(session
            .posts(query.as_deref())
            .into_iter()
            .cloned()
            .map(PostObject)
            .collect())
    }

    /// All comments.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<CommentObject>> {
        let session = read(ctx)?;
        Ok(session
            .comments()
            .into_iter()
            .cloned()
            .map(CommentObject)
            .collect())
    }
}
