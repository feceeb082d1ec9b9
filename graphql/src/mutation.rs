use async_graphql::{Context, Object, Result, ID};
use scribe_core::{PostId, UserId};

use crate::context::{to_error, write};
use crate::types::{
    CommentObject, CreateCommentData, CreatePostData, CreateUserData, PostObject, UserObject,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user. Fails if the email is taken.
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserData) -> Result<UserObject> {
        let mut session = write(ctx)?;
        let user = session.create_user(data.into()).map_err(to_error)?;
        Ok(UserObject(user))
    }

    /// Delete a user together with their posts, the comments on those posts
    /// and their own comments. Returns the deleted user.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<UserObject> {
        let mut session = write(ctx)?;
        let deleted = session
            .delete_user(&UserId::new(id.0))
            .map_err(to_error)?;
        Ok(UserObject(deleted.into_record()))
    }

    /// Create a post for an existing author.
    async fn create_post(&self, ctx: &Context<'_>, data: CreatePostData) -> Result<PostObject> {
        let mut session = write(ctx)?;
        let post = session.create_post(data.into()).map_err(to_error)?;
        Ok(PostObject(post))
    }

    /// Delete a post and its comments. Returns the deleted post.
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<PostObject> {
        let mut session = write(ctx)?;
        let deleted = session
            .delete_post(&PostId::new(id.0))
            .map_err(to_error)?;
        Ok(PostObject(deleted.into_record()))
    }

    /// Comment on a published post.
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        data: CreateCommentData,
    ) -> Result<CommentObject> {
        let mut session = write(ctx)?;
        let comment = session.create_comment(data.into()).map_err(to_error)?;
        Ok(CommentObject(comment))
    }
}
