//! Shorthand constructors for [`Operation`] values.

use scribe_core::{CreateCommentInput, CreatePostInput, CreateUserInput, PostId, UserId};
use scribe_session::Operation;

pub fn users(query: Option<&str>) -> Operation {
    Operation::Users {
        query: query.map(str::to_string),
    }
}

pub fn posts(query: Option<&str>) -> Operation {
    Operation::Posts {
        query: query.map(str::to_string),
    }
}

pub fn comments() -> Operation {
    Operation::Comments
}

pub fn create_user(name: &str, email: &str) -> Operation {
    Operation::CreateUser(CreateUserInput::new(name, email))
}

pub fn create_post(title: &str, body: &str, published: bool, author: &str) -> Operation {
    Operation::CreatePost(CreatePostInput::new(title, body, published, author))
}

pub fn create_comment(text: &str, author: &str, post: &str) -> Operation {
    Operation::CreateComment(CreateCommentInput::new(text, author, post))
}

pub fn delete_user(id: &str) -> Operation {
    Operation::DeleteUser(UserId::new(id))
}

pub fn delete_post(id: &str) -> Operation {
    Operation::DeletePost(PostId::new(id))
}
