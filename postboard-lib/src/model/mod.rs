//! Data types served by the posts API

mod post;
mod user;

pub use post::*;
pub use user::*;
