//! REST operations, one module per resource

mod posts;
mod users;
