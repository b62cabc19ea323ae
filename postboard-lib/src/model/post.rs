//! Post types

use serde::Deserialize;
use serde::Serialize;

use crate::validation::FieldValue;
use crate::validation::FormValidation;
use crate::validation::Rule;

/// A post as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned id.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Id of the authoring user.
    pub user_id: u64,
    /// Display name of the author, when the API embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// The fields a caller supplies when creating or updating a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Id of the authoring user.
    pub user_id: u64,
}

impl PostDraft {
    /// Builds the standard validation state for a post form, fields seeded
    /// from this draft.
    pub fn validation(&self) -> FormValidation {
        FormValidation::new()
            .field(
                "title",
                self.title.as_str(),
                vec![
                    Rule::required().with_message("Title is required"),
                    Rule::min_length(3).with_message("Title must be at least 3 characters"),
                    Rule::max_length(120),
                ],
            )
            .field(
                "body",
                self.body.as_str(),
                vec![
                    Rule::required().with_message("Body is required"),
                    Rule::min_length(30).with_message("Body must be at least 30 characters"),
                ],
            )
            .field(
                "userId",
                FieldValue::Int(self.user_id as i64),
                vec![Rule::required().with_message("Author is required")],
            )
    }
}
