//! Post CRUD operations

use reqwest::Method;

use crate::PostboardClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Post;
use crate::model::PostDraft;

impl PostboardClient {
    /// Fetches every post.
    pub async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        let response = self.request(Method::GET, "/posts", None).await?;
        let posts = response.json().await.map_err(ApiError::from)?;
        Ok(posts)
    }

    /// Fetches a single post by id.
    pub async fn get_post(&self, id: u64) -> Result<Post, Error> {
        let response = self
            .request(Method::GET, &format!("/posts/{}", id), None)
            .await?;
        let post = response.json().await.map_err(ApiError::from)?;
        Ok(post)
    }

    /// Creates a post from a draft, returning the stored post with its
    /// server-assigned id.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, Error> {
        let body = serde_json::to_string(draft)?;
        let response = self.request(Method::POST, "/posts", Some(body)).await?;
        let post = response.json().await.map_err(ApiError::from)?;
        Ok(post)
    }

    /// Replaces an existing post with the draft's fields.
    pub async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post, Error> {
        let body = serde_json::to_string(draft)?;
        let response = self
            .request(Method::PUT, &format!("/posts/{}", id), Some(body))
            .await?;
        let post = response.json().await.map_err(ApiError::from)?;
        Ok(post)
    }

    /// Deletes a post by id.
    pub async fn delete_post(&self, id: u64) -> Result<(), Error> {
        self.request(Method::DELETE, &format!("/posts/{}", id), None)
            .await?;
        Ok(())
    }
}
