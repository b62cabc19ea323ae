//! User operations

use reqwest::Method;

use crate::PostboardClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::User;

impl PostboardClient {
    /// Fetches every user.
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        let response = self.request(Method::GET, "/users", None).await?;
        let users = response.json().await.map_err(ApiError::from)?;
        Ok(users)
    }
}
