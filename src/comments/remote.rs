//! Supabase REST comment backend
//!
//! Expects a `comments` table with columns `id` (bigint identity),
//! `post_slug` (text), `name` (text), `text` (text), `created_at`
//! (timestamptz default now()).

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use super::{Comment, CommentError};

/// REST client for the configured comments table
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

#[derive(Serialize)]
struct NewComment<'a> {
    post_slug: &'a str,
    name: &'a str,
    text: &'a str,
}

impl RemoteStore {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    pub async fn list(&self, slug: &str) -> Result<Vec<Comment>, CommentError> {
        let url = format!(
            "{}?post_slug=eq.{}&select=id,post_slug,name,text,created_at&order=created_at.asc",
            self.endpoint(),
            utf8_percent_encode(slug, NON_ALPHANUMERIC)
        );

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| CommentError::Backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CommentError::Backend(format!(
                "listing comments failed with status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CommentError::Backend(e.to_string()))
    }

    pub async fn submit(&self, slug: &str, name: &str, text: &str) -> Result<(), CommentError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&NewComment {
                post_slug: slug,
                name,
                text,
            })
            .send()
            .await
            .map_err(|e| CommentError::Backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CommentError::Backend(format!(
                "submitting comment failed with status {}",
                response.status()
            )));
        }
        Ok(())
    }
}
