use crate::error::{FolioError, Result};
use crate::github::types::Record;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Serialize;

#[derive(Serialize)]
struct ListParams {
    sort: &'static str,
    per_page: u8,
}

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
    owner: String,
    per_page: u8,
}

impl GitHubClient {
    pub fn new(token: Option<&str>, api_base: Option<&str>, owner: &str, per_page: u8) -> Result<Self> {
        // One request per fetch: a failure is reported, never retried.
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(base) = api_base {
            builder = builder
                .base_uri(base)
                .map_err(|e| FolioError::Config(format!("invalid api_base {base}: {e}")))?;
        }
        let octo = builder.build()?;

        Ok(Self {
            octo,
            owner: owner.to_string(),
            per_page: per_page.max(1),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Most recently updated public repositories of the owner, one page only.
    pub async fn fetch_repos(&self) -> Result<Vec<Record>> {
        let route = format!("/users/{}/repos", self.owner);
        let params = ListParams {
            sort: "updated",
            per_page: self.per_page,
        };
        let records: Vec<Record> = self.octo.get(route, Some(&params)).await?;
        Ok(records)
    }
}
