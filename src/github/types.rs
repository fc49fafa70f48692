use serde::Deserialize;

/// One repository as returned by `GET /users/{owner}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(default)]
    pub fork: bool,
}
