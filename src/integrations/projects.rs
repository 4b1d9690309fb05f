//! Completed-project lookup (Project Map It).

use super::IntegrationError;
use crate::config::ProjectsSection;
use crate::log;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePaths {
    pub small: String,
    pub large: String,
}

/// Photo attached to a project. Missing fields default to empty so one
/// incomplete entry does not drop the whole result page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    #[serde(rename = "_id")]
    pub id: String,
    pub path: ImagePaths,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub city: String,
    pub state: String,
    pub street: String,
    pub description: String,
    pub created_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub files: Vec<ProjectFile>,
}

#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    #[serde(default)]
    results: Vec<Project>,
}

pub struct ProjectClient<'a> {
    config: &'a ProjectsSection,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl<'a> ProjectClient<'a> {
    pub fn new(config: &'a ProjectsSection) -> Self {
        Self { config, api_key: config.api_key(), client: reqwest::Client::new() }
    }

    #[cfg(test)]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Search URL for projects with photos in `city`.
    pub fn query_url(&self, city: &str) -> String {
        format!(
            "{}/projects?s={}&limit={}&photosOnly=true",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(city),
            self.config.limit
        )
    }

    /// Projects with photos in `city`. Any failure yields an empty list.
    pub async fn projects_by_city(&self, city: &str) -> Vec<Project> {
        match self.fetch(city).await {
            Ok(projects) => projects,
            Err(err) => {
                log!("projects"; "lookup for `{city}` failed: {err}");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, city: &str) -> Result<Vec<Project>, IntegrationError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| IntegrationError::MissingKey(self.config.api_key_env.clone()))?;

        let response = self.client.get(self.query_url(city)).bearer_auth(key).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(IntegrationError::Status { status, body });
        }

        let data: ProjectsResponse = response.json().await?;
        Ok(data.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_url_encodes_city() {
        let config = ProjectsSection::default();
        let client = ProjectClient::new(&config);

        assert_eq!(
            client.query_url("Mt Holly"),
            "https://projectmapit.com/api/v1/projects?s=Mt%20Holly&limit=5&photosOnly=true"
        );
    }

    #[test]
    fn test_parse_projects_response() {
        let data: ProjectsResponse = serde_json::from_value(json!({
            "results": [{
                "_id": "p1",
                "city": "Concord",
                "state": "NC",
                "street": "1 Main St",
                "description": "Full replacement",
                "createdDate": "2024-05-01",
                "latitude": 35.4,
                "files": [{"_id": "f1", "path": {"small": "s.jpg", "large": "l.jpg"}}]
            }, {
                "_id": "p2",
                "city": "Concord"
            }],
            "page": 1,
            "pages": 1
        }))
        .unwrap();

        assert_eq!(data.results.len(), 2);
        let first = &data.results[0];
        assert_eq!(first.created_date, "2024-05-01");
        assert_eq!(first.longitude, None);
        assert_eq!(first.files[0].path.large, "l.jpg");
        assert!(data.results[1].files.is_empty());
    }

    #[test]
    fn test_incomplete_file_entry_keeps_projects() {
        let data: ProjectsResponse = serde_json::from_value(json!({
            "results": [
                {"_id": "p1", "files": [{"_id": "f1"}, {"path": {"small": "s.jpg"}}]},
                {"_id": "p2"}
            ]
        }))
        .unwrap();

        assert_eq!(data.results.len(), 2);
        let files = &data.results[0].files;
        assert_eq!(files[0].id, "f1");
        assert_eq!(files[0].path, ImagePaths::default());
        assert_eq!(files[1].id, "");
        assert_eq!(files[1].path.small, "s.jpg");
        assert_eq!(files[1].path.large, "");
    }

    #[test]
    fn test_missing_results_is_empty() {
        let data: ProjectsResponse = serde_json::from_value(json!({"page": 1})).unwrap();
        assert!(data.results.is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_yields_empty_list() {
        let config = ProjectsSection::default();
        let client = ProjectClient::new(&config).with_api_key(None);
        assert!(client.projects_by_city("Charlotte").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_empty_list() {
        let config = ProjectsSection { base_url: "http://127.0.0.1:1".into(), ..Default::default() };
        let client = ProjectClient::new(&config).with_api_key(Some("test".into()));
        assert!(client.projects_by_city("Charlotte").await.is_empty());
    }
}
