use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::config::Source;

/// One entry of the remote directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFile {
    pub name: String,
    // Null for sub-directories in the GitHub contents API
    pub download_url: Option<String>,
}

/// Seam between the pipeline and the hosting API, so tests can run against an
/// in-memory source.
pub trait RemoteSource {
    /// Returns the markdown files reachable under the configured blog path.
    fn list_posts(&self) -> Result<Vec<RemoteFile>>;

    /// Downloads the raw text of a single file.
    fn fetch_raw(&self, file: &RemoteFile) -> Result<String>;
}

pub struct GithubSource {
    client: reqwest::blocking::Client,
    api_base: String,
    repo: String,
    blog_path: String,
}

const USER_AGENT: &str = concat!("postsync/", env!("CARGO_PKG_VERSION"));

impl GithubSource {
    pub fn new(source: &Source) -> GithubSource {
        GithubSource {
            client: reqwest::blocking::Client::new(),
            api_base: source.api_base.clone(),
            repo: source.repo.clone(),
            blog_path: source.blog_path.clone(),
        }
    }
}

impl RemoteSource for GithubSource {
    fn list_posts(&self) -> Result<Vec<RemoteFile>> {
        let url = format!("{}/repos/{}/contents/{}", self.api_base, self.repo, self.blog_path);
        let response = self.client.get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .with_context(|| format!("Error requesting listing from {}", url))?;

        if !response.status().is_success() {
            bail!("Listing request to {} returned {}", url, response.status());
        }

        let entries: Vec<RemoteFile> = response.json()
            .with_context(|| format!("Error parsing listing response from {}", url))?;

        Ok(markdown_files(entries))
    }

    fn fetch_raw(&self, file: &RemoteFile) -> Result<String> {
        let url = file.download_url.as_deref()
            .ok_or_else(|| anyhow!("File {} has no download URL", file.name))?;

        let response = self.client.get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .with_context(|| format!("Error downloading {}", url))?;

        if !response.status().is_success() {
            bail!("Download of {} returned {}", url, response.status());
        }

        Ok(response.text()?)
    }
}

fn markdown_files(entries: Vec<RemoteFile>) -> Vec<RemoteFile> {
    entries.into_iter()
        .filter(|entry| entry.name.ends_with(".md") && entry.download_url.is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserializes() {
        let listing = r#"[
            {"name": "2025-10-30-non-code-contribution.md",
             "path": "blog/posts/2025-10-30-non-code-contribution.md",
             "sha": "abc123",
             "download_url": "https://raw.example.com/2025-10-30-non-code-contribution.md"},
            {"name": "images",
             "path": "blog/posts/images",
             "sha": "def456",
             "download_url": null}
        ]"#;

        let entries: Vec<RemoteFile> = serde_json::from_str(listing).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "2025-10-30-non-code-contribution.md");
        assert!(entries[1].download_url.is_none());
    }

    #[test]
    fn test_markdown_files_filter() {
        let entries = vec![
            RemoteFile {
                name: "2025-10-30-non-code-contribution.md".to_string(),
                download_url: Some("https://raw.example.com/a.md".to_string()),
            },
            RemoteFile { name: "README.txt".to_string(), download_url: Some("https://raw.example.com/b".to_string()) },
            RemoteFile { name: "images".to_string(), download_url: None },
        ];

        let files = markdown_files(entries);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "2025-10-30-non-code-contribution.md");
    }
}
