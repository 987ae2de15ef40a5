use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Source {
    /// API root, e.g. https://api.github.com
    pub api_base: String,
    /// Repository holding the posts, e.g. prometheus/docs
    pub repo: String,
    /// Path inside the repository, e.g. blog/posts
    pub blog_path: String,
    /// Base of the published post URLs, e.g. https://prometheus.io/blog
    pub link_base: String,
}

#[derive(Deserialize)]
pub struct Author {
    pub username: String,
}

#[derive(Deserialize)]
pub struct Output {
    pub posts_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct Attribution {
    pub label: Option<String>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub source: Source,
    pub author: Author,
    pub output: Output,
    pub attribution: Option<Attribution>,
    pub log: Option<Log>,
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_full_config() {
        let src = r#"
[source]
api_base = "https://api.github.com"
repo = "prometheus/docs"
blog_path = "blog/posts"
link_base = "https://prometheus.io/blog"

[author]
username = "nwanduka"

[output]
posts_dir = "_posts"

[attribution]
label = "Prometheus Blog"
tags = ["prometheus", "monitoring"]
"#;
        let cfg: Config = toml::from_str(src).unwrap();
        assert_eq!(cfg.source.repo, "prometheus/docs");
        assert_eq!(cfg.author.username, "nwanduka");
        assert_eq!(cfg.output.posts_dir, PathBuf::from("_posts"));
        let attribution = cfg.attribution.unwrap();
        assert_eq!(attribution.label.as_deref(), Some("Prometheus Blog"));
        assert_eq!(attribution.categories, None);
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_missing_section_fails() {
        let src = r#"
[source]
api_base = "https://api.github.com"
repo = "prometheus/docs"
blog_path = "blog/posts"
link_base = "https://prometheus.io/blog"
"#;
        assert!(toml::from_str::<Config>(src).is_err());
    }
}
