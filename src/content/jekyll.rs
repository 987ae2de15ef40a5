use std::fmt::Write;

use crate::config::Attribution;
use crate::content::post_name::PostName;

/// Attribution values rendered into every synced post. Defaults match the
/// Prometheus blog source.
pub struct RenderSettings {
    pub label: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            label: "Prometheus Blog".to_string(),
            categories: vec!["blog".to_string()],
            tags: vec!["prometheus".to_string(), "monitoring".to_string()],
        }
    }
}

impl RenderSettings {
    pub fn from_config(attribution: Option<&Attribution>) -> RenderSettings {
        let mut settings = RenderSettings::default();
        if let Some(attribution) = attribution {
            if let Some(ref label) = attribution.label {
                settings.label = label.clone();
            }
            if let Some(ref categories) = attribution.categories {
                settings.categories = categories.clone();
            }
            if let Some(ref tags) = attribution.tags {
                settings.tags = tags.clone();
            }
        }
        settings
    }
}

/// Renders the Jekyll version of a post: a fixed-shape frontmatter block, an
/// attribution blockquote and the original body verbatim.
///
/// The title is written between plain double quotes. A title that itself
/// contains a double quote will produce malformed frontmatter - known
/// limitation, no escaping is attempted.
pub fn render_post(title: &str, name: &PostName, canonical_url: &str, body: &str,
                   settings: &RenderSettings) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "layout: post");
    let _ = writeln!(&mut buf, "title: \"{}\"", title);
    let _ = writeln!(&mut buf, "date: {}", name.date.format("%Y-%m-%d"));
    let _ = writeln!(&mut buf, "categories: [{}]", settings.categories.join(", "));
    let _ = writeln!(&mut buf, "tags: [{}]", settings.tags.join(", "));
    let _ = writeln!(&mut buf, "canonical_url: {}", canonical_url);
    let _ = writeln!(&mut buf, "published_on: \"{}\"", settings.label);
    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "> Originally published on [{}]({})", settings.label, canonical_url);
    let _ = writeln!(&mut buf, "");

    buf.push_str(body);
    if !body.ends_with('\n') {
        buf.push('\n');
    }

    buf
}

#[cfg(test)]
mod tests {
    use crate::content::post_name::PostName;

    use super::*;

    const RENDERED: &str = r#"---
layout: post
title: "My Post"
date: 2025-10-30
categories: [blog]
tags: [prometheus, monitoring]
canonical_url: https://prometheus.io/blog/2025/10/30/non-code-contribution/
published_on: "Prometheus Blog"
---
> Originally published on [Prometheus Blog](https://prometheus.io/blog/2025/10/30/non-code-contribution/)

The post body.
"#;

    #[test]
    fn test_render_happy_case() {
        let name = PostName::parse("2025-10-30-non-code-contribution.md").unwrap();
        let url = name.canonical_url("https://prometheus.io/blog");
        let settings = RenderSettings::default();

        let rendered = render_post("My Post", &name, &url, "The post body.\n", &settings);
        assert_eq!(rendered, RENDERED);
    }

    #[test]
    fn test_body_kept_verbatim() {
        let name = PostName::parse("2025-10-30-non-code-contribution.md").unwrap();
        let url = name.canonical_url("https://prometheus.io/blog");
        let settings = RenderSettings::default();

        let body = "\nLeading blank line.\n\nTrailing blank line.\n\n";
        let rendered = render_post("T", &name, &url, body, &settings);
        assert!(rendered.ends_with(&format!("---\n> Originally published on [Prometheus Blog]({})\n\n{}", url, body)));
    }

    #[test]
    fn test_settings_from_config() {
        let attribution = Attribution {
            label: Some("Upstream Blog".to_string()),
            categories: None,
            tags: Some(vec!["external".to_string()]),
        };
        let settings = RenderSettings::from_config(Some(&attribution));
        assert_eq!(settings.label, "Upstream Blog");
        assert_eq!(settings.categories, ["blog"]);
        assert_eq!(settings.tags, ["external"]);
    }
}
