use anyhow::{bail, Result};
use spdlog::{info, warn};

use crate::config::Config;
use crate::content::front_matter::parse_front_matter;
use crate::content::jekyll::{render_post, RenderSettings};
use crate::content::post_name::PostName;
use crate::content::CandidatePost;
use crate::remote::{RemoteFile, RemoteSource};
use crate::writer::{PostWriter, WriteOutcome};

#[derive(Debug, Default, PartialEq)]
pub struct SyncStats {
    /// Posts whose content matched the configured author
    pub found: usize,
    pub written: usize,
    pub skipped_existing: usize,
    pub skipped_invalid: usize,
}

/// Runs the whole pipeline once. Per-post failures are logged and skipped so
/// one bad post never aborts the batch; a failed listing degrades the run to
/// zero posts.
pub fn run_sync(config: &Config, source: &dyn RemoteSource) -> SyncStats {
    let mut stats = SyncStats::default();

    info!("Fetching posts from {}/{}", config.source.repo, config.source.blog_path);
    let files = match source.list_posts() {
        Ok(files) => files,
        Err(e) => {
            warn!("Error fetching post listing: {}", e);
            return stats;
        }
    };

    let settings = RenderSettings::from_config(config.attribution.as_ref());
    let writer = PostWriter { posts_dir: config.output.posts_dir.clone() };

    for file in &files {
        if let Err(e) = sync_one(config, source, &settings, &writer, file, &mut stats) {
            warn!("Skipping {}: {}", file.name, e);
            stats.skipped_invalid += 1;
        }
    }

    info!("Sync complete: {} matching posts, {} created, {} already existed, {} skipped",
          stats.found, stats.written, stats.skipped_existing, stats.skipped_invalid);
    stats
}

fn sync_one(config: &Config, source: &dyn RemoteSource, settings: &RenderSettings,
            writer: &PostWriter, file: &RemoteFile, stats: &mut SyncStats) -> Result<()> {
    let raw = source.fetch_raw(file)?;

    if !is_author(&raw, &config.author.username) {
        return Ok(());
    }
    stats.found += 1;

    let name = PostName::parse(&file.name)?;
    let post = CandidatePost {
        canonical_url: name.canonical_url(&config.source.link_base),
        original_filename: file.name.clone(),
        raw_content: raw,
    };
    info!("Found: {}", post.original_filename);

    let (header, body) = parse_front_matter(&post.raw_content);
    let Some(header) = header else {
        bail!("No frontmatter block found");
    };
    let title = header.get("title").map(String::as_str).unwrap_or("Untitled");

    let rendered = render_post(title, &name, &post.canonical_url, body, settings);
    match writer.write(&name.output_file_name(), &rendered)? {
        WriteOutcome::Created => stats.written += 1,
        WriteOutcome::AlreadyExists => stats.skipped_existing += 1,
    }

    Ok(())
}

/// Plain substring containment, case-sensitive, anywhere in the text. This is
/// intentionally permissive: a mention of the username in a footnote counts.
pub fn is_author(content: &str, username: &str) -> bool {
    content.contains(&format!("@{}", username)) || content.contains(username)
}
