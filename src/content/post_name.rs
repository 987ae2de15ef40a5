use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Date and slug recovered from a post file name such as
/// `2025-10-30-non-code-contribution.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostName {
    pub date: NaiveDate,
    pub slug: String,
}

impl PostName {
    /// Parses a file name of the form `YYYY-MM-DD-<slug>.md`. The slug may
    /// contain dashes. The date in the file name is authoritative, whatever
    /// the frontmatter says.
    pub fn parse(file_name: &str) -> Result<PostName> {
        lazy_static! {
            static ref NAME_REGEX: Regex = Regex::new(
                r"^(\d{4})-(\d{2})-(\d{2})-(.+)$"
            ).unwrap();
        }

        let raw = file_name.strip_suffix(".md").unwrap_or(file_name);
        let Some(caps) = NAME_REGEX.captures(raw) else {
            bail!("File name {} does not start with a YYYY-MM-DD date", file_name);
        };

        let year: i32 = caps[1].parse()?;
        let month: u32 = caps[2].parse()?;
        let day: u32 = caps[3].parse()?;
        let slug = caps[4].to_string();

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| anyhow!("File name {} contains an invalid calendar date", file_name))?;

        Ok(PostName { date, slug })
    }

    pub fn output_file_name(&self) -> String {
        format!("{}-{}.md", self.date.format("%Y-%m-%d"), self.slug)
    }

    /// Builds the URL the post was originally published under,
    /// e.g. `https://prometheus.io/blog/2025/10/30/non-code-contribution/`.
    pub fn canonical_url(&self, link_base: &str) -> String {
        format!("{}/{}/{}/",
                link_base.trim_end_matches('/'),
                self.date.format("%Y/%m/%d"),
                self.slug)
    }
}
