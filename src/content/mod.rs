pub mod front_matter;
pub mod jekyll;
pub mod post_name;

/// A remote post that passed the authorship filter.
pub struct CandidatePost {
    pub raw_content: String,
    pub original_filename: String,
    pub canonical_url: String,
}
