//! AllSides media-bias ratings index.
//!
//! The ratings dataset maps publications to bias metadata. We key the index
//! by bare domain so claim and article URLs can be matched regardless of
//! scheme or `www.` prefix.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::domain::domain_name;
use crate::input::read_json_file;

#[derive(Debug, Deserialize)]
struct RatingsFile {
    allsides_media_bias_ratings: Vec<RatingEntry>,
}

#[derive(Debug, Deserialize)]
struct RatingEntry {
    publication: Publication,
}

#[derive(Debug, Clone, Deserialize)]
struct Publication {
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    source_name: String,
    #[serde(default)]
    media_bias_rating: String,
    #[serde(default)]
    source_type: String,
    #[serde(default)]
    allsides_url: String,
}

/// Bias metadata for one publication domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRecord {
    /// Display name of the publication.
    pub name: String,
    /// Bias rating label (e.g. "Left", "Center", "Right"), or "N/A".
    pub bias: String,
    /// Source-type label (e.g. "News Media"); may be empty.
    pub source_type: String,
    /// External AllSides profile URL; may be empty.
    pub profile_url: String,
}

impl RatingRecord {
    /// Placeholder record for a domain with no rating entry.
    ///
    /// Missing ratings are an expected state, not an error: the document
    /// renders with the bare domain as the name, "N/A" as the rating, and
    /// empty source-type/profile fields.
    pub fn fallback(domain: &str) -> Self {
        Self {
            name: domain.to_string(),
            bias: "N/A".to_string(),
            source_type: String::new(),
            profile_url: String::new(),
        }
    }
}

/// Domain-keyed lookup over the ratings dataset.
#[derive(Debug, Default)]
pub struct RatingsIndex {
    by_domain: HashMap<String, RatingRecord>,
}

impl RatingsIndex {
    /// Loads the ratings file and builds the domain index.
    ///
    /// When two entries share a domain the later one silently wins. The
    /// upstream dataset does not contain legitimate collisions today, so
    /// last-wins is the intended behavior rather than a merge.
    pub fn load(path: &Path) -> Result<Self> {
        let file: RatingsFile = read_json_file(path)?;

        let mut by_domain = HashMap::new();
        for entry in file.allsides_media_bias_ratings {
            let publication = entry.publication;
            by_domain.insert(
                domain_name(&publication.source_url),
                RatingRecord {
                    name: publication.source_name,
                    bias: publication.media_bias_rating,
                    source_type: publication.source_type,
                    profile_url: publication.allsides_url,
                },
            );
        }

        Ok(Self { by_domain })
    }

    /// Looks up the rating for `domain`, or the fallback placeholder.
    pub fn lookup(&self, domain: &str) -> RatingRecord {
        self.by_domain
            .get(domain)
            .cloned()
            .unwrap_or_else(|| RatingRecord::fallback(domain))
    }

    pub fn len(&self) -> usize {
        self.by_domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_domain.is_empty()
    }
}
