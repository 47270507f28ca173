//! Input data model for claim-verification clusters.
//!
//! The claims file is a JSON array of clusters. Each cluster groups a set of
//! fact-checked questions over a shared pool of source articles; each question
//! carries a three-tier synopsis and an ordered list of claims. Unknown fields
//! in the input are ignored.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

/// A named group of questions sharing a set of source articles.
#[derive(Debug, Clone, Deserialize)]
pub struct Cluster {
    pub cluster_headline: String,
    pub all_articles: Vec<Article>,
    /// Question text to claims data, in input order. Order drives both the
    /// document sequence and the navigation index sections.
    pub questions: IndexMap<String, ClaimsData>,
}

/// A source article, identified by its URL within the cluster.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub link: String,
    /// ISO-8601 date string, or the literal `"None"` when no date is known.
    pub date: String,
}

/// The three-tier synopsis and claims for a single question.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimsData {
    pub less_detailed: String,
    pub summary: String,
    pub more_detailed: String,
    pub claims: Vec<Claim>,
}

/// An individual sourced assertion tied to one article.
///
/// Claims are numbered 1..N in appearance order within their question; the
/// number doubles as the in-document anchor target referenced from the
/// synopsis text.
#[derive(Debug, Clone, Deserialize)]
pub struct Claim {
    pub sentence: String,
    pub link: String,
    pub context: String,
}

impl Cluster {
    /// Builds the URL-to-article lookup used to resolve claim sources.
    ///
    /// Every claim in the cluster must resolve through this map; a miss is a
    /// fatal [`UnmatchedClaimSource`](crate::ClaimbookError::UnmatchedClaimSource).
    pub fn article_map(&self) -> HashMap<&str, &Article> {
        self.all_articles.iter().map(|a| (a.link.as_str(), a)).collect()
    }
}
