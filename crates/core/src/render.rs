//! Question document rendering.
//!
//! Each question becomes one Markdown document: a `<DetailSlider>` holding
//! the three citation-formatted synopsis tiers, followed by a pipe table with
//! one row per claim. Claim rows carry the numbered anchor that the synopsis
//! citations link back to, plus a composite source cell combining the bias
//! chart, source link, source type, and publication date.

use std::collections::HashMap;

use crate::citations::{HIGHLIGHT_COLOR, format_citations};
use crate::dates::format_iso_date;
use crate::domain::domain_name;
use crate::model::{Article, ClaimsData};
use crate::ratings::RatingsIndex;
use crate::{ClaimbookError, Result};

/// Renders the full Markdown document for one question.
///
/// `articles` is the cluster's URL-to-article map; every claim link must
/// resolve through it or rendering fails with
/// [`UnmatchedClaimSource`](ClaimbookError::UnmatchedClaimSource). Claim
/// numbering restarts at 1 for every question.
pub fn render_question(
    question: &str,
    data: &ClaimsData,
    articles: &HashMap<&str, &Article>,
    ratings: &RatingsIndex,
) -> Result<String> {
    let mut md = format!("# {}\n\n## Summary\n<DetailSlider>\n", question);

    md.push_str(&format!(
        "<template v-slot:less-detailed>\n{}\n</template>\n",
        format_citations(&data.less_detailed)
    ));
    md.push_str(&format!(
        "<template v-slot:summary>\n{}\n</template>\n",
        format_citations(&data.summary)
    ));
    md.push_str(&format!(
        "<template v-slot:more-detailed>\n{}\n</template>\n</DetailSlider>\n",
        format_citations(&data.more_detailed)
    ));

    md.push_str("\n## Claims\n| Claim Sentence | Source | Context |\n|---|---|---|\n");
    for (idx, claim) in data.claims.iter().enumerate() {
        let number = idx + 1;
        let rating = ratings.lookup(&domain_name(&claim.link));
        let source_type = if rating.source_type.is_empty() {
            String::new()
        } else {
            format!("*({})*", rating.source_type)
        };

        let article = articles
            .get(claim.link.as_str())
            .ok_or_else(|| ClaimbookError::UnmatchedClaimSource { link: claim.link.clone() })?;
        let date = format_iso_date(&article.date)?;

        md.push_str(&format!(
            "|<font id=\"{number}\" color={HIGHLIGHT_COLOR}>[{number}]</font> {}\
             |<div style=\"display: flex; justify-content: center; align-items: center; flex-direction: column;\">\
             <a href=\"{}\" target=\"_blank\"><BiasChart bias=\"{}\" /></a>\
             <div><a href=\"{}\" target=\"_blank\">{}</a></div>\
             <div>{source_type}</div><div>{date}</div></div>\
             |{}|\n",
            claim.sentence, rating.profile_url, rating.bias, claim.link, rating.name, claim.context
        ));
    }

    Ok(md)
}

/// Computes the relative document path for a question.
///
/// The path combines the docs directory, the claims file name with dots
/// replaced by underscores, and the question text with spaces, dots, and
/// question marks replaced by underscores, truncated to its first 30
/// characters. Deterministic, filesystem-safe, and still recognizable as
/// the question it came from.
pub fn doc_file_name(docs_dir: &str, claims_file_name: &str, question: &str) -> String {
    let stem = claims_file_name.replace('.', "_");
    let prefix: String = question
        .chars()
        .map(|c| if matches!(c, ' ' | '.' | '?') { '_' } else { c })
        .take(30)
        .collect();

    format!("{docs_dir}/{stem}_{prefix}.md")
}
