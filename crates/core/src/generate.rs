//! One full generation run: claims file in, documents and index update out.

use std::fs;
use std::path::PathBuf;

use crate::Result;
use crate::input::{ensure_dir, read_json_file};
use crate::model::Cluster;
use crate::nav::{NavCluster, NavEntry, NavIndex, NavSection};
use crate::ratings::RatingsIndex;
use crate::render::{doc_file_name, render_question};

/// Configuration for a single generation run.
///
/// Runs are independent of each other in memory; the only state shared
/// between them is the navigation index file on disk.
#[derive(Debug, Clone)]
pub struct GenerateJob {
    /// Claims JSON file (array of clusters).
    pub claims_file: PathBuf,
    /// Human-readable period label, used as the navigation entry title.
    pub period_label: String,
    /// Root directory the docs directory and navigation file live under.
    pub dump_root: PathBuf,
    /// Name of the documents directory under the dump root.
    pub docs_dir: String,
    /// AllSides ratings JSON file.
    pub ratings_file: PathBuf,
    /// Name of the navigation index file under the dump root.
    pub nav_file: String,
}

/// What a completed run produced, for progress reporting.
#[derive(Debug, Clone, Copy)]
pub struct GenerateReport {
    pub clusters: usize,
    pub documents: usize,
    /// Whether the docs directory was created by this run.
    pub docs_dir_created: bool,
}

/// Runs the whole pipeline for one job.
///
/// Loads the claims file, ensures the docs directory, loads the navigation
/// index and ratings, renders and writes one document per question, then
/// prepends this run's entry to the index and writes it back. Any failure
/// aborts the run; documents already written stay on disk but the index is
/// only updated after every document succeeded.
pub fn generate(job: &GenerateJob) -> Result<GenerateReport> {
    let clusters: Vec<Cluster> = read_json_file(&job.claims_file)?;

    let docs_dir_created = ensure_dir(&job.dump_root.join(&job.docs_dir))?;

    let nav_path = job.dump_root.join(&job.nav_file);
    let mut nav = NavIndex::load(&nav_path)?;
    let ratings = RatingsIndex::load(&job.ratings_file)?;

    let claims_file_name = job
        .claims_file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let mut documents = 0;
    let mut run_sections = Vec::with_capacity(clusters.len());
    for cluster in &clusters {
        let articles = cluster.article_map();

        let mut sections = Vec::with_capacity(cluster.questions.len());
        for (question, data) in &cluster.questions {
            let md = render_question(question, data, &articles, &ratings)?;
            let rel_path = doc_file_name(&job.docs_dir, claims_file_name, question);
            fs::write(job.dump_root.join(&rel_path), md)?;

            sections.push(NavSection {
                id: rel_path.trim_end_matches(".md").to_string(),
                title: question.clone(),
                url: rel_path,
            });
            documents += 1;
        }

        run_sections.push(NavCluster { title: cluster.cluster_headline.clone(), sections });
    }

    nav.prepend(NavEntry { title: job.period_label.clone(), sections: run_sections });
    nav.save(&nav_path)?;

    Ok(GenerateReport { clusters: clusters.len(), documents, docs_dir_created })
}
