mod echo;

use anyhow::{Context, Result};
use claimbook_core::{GenerateJob, generate};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Navigation index file shared by every period, maintained in place.
const NAV_FILE: &str = "vbcfg-july.json";

/// AllSides ratings dataset shared by every period.
const RATINGS_FILE: &str = "all_sides_ratings.json";

/// The fixed run sequence: one claims file per half-month period, oldest
/// first. Each run prepends its entry to the navigation index, so the index
/// ends up newest-first.
const PERIODS: &[(&str, &str)] = &[
    ("claim_summaries_gpt4_cite_sept_1_15.json", "Sept 1st to 15th"),
    ("claim_summaries_gpt4_cite_sept_16_30.json", "Sept 16th to 30th"),
    ("claim_summaries_gpt4_cite_oct_1_15.json", "Oct 1st to 15th"),
    ("claim_summaries_gpt4_cite_oct_16_30.json", "Oct 16th to 30th"),
    ("claim_summaries_gpt4_cite_nov_1_15.json", "Nov 1st to 15th"),
    ("claim_summaries_gpt4_cite_nov_16_30.json", "Nov 16th to 30th"),
    ("claim_summaries_gpt4_cite_dec_1_15.json", "Dec 1st to 15th"),
    ("claim_summaries_gpt4_cite_dec_16_30.json", "Dec 16th to 30th"),
    ("claim_summaries_gpt4_cite_jan_1_15.json", "Jan 1st to 15th"),
];

fn jobs() -> Vec<GenerateJob> {
    PERIODS
        .iter()
        .map(|&(claims_file, period_label)| GenerateJob {
            claims_file: claims_file.into(),
            period_label: period_label.to_string(),
            dump_root: "./".into(),
            docs_dir: period_label.to_string(),
            ratings_file: RATINGS_FILE.into(),
            nav_file: NAV_FILE.to_string(),
        })
        .collect()
}

fn main() -> Result<()> {
    echo::print_banner();

    let jobs = jobs();
    let total = jobs.len();
    for (i, job) in jobs.iter().enumerate() {
        echo::print_step(i + 1, total, &format!("Generating {}", job.period_label));

        let report =
            generate(job).with_context(|| format!("Failed to generate documents for {}", job.period_label))?;

        if report.docs_dir_created {
            echo::print_info(&format!("Directory {} was created.", job.docs_dir));
        } else {
            echo::print_info(&format!("Directory {} already exists.", job.docs_dir));
        }
        echo::print_success(&format!(
            "{} documents across {} clusters",
            report.documents, report.clusters
        ));
    }

    echo::print_success("All periods generated");
    Ok(())
}
