pub mod citations;
pub mod dates;
pub mod domain;
pub mod error;
pub mod generate;
pub mod input;
pub mod model;
pub mod nav;
pub mod ratings;
pub mod render;

pub use citations::format_citations;
pub use dates::{format_iso_date, ordinal_suffix};
pub use domain::domain_name;
pub use error::{ClaimbookError, Result};
pub use generate::{GenerateJob, GenerateReport, generate};
pub use input::{ensure_dir, read_json_file};
pub use model::{Article, Claim, ClaimsData, Cluster};
pub use nav::{NavCluster, NavEntry, NavIndex, NavSection};
pub use ratings::{RatingRecord, RatingsIndex};
pub use render::{doc_file_name, render_question};
