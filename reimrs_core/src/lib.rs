#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod extract;
pub mod fetch;
pub mod rhymes;
pub mod word;

pub use error::{Error, Result};
pub use extract::{RHYME_PATTERN, extract};
pub use fetch::{Page, PageFetcher};
pub use rhymes::{PREVIEW_LEN, Rhymes};
pub use word::{Limit, normalize};
