//! # Scan Organizer
//!
//! Turns a photo scanner's output directory into a clean, numbered set of
//! resized JPEGs. The scanner writes up to three files per physical photo,
//! sharing an image id in the file name:
//!
//! ```text
//! scans/                         output/output/
//! ├── Summer_0001.jpg            ├── 1.jpg        (from Summer_0001_a.jpg)
//! ├── Summer_0001_a.jpg    →     ├── 1_back.jpg
//! ├── Summer_0001_b.jpg          └── 2.jpg
//! └── Summer_0002.jpg
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan        source dir  →  ScanRecord per decodable file name
//! 2. Reconcile   records     →  one front/back pair per image id
//! 3. Plan        pairs       →  zero-padded destination paths
//! 4. Process     plan        →  destination rebuilt, images resized + written
//! ```
//!
//! Stages 1–3 are pure apart from the directory listing. Stage 4 goes through
//! the [`imaging::ImageBackend`] trait, so the whole pipeline can run against
//! a mock codec in tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Scanner file name decoder (`<album>_<id>[_a|_b].jpg`) |
//! | [`scan`] | Stage 1: lists source `.jpg` files and decodes them |
//! | [`reconcile`] | Stage 2: groups records by id and picks the front/back |
//! | [`plan`] | Stage 3: destination file naming |
//! | [`process`] | Stage 4: destination setup and the copy/resize loop |
//! | [`imaging`] | Pure-Rust JPEG codec: identify, resize, encode |
//! | [`config`] | `config.toml` loading and the per-run [`config::RunConfig`] |
//! | [`types`] | Types passed between stages |
//! | [`output`] | CLI output formatting |
//!
//! # Failure Policy
//!
//! Bad file names, photos without a front scan, and individual copy failures
//! are logged and skipped; a run always finishes. The only fatal conditions
//! are an unreadable source directory and a destination that can't be
//! created.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod plan;
pub mod process;
pub mod reconcile;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
