//! Destination setup and the copy/resize pipeline.
//!
//! Final stage of an organize run. The destination directory is rebuilt from
//! scratch ([`prepare_destination`]), then every [`PlannedCopy`] is resized
//! and written through the [`ImageBackend`].
//!
//! ## Failure isolation
//!
//! Per-image failures never stop the run:
//!
//! - front fails → logged, the rest of that photo (its back) is skipped
//! - back fails → logged, only the back is missing
//!
//! Only a destination that can't be prepared is fatal, and in that case no
//! copy is attempted at all.
//!
//! ## Progress
//!
//! Callers may pass a channel sender; one [`ProcessEvent`] is sent per copy
//! attempt. The CLI drains it on a printer thread and formats the events with
//! [`output::format_process_event`](crate::output::format_process_event).

use crate::config::RunConfig;
use crate::imaging::{BackendError, CopyOutcome, ImageBackend, resize_and_copy};
use crate::plan::plan;
use crate::reconcile::reconcile_all;
use crate::scan::{ScanError, scan};
use crate::types::{CopyTarget, PlannedCopy};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("cannot create base output directory {path}: {source}")]
    CreateBase {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot remove previous output {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot create output directory {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Which half of a photo a copy event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySide {
    Front,
    Back,
}

/// Progress event sent once per copy attempt.
#[derive(Debug, Clone)]
pub enum ProcessEvent {
    Started {
        photos: usize,
        destination: PathBuf,
    },
    Copied {
        /// 1-based position in the plan.
        index: usize,
        image_id: u64,
        side: CopySide,
        source: PathBuf,
        destination: PathBuf,
        outcome: CopyOutcome,
    },
    Failed {
        index: usize,
        image_id: u64,
        side: CopySide,
        source: PathBuf,
        error: String,
    },
}

/// Counts from one pipeline execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub fronts_copied: usize,
    pub backs_copied: usize,
    pub failed: usize,
}

/// Counts from a full organize run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub destination: PathBuf,
    /// `.jpg` files found in the source directory.
    pub scanned: usize,
    /// Files whose names didn't decode.
    pub rejected: usize,
    /// Image ids dropped for lack of a front scan.
    pub unresolved: usize,
    /// Photos planned for copying.
    pub planned: usize,
    pub summary: ProcessSummary,
}

/// Create `base/name` empty, removing whatever was there before.
///
/// `base` itself is created when missing and otherwise left alone.
pub fn prepare_destination(base: &Path, name: &str) -> Result<PathBuf, SetupError> {
    if !base.is_dir() {
        fs::create_dir_all(base).map_err(|source| SetupError::CreateBase {
            path: base.to_path_buf(),
            source,
        })?;
    }

    let destination = base.join(name);
    if destination.is_dir() {
        fs::remove_dir_all(&destination).map_err(|source| SetupError::Remove {
            path: destination.clone(),
            source,
        })?;
    }

    fs::create_dir(&destination).map_err(|source| SetupError::Create {
        path: destination.clone(),
        source,
    })?;
    Ok(destination)
}

fn copy_one(
    backend: &impl ImageBackend,
    target: &CopyTarget,
    config: &RunConfig,
) -> Result<CopyOutcome, BackendError> {
    resize_and_copy(
        backend,
        &target.source,
        &target.destination,
        config.resize_factor,
        config.quality,
    )
}

/// Copy every planned photo. Never fails as a whole; see the module docs.
pub fn execute(
    backend: &impl ImageBackend,
    planned: &[PlannedCopy],
    config: &RunConfig,
    events: Option<&Sender<ProcessEvent>>,
) -> ProcessSummary {
    let mut summary = ProcessSummary::default();
    let send = |event: ProcessEvent| {
        if let Some(tx) = events {
            let _ = tx.send(event);
        }
    };

    for (i, entry) in planned.iter().enumerate() {
        let index = i + 1;
        let copies = std::iter::once((CopySide::Front, &entry.front))
            .chain(entry.back.as_ref().map(|back| (CopySide::Back, back)));

        for (side, target) in copies {
            match copy_one(backend, target, config) {
                Ok(outcome) => {
                    match side {
                        CopySide::Front => summary.fronts_copied += 1,
                        CopySide::Back => summary.backs_copied += 1,
                    }
                    send(ProcessEvent::Copied {
                        index,
                        image_id: entry.image_id,
                        side,
                        source: target.source.clone(),
                        destination: target.destination.clone(),
                        outcome,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to copy {:?} of image {} ({}): {}",
                        side,
                        entry.image_id,
                        target.source.display(),
                        e
                    );
                    summary.failed += 1;
                    send(ProcessEvent::Failed {
                        index,
                        image_id: entry.image_id,
                        side,
                        source: target.source.clone(),
                        error: e.to_string(),
                    });
                    // Nothing after a failed front is copied for this photo
                    break;
                }
            }
        }
    }

    summary
}

/// Run the whole pipeline: scan, reconcile, plan, prepare, copy.
pub fn organize(
    backend: &impl ImageBackend,
    config: &RunConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<RunReport, OrganizeError> {
    let scanned = scan(&config.source_dir)?;
    let pairs = reconcile_all(&scanned.records);

    let distinct_ids = {
        let mut ids: Vec<u64> = scanned.records.iter().map(|r| r.image_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    };

    let destination = prepare_destination(&config.base_output_dir, &config.output_name)?;
    let planned = plan(&pairs, &destination, config.copy_back);
    tracing::info!(
        "Copying {} photos to {}",
        planned.len(),
        destination.display()
    );

    if let Some(tx) = &events {
        let _ = tx.send(ProcessEvent::Started {
            photos: planned.len(),
            destination: destination.clone(),
        });
    }
    let summary = execute(backend, &planned, config, events.as_ref());

    Ok(RunReport {
        destination,
        scanned: scanned.records.len() + scanned.rejected.len(),
        rejected: scanned.rejected.len(),
        unresolved: distinct_ids - pairs.len(),
        planned: planned.len(),
        summary,
    })
}
