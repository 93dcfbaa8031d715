//! CLI output formatting.
//!
//! Each function returns display lines (`Vec<String>`) so the formatting is
//! testable without capturing stdout; `main` does the printing. Diagnostics
//! (skipped files, codec errors) go through `tracing` instead and land on
//! stderr.
//!
//! # Output Format
//!
//! ```text
//! Copying 3 photos → output/output
//! 001 image 1
//!     front: Box_0001_a.jpg → 1.jpg (2400x1600 → 1680x1120, 1.20 mb → 412.33 kb)
//!     back: Box_0001_b.jpg → 1_back.jpg (2400x1600 → 1680x1120, 980.10 kb → 301.20 kb)
//! 002 image 2
//!     front: FAILED Source image not found: scans/Box_0002.jpg
//!
//! Scanned 5 files (1 rejected, 1 without a front)
//! Copied 2 fronts, 1 back, 1 failed
//! ```

use crate::process::{CopySide, ProcessEvent, RunReport};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn side_label(side: CopySide) -> &'static str {
    match side {
        CopySide::Front => "front",
        CopySide::Back => "back",
    }
}

/// Human-readable byte count in decimal units.
///
/// ```text
/// 999        → 999 bytes
/// 1_500      → 1.50 kb
/// 2_340_000  → 2.34 mb
/// ```
pub fn format_bytes(total: u64) -> String {
    let bytes = total as f64;
    if bytes < 1e3 {
        format!("{} bytes", total)
    } else if bytes < 1e6 {
        format!("{:.2} kb", bytes / 1e3)
    } else if bytes < 1e9 {
        format!("{:.2} mb", bytes / 1e6)
    } else if bytes < 1e12 {
        format!("{:.2} gb", bytes / 1e9)
    } else {
        format!("{} bytes", total)
    }
}

/// Format a single copy progress event as display lines.
///
/// The photo header is printed with its front event; back events only add
/// an indented line underneath.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started {
            photos,
            destination,
        } => vec![format!(
            "Copying {} photos \u{2192} {}",
            photos,
            destination.display()
        )],
        ProcessEvent::Copied {
            index,
            image_id,
            side,
            source,
            destination,
            outcome,
        } => {
            let mut lines = Vec::new();
            if *side == CopySide::Front {
                lines.push(format!("{} image {}", format_index(*index), image_id));
            }
            lines.push(format!(
                "    {}: {} \u{2192} {} ({}x{} \u{2192} {}x{}, {} \u{2192} {})",
                side_label(*side),
                file_name(source),
                file_name(destination),
                outcome.original.width,
                outcome.original.height,
                outcome.resized.width,
                outcome.resized.height,
                format_bytes(outcome.original_bytes),
                format_bytes(outcome.resized_bytes),
            ));
            lines
        }
        ProcessEvent::Failed {
            index,
            image_id,
            side,
            error,
            ..
        } => {
            let mut lines = Vec::new();
            if *side == CopySide::Front {
                lines.push(format!("{} image {}", format_index(*index), image_id));
            }
            lines.push(format!("    {}: FAILED {}", side_label(*side), error));
            lines
        }
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

/// Format the end-of-run summary.
pub fn format_run_report(report: &RunReport) -> Vec<String> {
    let s = &report.summary;
    vec![
        String::new(),
        format!(
            "Scanned {} ({} rejected, {} without a front)",
            plural(report.scanned, "file"),
            report.rejected,
            report.unresolved
        ),
        format!(
            "Copied {}, {}, {} failed",
            plural(s.fronts_copied, "front"),
            plural(s.backs_copied, "back"),
            s.failed
        ),
        format!("Output: {}", report.destination.display()),
    ]
}

/// Print the end-of-run summary to stdout.
pub fn print_run_report(report: &RunReport) {
    for line in format_run_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{CopyOutcome, Dimensions};
    use crate::process::ProcessSummary;
    use std::path::PathBuf;

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(999), "999 bytes");
        assert_eq!(format_bytes(1_000), "1.00 kb");
        assert_eq!(format_bytes(1_500), "1.50 kb");
        assert_eq!(format_bytes(2_340_000), "2.34 mb");
        assert_eq!(format_bytes(7_250_000_000), "7.25 gb");
    }

    #[test]
    fn format_bytes_huge_falls_back_to_bytes() {
        assert_eq!(format_bytes(2_000_000_000_000), "2000000000000 bytes");
    }

    #[test]
    fn format_index_pads_to_three() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    fn outcome() -> CopyOutcome {
        CopyOutcome {
            original: Dimensions::new(2000, 1000),
            resized: Dimensions::new(1400, 700),
            original_bytes: 1_200_000,
            resized_bytes: 412_330,
        }
    }

    #[test]
    fn format_started() {
        let lines = format_process_event(&ProcessEvent::Started {
            photos: 3,
            destination: PathBuf::from("output/output"),
        });
        assert_eq!(lines, vec!["Copying 3 photos \u{2192} output/output"]);
    }

    #[test]
    fn format_front_copy_has_header() {
        let lines = format_process_event(&ProcessEvent::Copied {
            index: 1,
            image_id: 7,
            side: CopySide::Front,
            source: PathBuf::from("/scans/Box_0007_a.jpg"),
            destination: PathBuf::from("output/output/07.jpg"),
            outcome: outcome(),
        });
        assert_eq!(
            lines,
            vec![
                "001 image 7".to_string(),
                "    front: Box_0007_a.jpg \u{2192} 07.jpg (2000x1000 \u{2192} 1400x700, 1.20 mb \u{2192} 412.33 kb)"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn format_back_copy_has_no_header() {
        let lines = format_process_event(&ProcessEvent::Copied {
            index: 1,
            image_id: 7,
            side: CopySide::Back,
            source: PathBuf::from("/scans/Box_0007_b.jpg"),
            destination: PathBuf::from("output/output/07_back.jpg"),
            outcome: outcome(),
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("    back: Box_0007_b.jpg"));
    }

    #[test]
    fn format_failed_front() {
        let lines = format_process_event(&ProcessEvent::Failed {
            index: 2,
            image_id: 9,
            side: CopySide::Front,
            source: PathBuf::from("/scans/Box_0009.jpg"),
            error: "Source image not found: /scans/Box_0009.jpg".into(),
        });
        assert_eq!(
            lines,
            vec![
                "002 image 9".to_string(),
                "    front: FAILED Source image not found: /scans/Box_0009.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn format_report_counts() {
        let report = RunReport {
            destination: PathBuf::from("output/output"),
            scanned: 5,
            rejected: 1,
            unresolved: 1,
            planned: 2,
            summary: ProcessSummary {
                fronts_copied: 2,
                backs_copied: 1,
                failed: 0,
            },
        };
        assert_eq!(
            format_run_report(&report),
            vec![
                String::new(),
                "Scanned 5 files (1 rejected, 1 without a front)".to_string(),
                "Copied 2 fronts, 1 back, 0 failed".to_string(),
                "Output: output/output".to_string(),
            ]
        );
    }
}
