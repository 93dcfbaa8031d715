use clap::{CommandFactory, FromArgMatches, Parser};
use scan_organizer::config::{self, RunConfig};
use scan_organizer::imaging::RustBackend;
use scan_organizer::{output, process};
use std::path::{Path, PathBuf};

/// Help text `about` is filled in at runtime from `config.toml`.
#[derive(Parser)]
#[command(name = "scan-organizer")]
#[command(version)]
#[command(after_help = "\
Scanner files are expected as <album>_<id>.jpg (front), <album>_<id>_a.jpg
(enhanced front, preferred) and <album>_<id>_b.jpg (back). Output goes to
output/<name>/, which is deleted and rebuilt on every run.")]
struct Cli {
    /// Directory containing the scanner's .jpg files
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Output directory name, created under output/
    #[arg(short = 'o', long = "output", default_value = "output")]
    output: String,

    /// Skip back scans; fronts are named NNN_front.jpg
    #[arg(long = "skipBack")]
    skip_back: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let app_config = config::load_config(Path::new("."))?;
    let matches = Cli::command()
        .about(app_config.about.description.clone())
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let run = RunConfig::new(cli.input, cli.output, cli.skip_back, &app_config);

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_process_event(&event) {
                println!("{}", line);
            }
        }
    });
    let result = process::organize(&RustBackend::new(), &run, Some(tx));
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;

    let report = result?;
    output::print_run_report(&report);
    Ok(())
}

/// Log to stderr. `RUST_LOG` overrides the default level.
fn init_tracing() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "scan_organizer=info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();
}
