use std::io::Write;
use std::path::Path;

use clap::Parser;

use sloccount::cli::Cli;
use sloccount::language::LanguageRegistry;
use sloccount::output::{JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use sloccount::scanner::DirectoryScanner;
use sloccount::stats::{SlocReport, SlocTally};
use sloccount::{EXIT_FAILURE, EXIT_SUCCESS, SlocCountError};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let Some(root) = cli.source_directory() else {
        println!("{}", SlocCountError::Usage);
        return EXIT_FAILURE;
    };

    match run_impl(root, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn run_impl(root: &Path, cli: &Cli) -> sloccount::Result<()> {
    let registry = LanguageRegistry::default();
    let tally = scan(root, &registry, cli)?;
    tally.check_consistency()?;

    let report = SlocReport::from_tally(&tally);
    let output = match cli.format {
        OutputFormat::Text => TextFormatter::new(cli.color.into()).format(&report)?,
        OutputFormat::Json => JsonFormatter.format(&report)? + "\n",
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Run the scan, on a dedicated pool when `--jobs` is given.
fn scan(root: &Path, registry: &LanguageRegistry, cli: &Cli) -> sloccount::Result<SlocTally> {
    let scanner = DirectoryScanner::new(registry)
        .with_verbose(cli.verbose)
        .with_progress(!cli.quiet);

    let Some(jobs) = cli.jobs else {
        return scanner.scan(root);
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| SlocCountError::WorkerPool(e.to_string()))?;
    if cli.verbose > 1 {
        eprintln!("Counting with {} worker threads", pool.current_num_threads());
    }
    pool.install(|| scanner.scan(root))
}
