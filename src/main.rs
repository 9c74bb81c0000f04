//! rtuforge's main application entry point.
//! Parses the command line, runs the generation pipeline and reports
//! the outcome.

use rtuforge::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    logger::init_logger,
    pipeline::generate,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration from the arguments
/// 2. Reads the workbook and generates every device project
/// 3. Prints the generated directories and a summary
fn run(args: Args) -> Result<()> {
    let config = Config::from_args(&args)?;
    let summary = generate(&config)?;

    for dir in &summary.generated {
        println!("Generated: '{}'", dir.display());
    }
    println!(
        "Generation completed successfully: {} project(s) in {}, {} warning(s).",
        summary.generated.len(),
        config.output_root.display(),
        summary.warnings.len()
    );
    Ok(())
}
