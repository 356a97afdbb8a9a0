//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use env_logger::Env;
use log::{debug, info};

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::{Session, SvgStyle, write_svg};
use chatlens::format::{OutputFormat, to_format_string, write_to_format};
use chatlens::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();
    let scope = args.scope()?;

    let parser = TranscriptParser::with_config(args.parser_config());
    let session = Session::open(&args.input, &parser, args.analysis_config())?;
    info!(
        "Parsed {} messages from {} in {:.2}s",
        session.len(),
        args.input.display(),
        start.elapsed().as_secs_f64()
    );

    let mut report = session.report(&scope, None);

    // An explicitly requested word cloud is fatal when it cannot be built.
    if let (Some(path), Some(config)) = (&args.wordcloud, args.wordcloud_config()) {
        let cloud = session.create_wordcloud(&scope, &config)?;
        write_svg(&cloud, &SvgStyle::default(), path)?;
        report.wordcloud = Some(cloud);
    }

    let format: OutputFormat = args.format.into();
    match &args.output {
        Some(path) => write_to_format(&report, path, format)?,
        None => print!("{}", to_format_string(&report, format)?),
    }

    debug!("Finished in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
