use std::path::PathBuf;

use anyhow::Context as _;
use clap::{command, value_parser, Arg, ArgAction};
use context::{Context, Site};
use renderer::PulldownRenderer;

mod context;
mod generator;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .after_help("Example: md2blog blogs/2026/2026.md --update-index")
        .args(&[
            Arg::new("markdown_file")
                .help("Path to the markdown file to convert")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
            Arg::new("update_index")
                .long("update-index")
                .help("Print a blog card for blog.html (requires manual placement)")
                .action(ArgAction::SetTrue),
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output HTML file path (default: same directory as input)")
                .value_parser(value_parser!(PathBuf)),
            Arg::new("excerpt_length")
                .long("excerpt-length")
                .help("Maximum characters of the card excerpt")
                .value_parser(value_parser!(usize))
                .default_value("150"),
        ])
        .get_matches();

    let markdown_file: &PathBuf = matches
        .get_one("markdown_file")
        .context("markdown_file is required")?;
    let excerpt_length: usize = matches
        .get_one("excerpt_length")
        .copied()
        .unwrap_or(metadata::DEFAULT_EXCERPT_LENGTH);

    let ctx = Context::new(
        markdown_file.to_owned(),
        matches.get_one::<PathBuf>("output").cloned(),
        matches.get_flag("update_index"),
        excerpt_length,
        Site::from_env(),
    )?;

    let conversion = generator::generate(&ctx, &PulldownRenderer)?;
    generator::report(&conversion);

    Ok(())
}
