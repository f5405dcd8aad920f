//! oxo: generate a documentation page from commented source files.
//!
//! `oxo -t "My Lib" -i src/*.js -o docs/index.html`
//!
//! Repeat `-i` to group inputs and `-s` to title each group:
//! `oxo -s Core -i core/*.js -s Plugins -i plugins/*.js -o docs/index.html`

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use oxo::model::{Page, SourceText};
use oxo::{assemble, render, Config};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "oxo",
    about = "Generate documentation from block comments in source files"
)]
struct Cli {
    /// Page title
    #[arg(short = 't', long, default_value = oxo::config::DEFAULT_TITLE)]
    title: String,

    /// Page description (markdown)
    #[arg(short = 'd', long, default_value = "")]
    description: String,

    /// Section title. Repeat once per -i group to split the page into sections.
    #[arg(short = 's', long = "section-title")]
    section_titles: Vec<String>,

    /// Input files or glob patterns. Each -i starts a new group.
    #[arg(short = 'i', long = "infile", required = true, num_args = 1.., action = ArgAction::Append)]
    infiles: Vec<Vec<String>>,

    /// Output file
    #[arg(short = 'o', long)]
    outfile: PathBuf,

    /// Output format: html (default), json, markdown
    #[arg(short = 'f', long, default_value = oxo::config::DEFAULT_FORMAT)]
    format: String,

    /// Language label for code blocks
    #[arg(short = 'l', long, default_value = oxo::config::DEFAULT_LANGUAGE)]
    language: String,

    /// Log debug output
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = Config::new(cli.section_titles, cli.infiles, cli.outfile)?
        .with_title(cli.title)
        .with_description(cli.description)
        .with_format(cli.format)
        .with_language(cli.language);

    run(config)
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(config: Config) -> Result<()> {
    // Resolve the renderer before touching any input
    let renderer = render::create_renderer(&config.format, &config.language)?;

    let sources = config
        .inputs
        .try_flat_map(|pattern| expand_pattern(&pattern))?
        .try_map(|path| read_source(&path))?;
    log::debug!("parsing {} file(s)", sources.len());

    let page = Page {
        title: config.title,
        description: config.description,
        tree: assemble(sources),
    };
    let output = renderer.render(&page)?;

    let out_dir = config
        .outfile
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;
    fs::write(&config.outfile, output)
        .with_context(|| format!("failed to write {}", config.outfile.display()))?;

    for asset in renderer.assets() {
        let path = out_dir.join(asset.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, asset.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    log::info!("wrote {}", config.outfile.display());
    Ok(())
}

fn read_source(path: &Path) -> Result<SourceText> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(SourceText::new(path.to_string_lossy(), text))
}

/// Expand one input argument into file paths.
///
/// Plain paths are passed through so a missing file fails when it is read.
/// Glob patterns expand to their sorted matches.
fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob(pattern) {
        return Ok(vec![PathBuf::from(pattern)]);
    }
    let mut matches: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    if matches.is_empty() {
        log::warn!("no files matched: {}", pattern);
    }
    matches.sort();
    Ok(matches)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn infile_groups_by_occurrence() {
        let cli = Cli::try_parse_from([
            "oxo", "-i", "a.js", "b.js", "-i", "c.js", "-o", "out.html",
        ])
        .unwrap();
        assert_eq!(cli.infiles, vec![vec!["a.js", "b.js"], vec!["c.js"]]);
        assert_eq!(cli.title, "Documentation");
        assert_eq!(cli.format, "html");
    }

    #[test]
    fn section_titles_collect_in_order() {
        let cli = Cli::try_parse_from([
            "oxo", "-s", "Core", "-i", "a.js", "-s", "Extra", "-i", "b.js", "-o", "o.html",
        ])
        .unwrap();
        assert_eq!(cli.section_titles, ["Core", "Extra"]);
    }

    #[test]
    fn glob_detection() {
        assert!(is_glob("src/*.js"));
        assert!(is_glob("lib/[ab].js"));
        assert!(!is_glob("lib/math.js"));
    }

    #[test]
    fn plain_path_passes_through() {
        assert_eq!(
            expand_pattern("does/not/exist.js").unwrap(),
            [PathBuf::from("does/not/exist.js")]
        );
    }
}
