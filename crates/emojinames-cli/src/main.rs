use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use emojinames_catalog::{EmojiTestData, ImageCatalog, ImageDirectory, ProviderError, UnicodeMetadata};
use emojinames_core::{Config, OutputStyle};
use emojinames_engine::{
    quote_list, validate_omit_groups, AssembleError, AssemblerOptions, CatalogAssembler, NameResolver,
};

const DEFAULT_CONFIG_FILE: &str = "emojinames.toml";

/// Exit status for configuration mistakes (unknown group names)
const EXIT_CONFIG: u8 = 2;

/// emojinames - Emoji display names and image catalog generator
#[derive(Parser, Debug)]
#[command(name = "emojinames")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: emojinames.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing the images
    #[arg(short = 's', long = "srcdir", value_name = "DIR")]
    src_dir: Option<PathBuf>,

    /// Directory the catalog is written to
    #[arg(short = 'd', long = "dstdir", value_name = "DIR")]
    dst_dir: Option<PathBuf>,

    /// Pretty-print the JSON file
    #[arg(short, long)]
    pretty_print: bool,

    /// Sequences allowed to lack an image before failing, -1 for no limit
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    missing_limit: Option<i64>,

    /// Groups to omit (default "Misc", "Flags"); give no names to keep all
    #[arg(long, value_name = "NAME", num_args = 0..)]
    omit_groups: Option<Vec<String>>,

    /// Print progress and every sequence without an image
    #[arg(short, long)]
    verbose: bool,

    /// Path to emoji-test.txt
    #[arg(long, value_name = "FILE")]
    emoji_test: Option<PathBuf>,

    /// Path to UnicodeData.txt, for code point names
    #[arg(long, value_name = "FILE")]
    unicode_data: Option<PathBuf>,

    /// Path to the alias table
    #[arg(long, value_name = "FILE")]
    aliases: Option<PathBuf>,

    /// Path to the excluded sequence list
    #[arg(long, value_name = "FILE")]
    excluded: Option<PathBuf>,

    /// Image file name prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Image file extension
    #[arg(long)]
    extension: Option<String>,

    /// Catalog file name inside the destination directory
    #[arg(long, value_name = "NAME")]
    output_file: Option<String>,
}

impl Cli {
    /// Overlay command-line values on the loaded config
    fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.src_dir {
            config.paths.src_dir = dir.clone();
        }
        if let Some(dir) = &self.dst_dir {
            config.paths.dst_dir = dir.clone();
        }
        if let Some(file) = &self.output_file {
            config.paths.output_file = file.clone();
        }
        if let Some(path) = &self.emoji_test {
            config.paths.emoji_test = path.clone();
        }
        if self.unicode_data.is_some() {
            config.paths.unicode_data = self.unicode_data.clone();
        }
        if self.aliases.is_some() {
            config.paths.aliases = self.aliases.clone();
        }
        if self.excluded.is_some() {
            config.paths.excluded = self.excluded.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.images.prefix = prefix.clone();
        }
        if let Some(extension) = &self.extension {
            config.images.extension = extension.clone();
        }
        if let Some(limit) = self.missing_limit {
            config.missing_limit = limit;
        }
        if let Some(groups) = &self.omit_groups {
            config.omit_groups = groups.clone();
        }
        if self.pretty_print {
            config.pretty_print = true;
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(assemble_err) = err.downcast_ref::<AssembleError>() {
                return report_assemble_error(assemble_err);
            }
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        Config::from_file(Path::new(DEFAULT_CONFIG_FILE))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    Ok(cli.apply(config))
}

fn report_assemble_error(err: &AssembleError) -> ExitCode {
    match err.diagnostic() {
        Some(diag) => eprintln!("{}", diag.to_string().red()),
        None => eprintln!("{} {}", "error:".red().bold(), err),
    }

    if let AssembleError::UnknownGroups { valid, .. } = err {
        eprintln!("valid groups are:\n  {}", valid.join("\n  "));
        return ExitCode::from(EXIT_CONFIG);
    }
    ExitCode::FAILURE
}

/// Generate the catalog and return the path it was written to
fn run(cli: &Cli) -> Result<PathBuf> {
    let config = load_config(cli)?;
    generate(&config, cli.verbose)
}

fn generate(config: &Config, verbose: bool) -> Result<PathBuf> {
    let src_dir = &config.paths.src_dir;
    if !src_dir.is_dir() {
        return Err(ProviderError::DirectoryNotFound(src_dir.display().to_string()).into());
    }

    let mut metadata = EmojiTestData::from_file(&config.paths.emoji_test)
        .context("Failed to load emoji metadata")?;
    if let Some(path) = &config.paths.unicode_data {
        metadata = metadata
            .with_unicode_data_file(path)
            .context("Failed to load code point names")?;
    }

    validate_omit_groups(&metadata, &config.omit_groups)?;
    if config.omit_groups.is_empty() {
        println!("{}", "keeping all groups".cyan());
    } else {
        println!(
            "{} {} group{}: {}",
            "omitting".cyan(),
            config.omit_groups.len(),
            if config.omit_groups.len() == 1 { "" } else { "s" },
            quote_list(&config.omit_groups)
        );
    }

    std::fs::create_dir_all(&config.paths.dst_dir)
        .with_context(|| format!("Failed to create {}", config.paths.dst_dir.display()))?;

    println!("{} {}", "src dir:".cyan(), src_dir.display());
    let mut images = ImageDirectory::scan(
        src_dir,
        &config.images.extension,
        &config.images.prefix,
        &metadata,
    )?;
    if let Some(path) = &config.paths.aliases {
        images = images.with_aliases_file(path, &metadata)?;
    }
    if let Some(path) = &config.paths.excluded {
        images = images.with_excluded_file(path, &metadata)?;
    }
    println!("found {} image sequences", images.images().len());

    if verbose {
        eprintln!(
            "{} {} groups from {}, missing limit {}",
            "Using".cyan(),
            metadata.groups().len(),
            metadata.source(),
            config.missing_limit()
        );
    }

    let options = AssemblerOptions {
        omit_groups: config.omit_groups.clone(),
        missing_limit: config.missing_limit(),
        verbose,
    };
    let result = CatalogAssembler::new(&metadata, &images, NameResolver::builtin(), options).assemble()?;

    let output = config.paths.output_path();
    result
        .catalog
        .save_to_file(&output, OutputStyle::from_pretty_flag(config.pretty_print))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if result.missing > 0 {
        println!(
            "{} {} sequences have no image",
            "Note:".yellow(),
            result.missing
        );
    }
    if result.warning_count() > 0 {
        println!("{} {} warnings", "Note:".yellow(), result.warning_count());
    }
    println!(
        "{} {} entries in {} categories",
        "✓".green(),
        result.catalog.entry_count(),
        result.catalog.category_count()
    );
    println!("wrote {}", output.display());

    Ok(output)
}
