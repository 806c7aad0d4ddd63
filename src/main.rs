use asset_manifest::{generate, types::DEFAULT_LANG_CONFIG, BuildConfig, Variant};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gen-assets-list")]
#[command(about = "Scan the asset tree and generate the runtime assets list", long_about = None)]
#[command(version)]
struct Cli {
    /// Assets root directory (all manifest paths are relative to it)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Manifest schema to emit
    #[arg(long, value_enum, default_value_t = VariantArg::Full)]
    variant: VariantArg,

    /// Output file (defaults to the variant's filename inside the root)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Merge discovered language bundles into the locale configuration
    #[arg(long)]
    merge_lang: bool,

    /// Locale configuration file (implies --merge-lang)
    #[arg(long)]
    lang_config: Option<PathBuf>,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Every category, written to assets-list.json
    Full,
    /// Images and animations only, written to list.json
    Compact,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Full => Variant::Full,
            VariantArg::Compact => Variant::Compact,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let lang_config = cli
        .lang_config
        .or_else(|| cli.merge_lang.then(|| PathBuf::from(DEFAULT_LANG_CONFIG)));

    let config = BuildConfig {
        assets_root: cli.root,
        variant: cli.variant.into(),
        output: cli.output,
        lang_config,
    };

    match generate(&config) {
        Ok(path) => {
            if !cli.quiet {
                eprintln!("Success: assets list written to {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
