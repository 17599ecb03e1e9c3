use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::build_configuration::domain::Category;

/// Configure a PC build around a graphics card
#[derive(Parser, Debug)]
#[command(name = "pc-builder")]
#[command(version)]
#[command(
    about = "Configure a PC build around a graphics card: compatible parts, new vs. used prices and marketplace listings",
    long_about = None
)]
pub struct Args {
    /// Component catalog JSON file (defaults to the bundled catalog)
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Graphics card to build around (defaults to the first in the catalog)
    #[arg(short, long, value_name = "NAME")]
    pub gpu: Option<String>,

    /// Motherboard to use instead of the first compatible one
    #[arg(long, value_name = "NAME")]
    pub motherboard: Option<String>,

    /// Processor to use instead of the first compatible one
    #[arg(long, value_name = "NAME")]
    pub cpu: Option<String>,

    /// Memory kit to use instead of the first one
    #[arg(long, value_name = "NAME")]
    pub ram: Option<String>,

    /// Power supply to use instead of the first compatible one
    #[arg(long, value_name = "NAME")]
    pub psu: Option<String>,

    /// Case to use instead of the first compatible one
    #[arg(long = "case", value_name = "NAME")]
    pub case: Option<String>,

    /// CPU cooler to use instead of the first one
    #[arg(long, value_name = "NAME")]
    pub cooler: Option<String>,

    /// Output format: markdown, csv or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to config file (defaults to ./pc-builder.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List every compatible option for the graphics card instead of a build
    #[arg(long)]
    pub show_compatible: bool,

    /// Skip marketplace listing suggestions
    #[arg(long)]
    pub no_listings: bool,

    /// Print the graphics cards in the catalog and exit
    #[arg(long)]
    pub list_gpus: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Component names given on the command line, keyed by category
    pub fn picks(&self) -> BTreeMap<Category, String> {
        [
            (Category::Gpu, &self.gpu),
            (Category::Motherboard, &self.motherboard),
            (Category::Cpu, &self.cpu),
            (Category::Ram, &self.ram),
            (Category::Psu, &self.psu),
            (Category::Case, &self.case),
            (Category::Cooler, &self.cooler),
        ]
        .into_iter()
        .filter_map(|(category, name)| name.clone().map(|n| (category, n)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["pc-builder"]).unwrap();
        assert!(args.catalog.is_none());
        assert!(args.format.is_none());
        assert!(!args.show_compatible);
        assert!(!args.no_listings);
        assert!(!args.quiet);
        assert!(args.picks().is_empty());
    }

    #[test]
    fn test_parse_component_picks() {
        let args = Args::try_parse_from([
            "pc-builder",
            "-g",
            "RTX 4070",
            "--psu",
            "Corsair RM850x",
            "--case",
            "NZXT H510",
        ])
        .unwrap();

        let picks = args.picks();
        assert_eq!(picks.len(), 3);
        assert_eq!(picks[&Category::Gpu], "RTX 4070");
        assert_eq!(picks[&Category::Psu], "Corsair RM850x");
        assert_eq!(picks[&Category::Case], "NZXT H510");
    }

    #[test]
    fn test_parse_format() {
        let args = Args::try_parse_from(["pc-builder", "-f", "csv"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Csv));

        let args = Args::try_parse_from(["pc-builder", "--format", "MD"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_parse_invalid_format() {
        let result = Args::try_parse_from(["pc-builder", "-f", "xlsx"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "pc-builder",
            "--show-compatible",
            "--no-listings",
            "--list-gpus",
            "-q",
        ])
        .unwrap();
        assert!(args.show_compatible);
        assert!(args.no_listings);
        assert!(args.list_gpus);
        assert!(args.quiet);
    }
}
