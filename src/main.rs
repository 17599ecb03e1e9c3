use pc_builder::adapters::outbound::catalog::BundledCatalogReader;
use pc_builder::adapters::outbound::console::StderrProgressReporter;
use pc_builder::adapters::outbound::filesystem::FileSystemCatalogReader;
use pc_builder::adapters::outbound::marketplace::MockMarketplaceRepository;
use pc_builder::application::dto::{BuildRequest, OutputFormat};
use pc_builder::application::factories::{FormatterFactory, PresenterFactory, ReportDestination};
use pc_builder::application::read_models::BuildReadModelBuilder;
use pc_builder::application::use_cases::ConfigureBuildUseCase;
use pc_builder::build_configuration::domain::PriceFormat;
use pc_builder::cli::Args;
use pc_builder::config::{self, ConfigFile};
use pc_builder::ports::outbound::{CatalogReader, ProgressReporter};
use pc_builder::shared::error::ExitCode;
use pc_builder::shared::Result;
use std::path::PathBuf;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!("\nPlease try again later or contact support if the problem persists.");
        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Settings merged from CLI arguments, config file and defaults
struct RunOptions {
    format: OutputFormat,
    price_format: PriceFormat,
    destination: ReportDestination,
    show_compatible: bool,
    list_gpus: bool,
    quiet: bool,
}

fn run(args: Args) -> Result<()> {
    let reporter = progress_reporter(args.quiet);
    let config = load_config(&args, &reporter)?;

    // CLI > config > defaults
    let catalog_path = args.catalog.clone().or_else(|| config.catalog.clone());
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let destination = if args.list_gpus {
        ReportDestination::verbatim(args.output.as_deref())
    } else {
        ReportDestination::for_report(args.output.as_deref(), format)
    };
    let options = RunOptions {
        format,
        price_format: resolve_price_format(&config)?,
        destination,
        show_compatible: args.show_compatible,
        list_gpus: args.list_gpus,
        quiet: args.quiet,
    };

    let mut builder = BuildRequest::builder();
    for (category, name) in args.picks() {
        builder = builder.pick(category, name);
    }
    let request = builder
        .defaults(&config.selection_picks()?)
        .include_listings(!args.no_listings && config.include_listings.unwrap_or(true))
        .build()?;

    match catalog_path {
        Some(path) => run_with(FileSystemCatalogReader::new(path), request, options),
        None => run_with(BundledCatalogReader::new(), request, options),
    }
}

/// Runs the selected operation against one catalog source
fn run_with<CR: CatalogReader>(
    catalog_reader: CR,
    request: BuildRequest,
    options: RunOptions,
) -> Result<()> {
    let presenter = PresenterFactory::create(&options.destination);

    if options.list_gpus {
        let catalog = catalog_reader.load_catalog()?;
        let names: Vec<&str> = catalog.gpus().iter().map(|g| g.name.as_str()).collect();
        let mut listing = names.join("\n");
        listing.push('\n');
        return presenter.present(&listing);
    }

    let use_case = ConfigureBuildUseCase::new(
        catalog_reader,
        MockMarketplaceRepository::new(),
        progress_reporter(options.quiet),
    );

    let model = if options.show_compatible {
        let response = use_case.find_compatible(request)?;
        BuildReadModelBuilder::build_compatible(&response, &options.price_format)
    } else {
        let response = use_case.execute(request)?;
        BuildReadModelBuilder::build(&response, &options.price_format)
    };

    progress_reporter(options.quiet).report(FormatterFactory::progress_message(options.format));

    let formatter = FormatterFactory::create(options.format);
    let formatted_output = formatter.format(&model)?;

    presenter.present(&formatted_output)
}

fn progress_reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

/// Loads the explicit config file, or auto-discovers one in the current directory
fn load_config(args: &Args, reporter: &StderrProgressReporter) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(path)?;
        reporter.report(&format!("📄 Loaded config from: {}", path.display()));
        return Ok(config);
    }

    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match config::discover_config(&current_dir)? {
        Some(config) => {
            reporter.report(&format!(
                "📄 Auto-discovered config file: {}",
                current_dir.join(config::CONFIG_FILENAME).display()
            ));
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Price display settings from config, falling back to the defaults per field
fn resolve_price_format(config: &ConfigFile) -> Result<PriceFormat> {
    let defaults = PriceFormat::default();
    PriceFormat::new(
        config
            .thousands_separator
            .as_deref()
            .unwrap_or(defaults.thousands_separator()),
        config
            .currency_suffix
            .as_deref()
            .unwrap_or(defaults.currency_suffix()),
    )
}
