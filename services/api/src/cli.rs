use crate::form::FormSelection;
use crate::infra::load_shared_catalog;
use crate::interactive::run_interactive;
use crate::server;
use crate::session::{SearchSession, SubmitOutcome};
use crate::views::render_submission;
use clap::{Args, Parser, Subcommand};
use internship_match::config::AppConfig;
use internship_match::error::AppError;
use internship_match::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Internship Matchmaker",
    about = "Rank internship listings against a candidate's skills, location, and sector",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the top internship matches for one set of preferences
    Recommend(RecommendArgs),
    /// List the locations and sectors available for filtering
    Filters(CatalogArgs),
    /// Fill in the search form interactively and browse results
    Interactive(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured internship catalog CSV
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Comma-separated skills, e.g. "Python, SQL, Communication"
    #[arg(long)]
    pub(crate) skills: String,
    /// Preferred location ("All" or omitted for any)
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Preferred sector ("All" or omitted for any)
    #[arg(long)]
    pub(crate) sector: Option<String>,
    /// Internship catalog CSV (defaults to APP_CATALOG_PATH or data/internships.csv)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Internship catalog CSV (defaults to APP_CATALOG_PATH or data/internships.csv)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    // `serve` installs its own subscriber after applying flag overrides.
    if !matches!(command, Command::Serve(_)) {
        init_cli_telemetry()?;
    }

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Filters(args) => run_filters(args),
        Command::Interactive(args) => run_interactive(args),
    }
}

fn init_cli_telemetry() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(())
}

fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        skills,
        location,
        sector,
        catalog,
    } = args;

    let catalog = load_shared_catalog(catalog)?;
    let mut session = SearchSession::default();

    match session.submit(FormSelection::new(skills, location, sector), &catalog) {
        SubmitOutcome::Rejected(err) => println!("warning: {err}"),
        SubmitOutcome::Accepted { .. } => {
            if let Some(submission) = session.last() {
                print!("{}", render_submission(submission));
            }
        }
    }

    Ok(())
}

fn run_filters(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_shared_catalog(args.catalog)?;

    println!("Locations");
    for location in catalog.locations() {
        println!("- {location}");
    }

    println!("\nSectors");
    for sector in catalog.sectors() {
        println!("- {sector}");
    }

    Ok(())
}
