//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to the provisioning
//! service. All CLI code uses `CliContext` for dependency access.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use geoalbum_cli::presentation::report_fetch_failures;
use geoalbum_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(ctx: &CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Place {
            latitude,
            longitude,
        } => handlers::place::execute(ctx, latitude, longitude).await,
        Commands::List => handlers::list::execute(ctx).await,
        Commands::Photos { location } => handlers::photos::execute(ctx, location).await,
        Commands::Fetch { location } => handlers::fetch::execute(ctx, location).await,
        Commands::Next { location } => handlers::fetch::next(ctx, location).await,
        Commands::Image { photo, out } => {
            handlers::image::execute(ctx, photo, out.as_deref()).await
        }
        Commands::RemovePhoto { photo } => handlers::remove::photo(ctx, photo).await,
        Commands::RemoveLocation { location } => {
            handlers::remove::location(ctx, location).await
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.take() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::from_cli(&cli)).await?;
    let mut events = ctx.events().subscribe();

    let result = dispatch(&ctx, command).await;
    report_fetch_failures(&mut events);

    if let Err(err) = result {
        let cli_err = CliError::from_anyhow(&err);
        // The alert above already covers search failures
        if !matches!(cli_err, CliError::Fetch(_)) {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(cli_err.exit_code());
    }

    Ok(())
}
