use clap::Parser;
use escoffier::cli::{Cli, Commands, handle_cuisines_command, handle_generate_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("escoffier=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            cuisine,
            temperature,
            style,
            format,
            api_key,
            output,
            out,
        } => {
            handle_generate_command(cuisine, temperature, style, format, api_key, output, out)
                .await
        }
        Commands::Cuisines => {
            handle_cuisines_command();
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
