use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use warden::config::Config;
use warden::policy::Policy;
use warden::state::AppState;

#[derive(Parser)]
#[command(name = "warden", version, about = "Role-based access control demo API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the role → permission table and exit
    Roles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warden=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();

    let policy = Policy::load(config.policy_path.as_deref()).inspect_err(|e| {
        tracing::error!("Refusing to start with invalid policy: {}", e);
    })?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Roles => {
            for (role, permissions) in policy.roles.iter() {
                let names: Vec<String> = permissions.iter().map(|p| p.to_string()).collect();
                println!("{:<10} {}", role.to_string(), names.join(", "));
            }
            Ok(())
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            tracing::info!(
                "Loaded {} roles and {} accounts",
                policy.roles.iter().count(),
                policy.users.len()
            );

            let app = warden::app(AppState::from_policy(policy)?);
            let addr = config.addr();
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on {}", addr);
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
