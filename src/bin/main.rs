use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use notely::{AppState, DatabaseConfig, InMemoryUserStore, UserStore, create_router, create_store};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "notely")]
#[command(about = "API-key authenticated user service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Server {
        #[arg(short, long, env = "PORT", default_value = "8080")]
        port: u16,
        /// Interface to bind
        #[arg(long, env = "NOTELY_BIND", default_value = "0.0.0.0")]
        bind: String,
        #[arg(long, env = "SURREALDB_URL", default_value = "memory")]
        db_url: String,
        /// Keep users in process memory instead of SurrealDB
        #[arg(long, default_value_t = false)]
        ephemeral: bool,
    },
    /// Initialize the database
    Init {
        #[arg(long, env = "SURREALDB_URL", default_value = "memory")]
        db_url: String,
    },
    /// Create a user and print its API key
    CreateUser {
        name: String,
        #[arg(long, env = "SURREALDB_URL", default_value = "memory")]
        db_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("notely=info".parse()?))
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Server {
            port,
            bind,
            db_url,
            ephemeral,
        } => {
            let store: Arc<dyn UserStore> = if ephemeral {
                info!("Using in-memory user store; users are lost on exit");
                Arc::new(InMemoryUserStore::new())
            } else {
                create_store(DatabaseConfig {
                    url: db_url,
                    ..Default::default()
                })
                .await?
            };

            let app = create_router(AppState::new(store));

            let addr = format!("{}:{}", bind, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("Server listening on http://{}", addr);

            axum::serve(listener, app).await?;
        }
        Commands::Init { db_url } => {
            let db_config = DatabaseConfig {
                url: db_url,
                ..Default::default()
            };
            info!("Using database url for initialization: {}", db_config.url);

            info!("Initializing database...");
            let db = notely::create_connection(db_config).await?;
            notely::ensure_schema(&db).await?;
            info!("Database initialized successfully");
        }
        Commands::CreateUser { name, db_url } => {
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("name must not be empty");
            }

            let store = create_store(DatabaseConfig {
                url: db_url,
                ..Default::default()
            })
            .await?;

            let id = store.create_user(name).await?;
            let user = store.get_user_by_id(&id).await?;

            println!("User created successfully!");
            println!();
            println!("  ID:      {}", user.id);
            println!("  Name:    {}", user.name);
            println!("  API key: {}", user.api_key);
            println!();
            println!("Use with: -H 'Authorization: ApiKey {}'", user.api_key);
        }
    }

    Ok(())
}
