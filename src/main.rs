//! Folio CLI
//!
//! Operator tool for the portfolio backend:
//! - Read the contact inbox
//! - Send a contact message
//! - Browse the project catalog
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio::{
    default_catalog, filter_projects, projects::load_catalog, AdminView, CategoryFilter, Config,
    ContactField, ContactFlow, HttpBackend, LoggingConfig,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Operator tool for the portfolio site backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/folio/config.toml, then ./folio.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List received contact messages
    Messages,

    /// Send a contact message
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },

    /// List projects
    Projects {
        /// Category (all, frontend, backend, fullstack)
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// JSON catalog file (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("folio={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.backend.base_url = url.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.logging);

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Messages => {
            let backend = HttpBackend::new(&config.backend)?;
            let inbox = AdminView::load(&backend).await;
            let unread = inbox.unread_count();
            match inbox {
                AdminView::Error(message) => {
                    anyhow::bail!("{} (backend: {})", message, backend.base_url())
                }
                AdminView::Messages(messages) if cli.format == "json" => {
                    println!("{}", serde_json::to_string_pretty(&messages)?);
                }
                AdminView::Messages(messages) => {
                    println!(
                        "{:<10} {:<20} {:<28} {:<24} {}",
                        "ID", "From", "Email", "Received", "Subject"
                    );
                    println!("{}", "-".repeat(100));
                    for m in &messages {
                        let marker = if m.read { " " } else { "*" };
                        println!(
                            "{}{:<9} {:<20} {:<28} {:<24} {}",
                            marker,
                            m.id.to_string(),
                            m.name,
                            m.email,
                            m.timestamp.format_local(),
                            m.subject_line()
                        );
                    }
                    println!();
                    println!("{} messages, {} unread", messages.len(), unread);
                }
                AdminView::Empty if cli.format == "json" => println!("[]"),
                AdminView::Empty | AdminView::Loading => {
                    println!("No Messages");
                    println!("{}", folio::admin::EMPTY_INBOX_MESSAGE);
                }
            }
        }

        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let backend = HttpBackend::new(&config.backend)?;
            let mut flow = ContactFlow::new(config.site.contact_reset());
            flow.set_field(ContactField::Name, name);
            flow.set_field(ContactField::Email, email);
            flow.set_field(ContactField::Subject, subject);
            flow.set_field(ContactField::Message, message);

            flow.submit(&backend).await;
            let status = flow.status();
            if !status.success {
                anyhow::bail!("{}", status.message);
            }
            println!("{}", status.message);
        }

        Commands::Projects { category, catalog } => {
            let projects = match catalog {
                Some(path) => load_catalog(&path)?,
                None => default_catalog(),
            };
            let visible = filter_projects(&projects, category);

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else if visible.is_empty() {
                println!("No projects found in this category.");
            } else {
                println!("{:<4} {:<32} {:<12} {}", "ID", "Title", "Category", "Tags");
                println!("{}", "-".repeat(80));
                for p in visible {
                    println!(
                        "{:<4} {:<32} {:<12} {}",
                        p.id,
                        p.title,
                        p.category.label(),
                        p.tags.join(", ")
                    );
                }
            }
        }

        Commands::Config { output } => {
            let content = folio::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied()))
    }

    /// Config pointing at a local port nothing listens on
    async fn unreachable_config() -> Config {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut config = Config::default();
        config.backend.base_url = format!("http://{}", addr);
        config.backend.request_timeout_secs = 5;
        config
    }

    #[test]
    fn test_contact_requires_every_field() {
        let full = [
            "contact", "--name", "A", "--email", "a@b.com", "--subject", "Hi", "--message", "M",
        ];
        match parse(&full).unwrap().command {
            Commands::Contact { subject, .. } => assert_eq!(subject, "Hi"),
            _ => panic!("expected contact command"),
        }

        for missing in ["--name", "--email", "--subject", "--message"] {
            let pos = full.iter().position(|a| *a == missing).unwrap();
            let args: Vec<&str> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != pos && *i != pos + 1)
                .map(|(_, a)| *a)
                .collect();

            let err = parse(&args).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn test_global_flags_and_category() {
        let cli = parse(&["projects", "--category", "backend", "--format", "json"]).unwrap();
        assert_eq!(cli.format, "json");
        match cli.command {
            Commands::Projects { category, catalog } => {
                assert_eq!(category, CategoryFilter::Only(folio::Category::Backend));
                assert!(catalog.is_none());
            }
            _ => panic!("expected projects command"),
        }

        assert!(parse(&["projects", "--category", "mobile"]).is_err());
    }

    #[test]
    fn test_api_url_overrides_config() {
        let cli = parse(&["--api-url", "http://10.0.0.9:5000", "messages"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.backend.base_url, "http://10.0.0.9:5000");
    }

    #[tokio::test]
    async fn test_failed_contact_is_an_error() {
        let cli = parse(&[
            "contact", "--name", "A", "--email", "a@b.com", "--subject", "S", "--message", "M",
        ])
        .unwrap();

        let err = run(cli, unreachable_config().await).await.unwrap_err();
        assert_eq!(err.to_string(), folio::contact::FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_failed_inbox_fetch_is_an_error() {
        let cli = parse(&["messages"]).unwrap();

        let err = run(cli, unreachable_config().await).await.unwrap_err();
        assert!(err
            .to_string()
            .starts_with(folio::admin::FETCH_FAILURE_MESSAGE));
    }
}
