use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hal_harvest::config::{find_config_file, load_config, Config};
use hal_harvest::export::{build_filename, write_dashboard, write_records};
use hal_harvest::hal::HalClient;
use hal_harvest::models::{AuthorQuery, PublicationRecord, ResolvedIdentity};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// hal-harvest - Fetch an author's publications from HAL and export them
#[derive(Parser, Debug)]
#[command(name = "hal-harvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch an author's publications from the HAL open archive", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
}

impl OutputFormat {
    fn resolve(self) -> Self {
        if self == OutputFormat::Auto {
            if std::io::stdout().is_terminal() {
                OutputFormat::Table
            } else {
                OutputFormat::Json
            }
        } else {
            self
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve an author's canonical HAL identifier
    #[command(alias = "r")]
    Resolve {
        /// Family name
        family: String,

        /// Given name
        given: String,
    },

    /// Fetch publications for one or more authors and export them as CSV
    #[command(alias = "f")]
    Fetch {
        /// Author as "Family,Given" (repeatable)
        #[arg(long = "author", short, required = true)]
        authors: Vec<String>,

        /// Publication period filter, "YYYY-YYYY"
        #[arg(long)]
        period: Option<String>,

        /// Domain filter by French name, e.g. "Informatique" (repeatable)
        #[arg(long = "domain")]
        domains: Vec<String>,

        /// Document type filter by French name, e.g. "Article de revue" (repeatable)
        #[arg(long = "doc-type")]
        doc_types: Vec<String>,

        /// Directory for the generated CSV (default: config output.data_dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Skip writing the CSV file
        #[arg(long)]
        no_export: bool,
    },

    /// Write the dashboard page embedding the generated chart files
    Dashboard {
        /// Directory for dashboard.html (default: config output.html_dir)
        #[arg(long)]
        html_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("hal_harvest={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    let client = HalClient::from_config(&config.api);
    let format = cli.output.resolve();

    match cli.command {
        Commands::Resolve { family, given } => {
            let identity = client.resolve_identity(&family, &given).await;
            print_identity(&identity, format);
        }

        Commands::Fetch {
            authors,
            period,
            domains,
            doc_types,
            out_dir,
            no_export,
        } => {
            let mut all_records = Vec::new();

            // Sequential per author: one author failing (empty result) never
            // stops the others.
            for author in &authors {
                let (family, given) = parse_author(author)?;
                let mut query = AuthorQuery::new(family, given);
                query.period = period.clone();
                query.domains = domains.clone();
                query.doc_types = doc_types.clone();

                let identity = client
                    .resolve_identity(&query.family_name, &query.given_name)
                    .await;
                let records = client.fetch_publications(&query, &identity).await;
                tracing::info!(
                    author = author.as_str(),
                    id = identity.canonical_id.as_str(),
                    rows = records.len(),
                    "fetched publications"
                );
                all_records.extend(records);
            }

            if !no_export {
                let dir = out_dir.unwrap_or_else(|| config.output.data_dir.clone());
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
                let filename = build_filename(
                    period.as_deref(),
                    domains.first().map(String::as_str),
                    doc_types.first().map(String::as_str),
                );
                let path = dir.join(filename);
                write_records(&path, &all_records)
                    .with_context(|| format!("writing {}", path.display()))?;
                if !cli.quiet {
                    eprintln!("Wrote {} rows to {}", all_records.len(), path.display());
                }
            }

            print_records(&all_records, format);
        }

        Commands::Dashboard { html_dir } => {
            let dir = html_dir.unwrap_or_else(|| config.output.html_dir.clone());
            let path = write_dashboard(&dir).context("writing dashboard")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Parse a "Family,Given" author argument
fn parse_author(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once(',') {
        Some((family, given)) if !family.trim().is_empty() && !given.trim().is_empty() => {
            Ok((family.trim(), given.trim()))
        }
        _ => bail!("invalid author '{raw}': expected \"Family,Given\""),
    }
}

fn print_identity(identity: &ResolvedIdentity, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(identity).expect("identity serializes")
            );
        }
        _ => {
            let kind = if identity.is_stable {
                "idHAL"
            } else if identity.is_unavailable() {
                "aucun"
            } else {
                "document"
            };
            println!("{} ({})", identity.canonical_id, kind);
        }
    }
}

fn print_records(records: &[PublicationRecord], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(records).expect("records serialize")
            );
        }
        _ => {
            use comfy_table::{Attribute, Cell, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["Nom", "Prenom", "Titre", "Année", "Type", "Domaine"]);

            for record in records {
                table.add_row(vec![
                    Cell::new(&record.family_name),
                    Cell::new(&record.given_name),
                    Cell::new(truncate(&record.title, 50)).add_attribute(Attribute::Bold),
                    Cell::new(&record.publication_year),
                    Cell::new(&record.doc_type),
                    Cell::new(&record.domain),
                ]);
            }
            println!("{table}");
        }
    }
}

/// Truncate on a character boundary for table display
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
