use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use olca_explorer::config::ExplorerConfig;
use olca_explorer::constants::{DEFAULT_CONF, IPC_SERVER_HINT};
use olca_explorer::explorer::Explorer;
use olca_explorer::export;
use olca_explorer::ipc::client::IpcClient;
use olca_explorer::report::analysis;

const DEFAULT_SEARCH_TERMS: [&str; 3] = ["electricity", "transport", "steel"];
const SEARCH_PREVIEW: usize = 3;

/// Export flows and processes from a running openLCA instance over IPC
#[derive(Parser, Debug)]
#[command(name = "olca-explorer", version, about)]
struct Args {
    /// Config file, without extension [default: olca-explorer]
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Port of the openLCA IPC server [default: 8080]
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write all flows and processes to a text report (the default)
    Export {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the number of flows and processes
    Summary,
    /// Count flows per type and list the most common categories
    FlowAnalysis {
        /// Number of categories to list
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// Find processes whose name matches, ignoring case
    Search {
        /// Name fragments [default: electricity transport steel]
        terms: Vec<String>,
    },
    /// Write flows and processes to separate CSV files
    Csv {
        #[arg(long)]
        flows: Option<PathBuf>,
        #[arg(long)]
        processes: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("setting default subscriber failed");
    }

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("✗ Error: {:#}", e);
            println!("Make sure openLCA is running with IPC server enabled:");
            println!("{}", IPC_SERVER_HINT);
            ExitCode::from(1)
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config_file = args.config.as_deref().unwrap_or(DEFAULT_CONF);
    let mut conf = olca_explorer::config::init(config_file)
        .with_context(|| format!("failed to load configuration from `{}`", config_file))?;
    if let Some(port) = args.port {
        conf.port = port;
    }

    match args.command.unwrap_or(Command::Export { output: None }) {
        Command::Export { output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&conf.report_file));
            run_export(&conf, output).await
        }
        Command::Summary => run_summary(conf).await,
        Command::FlowAnalysis { top } => run_flow_analysis(conf, top).await,
        Command::Search { terms } => run_search(conf, terms).await,
        Command::Csv { flows, processes } => {
            let flows = flows.unwrap_or_else(|| PathBuf::from(&conf.flows_csv));
            let processes = processes.unwrap_or_else(|| PathBuf::from(&conf.processes_csv));
            run_csv(&conf, flows, processes).await
        }
    }
}

async fn run_export(conf: &ExplorerConfig, output: PathBuf) -> Result<()> {
    println!("Connecting to openLCA IPC server...");
    let client = IpcClient::new(conf)?;
    client.probe().await?;
    println!("✓ Connected successfully!");

    println!("Retrieving flows and processes...");
    println!("Writing to {}...", output.display());
    let summary = export::text_report(&client, &output).await?;

    println!("✓ Database contents exported to {}", output.display());
    println!("  - {} flows", summary.flows);
    println!("  - {} processes", summary.processes);
    println!("  - {} total entities", summary.total_entities);
    Ok(())
}

async fn connected(conf: ExplorerConfig) -> Result<Explorer> {
    let mut explorer = Explorer::with_config(conf);
    if !explorer.connect().await {
        bail!("failed to connect to openLCA on port {}", explorer.port());
    }
    Ok(explorer)
}

async fn run_summary(conf: ExplorerConfig) -> Result<()> {
    let explorer = connected(conf).await?;
    let summary = explorer.get_database_summary().await?;

    println!("Database contains:");
    println!("  - {} flows", summary.flows);
    println!("  - {} processes", summary.processes);
    println!("  - {} total entities", summary.total_entities);
    Ok(())
}

async fn run_flow_analysis(conf: ExplorerConfig, top: usize) -> Result<()> {
    let explorer = connected(conf).await?;
    let flows = explorer.get_flows().await?;

    println!("Flow Types:");
    for (flow_type, count) in analysis::flow_type_counts(&flows) {
        println!("  {}: {}", flow_type, count);
    }

    println!("\nTop {} Flow Categories:", top);
    for (category, count) in analysis::top_categories(&flows, top) {
        println!("  {}: {}", category, count);
    }
    Ok(())
}

async fn run_search(conf: ExplorerConfig, terms: Vec<String>) -> Result<()> {
    let terms = if terms.is_empty() {
        DEFAULT_SEARCH_TERMS.iter().map(|t| t.to_string()).collect()
    } else {
        terms
    };

    let explorer = connected(conf).await?;
    let processes = explorer.get_processes().await?;

    for term in &terms {
        let hits = analysis::search(&processes, term);

        println!("\nProcesses containing '{}': {}", term, hits.len());
        for process in hits.iter().take(SEARCH_PREVIEW) {
            println!("  - {}", process.name);
        }
        if hits.len() > SEARCH_PREVIEW {
            println!("  ... and {} more", hits.len() - SEARCH_PREVIEW);
        }
    }
    Ok(())
}

async fn run_csv(conf: &ExplorerConfig, flows: PathBuf, processes: PathBuf) -> Result<()> {
    let client = IpcClient::new(conf)?;
    let (flow_count, process_count) = export::csv_export(&client, &flows, &processes).await?;

    println!("Exported {} flows to '{}'", flow_count, flows.display());
    println!(
        "Exported {} processes to '{}'",
        process_count,
        processes.display()
    );
    Ok(())
}
