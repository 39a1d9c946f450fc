use bankcap_etl::{
    run_query, CsvLoader, CurrencyConverter, EnrichedBankRecord, FileJournal, Journal, Loader,
    MarketCapExtractor, Pipeline, QueryOp, RateTable, SqliteLoader,
};
use clap::{builder::styling, Args, Parser, Subcommand};
use eyre::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;
use url::Url;

/// Archived snapshot of the source page, pinned so reruns see the same table.
const DEFAULT_URL: &str =
    "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Bank Market-Cap ETL: scrape, convert, and load the world's largest banks
#[derive(Parser)]
#[command(name = "bankcap", version, styles = STYLES)]
struct Cli {
    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StoreArgs {
    /// SQLite database file
    #[arg(long, default_value = "banks.db")]
    database: PathBuf,

    /// Destination table name
    #[arg(long, default_value = "Largest_banks")]
    table: String,

    /// Append-only progress journal file
    #[arg(long, default_value = "bankcap.log")]
    journal: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: extract, transform, load, and report
    Run {
        /// URL of the page containing the market-cap table
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,

        /// Exchange-rate CSV file (Currency,Rate)
        #[arg(long, default_value = "exchange_rate.csv")]
        rates: PathBuf,

        /// Output CSV file
        #[arg(long, default_value = "largest_banks.csv")]
        csv: PathBuf,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Run one named query against an already-loaded database
    Query {
        /// The query operation to run
        #[arg(value_enum)]
        op: QueryOp,

        #[command(flatten)]
        store: StoreArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Commands::Run {
            url,
            rates,
            csv,
            store,
        } => run_pipeline(&url, &rates, &csv, &store),
        Commands::Query { op, store } => run_single_query(op, &store),
    }
}

fn run_pipeline(url: &str, rates: &PathBuf, csv: &PathBuf, store: &StoreArgs) -> Result<()> {
    let journal = FileJournal::new(&store.journal);
    journal.record("Preliminaries complete. Initiating ETL process")?;

    let url = Url::parse(url).with_context(|| format!("Invalid source URL: {}", url))?;
    let rates = RateTable::from_csv(rates)
        .with_context(|| format!("Failed to load exchange rates from {}", rates.display()))?;
    log::debug!("Exchange rates: {:?}", rates);

    // The connection is scoped to this function; rusqlite closes it on drop,
    // including the error paths.
    let conn = Connection::open(&store.database)
        .with_context(|| format!("Failed to open database {}", store.database.display()))?;
    journal.record("SQL Connection initiated")?;

    let loaders: Vec<Box<dyn Loader<Item = EnrichedBankRecord> + '_>> = vec![
        Box::new(CsvLoader::new(csv)),
        Box::new(SqliteLoader::new(&conn, &store.table)),
    ];
    let pipeline = Pipeline::new(
        MarketCapExtractor::new(url),
        CurrencyConverter::new(rates),
        loaders,
    );
    let dataset = pipeline.run(&journal)?;
    log::info!("Pipeline complete: {} record(s) loaded", dataset.len());
    // Release the loader borrow on the connection before closing it
    drop(pipeline);

    for op in QueryOp::REPORT {
        run_query(&conn, &op.sql(&store.table), &journal)?;
    }

    conn.close().map_err(|(_, e)| e)?;
    journal.record("Server Connection closed")?;
    journal.record("Process Complete")?;
    Ok(())
}

fn run_single_query(op: QueryOp, store: &StoreArgs) -> Result<()> {
    let journal = FileJournal::new(&store.journal);
    let conn = Connection::open(&store.database)
        .with_context(|| format!("Failed to open database {}", store.database.display()))?;
    let rows = run_query(&conn, &op.sql(&store.table), &journal)?;
    log::info!("{} row(s) returned", rows.len());
    Ok(())
}
