use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ensimpl_core::genes::ENSEMBL_SOURCE_DB;
use ensimpl_core::GeneOrder;
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod output;

use commands::DbArgs;
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "ensimpl")]
#[command(about = "Ensimpl - fast lookup of Ensembl gene annotation")]
#[command(version)]
#[command(long_about = "
Ensimpl searches and retrieves Ensembl gene, transcript, exon and homology
annotation from versioned SQLite databases (ensimpl.{release}.{species}.db3).

Examples:
  ensimpl -d /data/ensimpl releases
  ensimpl search Pax6 -s Mm -r 102
  ensimpl search 'chr2:105M-106M' -f json
  ensimpl gene ENSMUSG00000027168 --details
  ensimpl genes --ids ids.txt --order position -f csv
  ensimpl ids --ids mgi.txt --source-db MGI
  ensimpl history ENSMUSG00000027168 --release-start 90 --release-end 102
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the ensimpl databases (overrides ENSIMPL_DIR)
    #[arg(short, long, global = true)]
    pub directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available release/species databases
    Releases {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Show database metadata and lookup statistics
    Info {
        #[command(flatten)]
        db: DbArgs,

        /// List chromosomes and karyotype band counts instead
        #[arg(long)]
        chromosomes: bool,

        /// List the external databases instead
        #[arg(long, conflicts_with = "chromosomes")]
        external_dbs: bool,

        /// List the source dbs accepted by `ids` and `random-ids` instead
        #[arg(long, conflicts_with_all = ["chromosomes", "external_dbs"])]
        source_dbs: bool,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Search by symbol, name, synonym, stable ID, MGI ID or region
    Search {
        /// Search term, e.g. Pax6, ENSMUSG00000027168, MGI:97490 or chr2:105M-106M
        term: String,

        #[command(flatten)]
        db: DbArgs,

        /// Match the term literally instead of as a prefix
        #[arg(long)]
        exact: bool,

        /// Maximum number of matches to report (0 or negative for all)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Look up one gene by any gene, transcript, exon or protein stable ID
    Gene {
        id: String,

        #[command(flatten)]
        db: DbArgs,

        /// Include transcripts, exons, proteins and homologs
        #[arg(long)]
        details: bool,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Look up many genes from an ID file, or every gene in the database
    Genes {
        #[command(flatten)]
        db: DbArgs,

        /// File with one identifier per line
        #[arg(long)]
        ids: Option<PathBuf>,

        /// Order used when no ID file is given
        #[arg(long, value_enum, default_value = "id")]
        order: OrderArg,

        /// Include transcripts, exons, proteins and homologs
        #[arg(long)]
        details: bool,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Map identifiers between Ensembl, homolog and external databases
    Ids {
        #[command(flatten)]
        db: DbArgs,

        /// File with one identifier per line
        #[arg(long)]
        ids: Option<PathBuf>,

        /// Namespace of the given identifiers, e.g. Ensembl, Ensembl_homolog, MGI
        #[arg(long, default_value = ENSEMBL_SOURCE_DB)]
        source_db: String,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Show one gene across a range of releases
    History {
        id: String,

        /// Species code, e.g. Mm or Hs
        #[arg(short, long, default_value = commands::DEFAULT_SPECIES)]
        species: String,

        /// First release of the range (inclusive)
        #[arg(long)]
        release_start: String,

        /// Last release of the range (inclusive)
        #[arg(long)]
        release_end: String,

        /// Include transcripts, exons, proteins and homologs
        #[arg(long)]
        details: bool,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Sample random identifiers from a source database
    RandomIds {
        #[command(flatten)]
        db: DbArgs,

        #[arg(long, default_value = ENSEMBL_SOURCE_DB)]
        source_db: String,

        /// Number of identifiers to draw
        #[arg(short, long, default_value = "10")]
        limit: usize,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Run-length exon layout per gene
    Exons {
        #[command(flatten)]
        db: DbArgs,

        /// Restrict to one chromosome
        #[arg(long)]
        chromosome: Option<String>,

        /// Emit the positional array form
        #[arg(long)]
        compressed: bool,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Show the effective configuration
    Config {
        /// Show the default configuration instead
        #[arg(long)]
        example: bool,

        /// Write to this file instead of printing
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OrderArg {
    Id,
    Position,
}

impl From<OrderArg> for GeneOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Id => GeneOrder::Id,
            OrderArg::Position => GeneOrder::Position,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let directory = cli.directory.as_deref();

    match cli.command {
        Commands::Releases { format } => {
            let registry = commands::open_registry(&config, directory)?;
            commands::releases::execute(&registry, format)?;
        }

        Commands::Info {
            db,
            chromosomes,
            external_dbs,
            source_dbs,
            format,
        } => {
            let registry = commands::open_registry(&config, directory)?;
            let path = commands::select_db(&registry, &db)?;
            let view = commands::info::view(chromosomes, external_dbs, source_dbs);
            commands::info::execute(&path, view, format)?;
        }

        Commands::Search {
            term,
            db,
            exact,
            max,
            format,
        } => {
            let registry = commands::open_registry(&config, directory)?;
            let path = commands::select_db(&registry, &db)?;
            commands::search::execute(&config, &path, &term, exact, max, format)?;
        }

        Commands::Gene {
            id,
            db,
            details,
            format,
        } => {
            let registry = commands::open_registry(&config, directory)?;
            let path = commands::select_db(&registry, &db)?;
            commands::gene::execute(&path, &id, details, format)?;
        }

        Commands::Genes {
            db,
            ids,
            order,
            details,
            format,
        } => {
            let registry = commands::open_registry(&config, directory)?;
            let path = commands::select_db(&registry, &db)?;
            commands::genes::execute(&path, ids.as_deref(), order.into(), details, format)?;
        }

        Commands::Ids {
            db,
            ids,
            source_db,
            format,
        } => {
            let registry = commands::open_registry(&config, directory)?;
            let path = commands::select_db(&registry, &db)?;
            commands::ids::execute(&path, ids.as_deref(), &source_db, format)?;
        }

        Commands::History {
            id,
            species,
            release_start,
            release_end,
            details,
            format,
        } => {
            let registry = commands::open_registry(&config, directory)?;
            commands::history::execute(
                &registry,
                &id,
                &species,
                &release_start,
                &release_end,
                details,
                format,
            )?;
        }

        Commands::RandomIds {
            db,
            source_db,
            limit,
            format,
        } => {
            let registry = commands::open_registry(&config, directory)?;
            let path = commands::select_db(&registry, &db)?;
            commands::random_ids::execute(&path, &source_db, limit, format)?;
        }

        Commands::Exons {
            db,
            chromosome,
            compressed,
            format,
        } => {
            let registry = commands::open_registry(&config, directory)?;
            let path = commands::select_db(&registry, &db)?;
            commands::exons::execute(&path, chromosome.as_deref(), compressed, format)?;
        }

        Commands::Config { example, write } => {
            commands::config::execute(&config, example, write.as_deref())?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        error::print_error_and_exit(&err);
    }
}
