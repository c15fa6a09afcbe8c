use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "convene",
    about = "Convene: event site content administration",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (default: ./convene.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory of the file backend
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Content types, one per partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    Events,
    Speakers,
    Agenda,
    Topics,
    Partners,
    Faqs,
    Resources,
    Challenges,
    Press,
    Marquee,
}

#[derive(Subcommand)]
pub enum Command {
    /// Populate absent partitions from the bundled fixtures
    Seed,
    /// List records, optionally for one event
    List(ListArgs),
    /// Show one record
    Show(RecordArgs),
    /// Create a record from a JSON object
    Add(AddArgs),
    /// Update fields of a record
    Set(SetArgs),
    /// Delete a record
    Remove(RecordArgs),
    /// Summarize everything attached to an event
    Overview(OverviewArgs),
    /// Show which partitions exist and their sizes
    Partitions,
}

#[derive(Args)]
pub struct ListArgs {
    pub kind: Kind,
    #[arg(short, long)]
    pub event: Option<String>,
}

#[derive(Args)]
pub struct RecordArgs {
    pub kind: Kind,
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    pub kind: Kind,
    /// Record as JSON; any `id` is replaced
    pub json: String,
}

#[derive(Args)]
pub struct SetArgs {
    pub kind: Kind,
    pub id: String,
    /// `field=value` pairs; values are read as JSON, else as plain text
    #[arg(required = true)]
    pub assignments: Vec<String>,
}

#[derive(Args)]
pub struct OverviewArgs {
    pub event_id: String,
}
