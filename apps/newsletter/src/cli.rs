//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsletter")]
#[command(version, about = "Render event newsletters as standalone HTML", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a fresh newsletter record with today's date and default texts
    Init {
        /// Record file to create (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a newsletter record to HTML
    Render {
        /// Newsletter record (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Spreadsheet (.csv or .json) whose events are appended; repeatable
        #[arg(long = "import")]
        imports: Vec<PathBuf>,

        /// Directory for the exported file (defaults to NEWSLETTER_OUTPUT_DIR)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the document instead of writing the export file
        #[arg(long)]
        stdout: bool,
    },

    /// Print the export filename for a record
    Filename {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Edit the events of a record file in place
    #[command(subcommand)]
    Event(EventCommands),
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Append an empty event
    Add {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Change fields of one event
    Update {
        #[arg(short, long)]
        input: PathBuf,

        /// Event number as listed (starting at 1)
        number: usize,

        #[command(flatten)]
        fields: EventFields,
    },

    /// Remove one event
    Remove {
        #[arg(short, long)]
        input: PathBuf,

        /// Event number as listed (starting at 1)
        number: usize,
    },

    /// Append events from a spreadsheet (.csv or .json)
    Import {
        #[arg(short, long)]
        input: PathBuf,

        file: PathBuf,
    },
}

/// Field values for `event update`; omitted flags keep the current value.
#[derive(Args, Debug, Default)]
pub struct EventFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub learn_more_url: Option<String>,
    #[arg(long)]
    pub register_url: Option<String>,
}
