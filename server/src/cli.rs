//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "In-memory blog data service with a GraphQL API")]
#[command(version)]
pub struct Cli {
    /// Log filter (e.g. `info`, `scribe_mutation=debug`)
    #[arg(short, long, env = "SCRIBE_LOG", global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the GraphQL API over HTTP
    Serve {
        /// Address to bind
        #[arg(long, env = "SCRIBE_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "SCRIBE_PORT", default_value_t = 4000)]
        port: u16,

        /// Start without the demo data
        #[arg(long)]
        empty: bool,
    },

    /// Execute one GraphQL request and print the JSON response
    Query {
        /// Query text, or @path to read it from a file
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,

        /// Run against an empty store instead of the demo data
        #[arg(long)]
        empty: bool,
    },

    /// Print the GraphQL schema (SDL)
    Schema {
        /// Output file, or - for stdout
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },
}
