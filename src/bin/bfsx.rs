//! CLI entry point for the `bfsx` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use bfs_explorer::cli::commands;
use bfs_explorer::format::ParseOptions;
use bfs_explorer::types::{BfsError, OutputFormat, DEFAULT_SEPARATOR};

#[derive(Parser)]
#[command(
    name = "bfsx",
    about = "Breadth-first traversal of adjacency-list graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Fail on malformed input lines instead of skipping them
    #[arg(long, global = true)]
    strict: bool,

    /// Separator between a node and its neighbor list
    #[arg(long, global = true, default_value_t = DEFAULT_SEPARATOR)]
    separator: char,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run BFS and print the visitation order with levels
    Traverse {
        /// Adjacency list file, or "-" for stdin
        input: PathBuf,
        /// Start node
        #[arg(long, short)]
        start: String,
    },
    /// Print the BFS tree edges of a traversal
    Tree {
        /// Adjacency list file, or "-" for stdin
        input: PathBuf,
        /// Start node
        #[arg(long, short)]
        start: String,
        /// Print one discovery edge per reached node instead
        #[arg(long)]
        discovery: bool,
    },
    /// Display the parsed graph
    Show {
        /// Adjacency list file, or "-" for stdin
        input: PathBuf,
    },
    /// Convert between adjacency text and a JSON graph object
    Convert {
        /// Input file, or "-" for stdin
        input: PathBuf,
        /// Read the input as a JSON graph object
        #[arg(long)]
        from_json: bool,
        /// Target format: text or json
        #[arg(long, default_value = "json")]
        to: String,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn parse_format(name: &str) -> OutputFormat {
    match OutputFormat::from_name(name) {
        Some(format) => format,
        None => {
            eprintln!("Invalid format: {}", name);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = parse_format(&cli.format) == OutputFormat::Json;
    let options = ParseOptions {
        separator: cli.separator,
        strict: cli.strict,
    };

    let result = match cli.command {
        Commands::Traverse { input, start } => {
            commands::cmd_traverse(&input, &start, &options, json)
        }
        Commands::Tree {
            input,
            start,
            discovery,
        } => commands::cmd_tree(&input, &start, &options, discovery, json),
        Commands::Show { input } => commands::cmd_show(&input, &options, json),
        Commands::Convert {
            input,
            from_json,
            to,
            output,
        } => {
            let to = parse_format(&to);
            commands::cmd_convert(&input, &options, from_json, to, output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            BfsError::Io(_) => 1,
            e if e.is_input_error() => 2,
            BfsError::StartNodeNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
