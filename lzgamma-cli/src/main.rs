//! lzgamma CLI
//!
//! Command-line front end for the adaptive dictionary codec and the
//! fixed-alphabet LZW codec.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{cmd_compress, cmd_decompress, cmd_inspect, cmd_lzw_compress, cmd_lzw_decompress};
use lzgamma_core::DEFAULT_CHUNK_SIZE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lzgamma")]
#[command(author, version, about = "Adaptive dictionary text compressor")]
#[command(long_about = "
lzgamma compresses text with a growing self-referential dictionary:
literals and back-references are bit-packed with a position width that
grows as the dictionary does, and match lengths are Elias-gamma coded.

Examples:
  lzgamma compress notes.txt
  lzgamma decompress notes.txt.lzg --expect-checksum 48213
  lzgamma inspect notes.txt --limit 20
  lzgamma lzw-compress message.txt
  lzgamma lzw-decompress message.txt.lzw
")]
struct Cli {
    /// Log codec activity to stderr (honours RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file with the adaptive dictionary codec
    #[command(alias = "c")]
    Compress {
        /// File to compress (bytes are treated as Latin-1 text)
        input: PathBuf,

        /// Output file (default: <input>.lzg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bytes handled per chunk
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress an adaptive dictionary stream
    #[command(alias = "d")]
    Decompress {
        /// Compressed file
        input: PathBuf,

        /// Output file (default: input without .lzg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bytes loaded per refill
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Fail unless the decoded checksum equals this value
        #[arg(long)]
        expect_checksum: Option<u64>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show the token stream a file compresses to
    #[command(alias = "i")]
    Inspect {
        /// File to analyse
        input: PathBuf,

        /// Show at most this many tokens
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Compress a text file with the fixed-alphabet LZW codec
    LzwCompress {
        /// Text file to compress
        input: PathBuf,

        /// Output file (default: <input>.lzw)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decompress a fixed-alphabet LZW code file
    LzwDecompress {
        /// Code file
        input: PathBuf,

        /// Output file (default: input without .lzw)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(cli: &Cli) {
    // --quiet and the default are silent; --verbose honours RUST_LOG and
    // falls back to "info".
    let filter = if cli.verbose && !cli.quiet {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            chunk_size,
            json,
        } => cmd_compress(&input, output.as_ref(), chunk_size, json),
        Commands::Decompress {
            input,
            output,
            chunk_size,
            expect_checksum,
            json,
        } => cmd_decompress(&input, output.as_ref(), chunk_size, expect_checksum, json),
        Commands::Inspect { input, limit, json } => cmd_inspect(&input, limit, json),
        Commands::LzwCompress { input, output } => cmd_lzw_compress(&input, output.as_ref()),
        Commands::LzwDecompress { input, output } => cmd_lzw_decompress(&input, output.as_ref()),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "lzgamma", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
