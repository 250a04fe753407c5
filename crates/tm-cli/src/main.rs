//! TrieMatcher CLI
//!
//! CLI tool for running longest-prefix lookups against a prefix list.

use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use tm_core::PrefixMatcher;

mod bench;
mod report;
mod sources;

use report::OutputFormat;

#[derive(Parser)]
#[command(name = "tm-cli")]
#[command(about = "Longest-prefix matching against a prefix list")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the longest registered prefix of each input
    Match {
        /// Inputs to match (read from --inputs when omitted)
        inputs: Vec<String>,

        /// Prefix list file (defaults to the bundled sample list)
        #[arg(short, long)]
        prefixes: Option<String>,

        /// File with one input per line
        #[arg(short = 'i', long = "inputs")]
        input_file: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show prefix trie statistics
    Info {
        /// Prefix list file (defaults to the bundled sample list)
        #[arg(short, long)]
        prefixes: Option<String>,

        /// List every registered prefix
        #[arg(short, long)]
        list: bool,
    },

    /// Measure lookup latency
    Bench {
        /// Inputs to match (read from --inputs when omitted)
        inputs: Vec<String>,

        /// Prefix list file (defaults to the bundled sample list)
        #[arg(short, long)]
        prefixes: Option<String>,

        /// File with one input per line
        #[arg(short = 'i', long = "inputs")]
        input_file: Option<String>,

        /// Timed passes over the inputs
        #[arg(long, default_value_t = 1000)]
        iterations: usize,

        /// Untimed passes before measuring
        #[arg(long, default_value_t = 100)]
        warmup: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Match {
            inputs,
            prefixes,
            input_file,
            format,
        } => cmd_match(inputs, prefixes.as_deref(), input_file.as_deref(), format),
        Commands::Info { prefixes, list } => cmd_info(prefixes.as_deref(), list),
        Commands::Bench {
            inputs,
            prefixes,
            input_file,
            iterations,
            warmup,
        } => cmd_bench(inputs, prefixes.as_deref(), input_file.as_deref(), iterations, warmup),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Warning: failed to initialize logger: {e}");
    }
}

fn build_matcher(prefixes: Option<&str>) -> Result<PrefixMatcher, String> {
    let loaded = sources::load_prefixes(prefixes)?;
    Ok(PrefixMatcher::new(loaded))
}

fn cmd_match(
    inputs: Vec<String>,
    prefixes: Option<&str>,
    input_file: Option<&str>,
    format: OutputFormat,
) -> Result<(), String> {
    let matcher = build_matcher(prefixes)?;
    let inputs = sources::load_inputs(inputs, input_file)?;

    let rows = report::match_rows(&matcher, &inputs);
    print!("{}", report::render(&rows, format)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

fn cmd_info(prefixes: Option<&str>, list: bool) -> Result<(), String> {
    let matcher = build_matcher(prefixes)?;
    let stats = matcher.trie().stats();

    println!("Prefix trie: {}", prefixes.unwrap_or(sources::DEFAULT_RESOURCE));
    println!("  Accepted:    {}", stats.accepted);
    println!("  Distinct:    {}", stats.distinct);
    println!("  Nodes:       {}", stats.nodes);
    println!("  Edges:       {}", stats.edges);

    if list {
        println!();
        for prefix in matcher.trie().prefixes() {
            println!("  {}", prefix);
        }
    }

    Ok(())
}

fn cmd_bench(
    inputs: Vec<String>,
    prefixes: Option<&str>,
    input_file: Option<&str>,
    iterations: usize,
    warmup: usize,
) -> Result<(), String> {
    let matcher = build_matcher(prefixes)?;
    let inputs = sources::load_inputs(inputs, input_file)?;

    let opts = bench::BenchOptions {
        iterations,
        warmup_ops: warmup,
    };
    let report = bench::run_bench(&matcher, &inputs, &opts)?;
    bench::print_report(&report);

    Ok(())
}
