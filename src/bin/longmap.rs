use clap::Parser;

use longmap::ChainedLongMap;
use longmap::Config;
use longmap::LongMap;
use longmap::Shell;
use longmap::UpdatePolicy;
use longmap::INITIAL_ENTRIES;
use longmap::MIN_CAPACITY;
use slog::info;
use slog::o;
use slog::Drain;
use slog::Level;
use slog::LevelFilter;
use slog_async::Async;
use slog_term::CompactFormat;
use slog_term::TermDecorator;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::PathBuf;
use std::result::Result;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of buckets, clamped into [16, 1000]
    #[arg(long, default_value_t = MIN_CAPACITY)]
    capacity: usize,

    /// Initial capacity of the ordered key and value sequences, at most 65536
    #[arg(long, default_value_t = INITIAL_ENTRIES)]
    initial_entries: usize,

    /// How overwriting a key updates the ordered values: by-key or by-value
    #[arg(long, default_value_t = UpdatePolicy::ByKey)]
    update_policy: UpdatePolicy,

    /// Log every command to stderr
    #[arg(short, long)]
    verbose: bool,

    /// File with one command per line; read from stdin when omitted
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::Debug } else { Level::Info };
    let decorator = TermDecorator::new().stderr().build();
    let drain = CompactFormat::new(decorator).build().fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    let drain = Async::new(drain).build().fuse();

    let log = slog::Logger::root(drain, o!());

    let config = Config {
        capacity: cli.capacity,
        initial_entries: cli.initial_entries,
        update_policy: cli.update_policy,
    };
    info!(log, "starting up"; "version" => env!("CARGO_PKG_VERSION"));
    info!(
        log,
        "using configuration";
        "buckets" => config.bucket_count(), "update-policy" => config.update_policy.to_string()
    );

    let map = ChainedLongMap::from_config(&config, log.new(o!("component" => "map")));
    let mut shell = Shell::new(map, log.clone());

    let stdout = io::stdout();
    match &cli.script {
        Some(path) => {
            info!(log, "running script"; "path" => path.to_str());
            shell.run(BufReader::new(File::open(path)?), stdout.lock())?;
        }
        None => {
            shell.run(io::stdin().lock(), stdout.lock())?;
        }
    }

    info!(log, "done"; "size" => shell.map().size());
    Ok(())
}
