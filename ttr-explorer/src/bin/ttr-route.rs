//! Tool to print the shortest route between two board destinations.

use std::path::{Path, PathBuf};

use anyhow::Error;
use clap::Parser;

use ttr_explorer::{compute_route, Board, RestrictedEdge, Restrictions};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();
    let board = Board::load(opts.board_file_path())?;

    if opts.list {
        for (key, name) in &board.destinations {
            println!("{}\t{}", key, name);
        }
        return Ok(());
    }

    let restrictions = opts.restrict.into_iter().collect::<Restrictions>();
    for line in compute_route(&board, &restrictions, opts.start.as_deref(), opts.end.as_deref())? {
        println!("{}", line);
    }

    Ok(())
}

/// Shortest route between two destinations of the board.
#[derive(Parser)]
#[clap(version = "0.1.0", author = "The TTR route explorer developers")]
struct Opts {
    /// Board file path (default `./board.json`)
    #[clap(long = "board")]
    board: Option<PathBuf>,

    /// Route to leave out, as `start:end`. May be repeated.
    #[clap(short = 'r', long = "restrict")]
    restrict: Vec<RestrictedEdge>,

    /// Print destination keys and names, then exit
    #[clap(long = "list")]
    list: bool,

    /// Start destination key
    start: Option<String>,

    /// End destination key
    end: Option<String>,
}

impl Opts {
    fn board_file_path(&self) -> &Path {
        self.board.as_deref().unwrap_or_else(|| Path::new("./board.json"))
    }
}
