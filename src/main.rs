use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use sqmat::driver::{Driver, Mutations};
use sqmat::linalg::{
    helpers::{DEFAULT_SWAP, DEFAULT_UPDATE},
    input::read_matrices,
};

#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
    /// File holding N followed by the values of A and B. Prompted for if omitted.
    #[clap(short, long)]
    input: Option<PathBuf>,

    #[clap(long, default_value_t = DEFAULT_SWAP.0, allow_hyphen_values = true)]
    row1: isize,
    #[clap(long, default_value_t = DEFAULT_SWAP.1, allow_hyphen_values = true)]
    row2: isize,

    #[clap(long, default_value_t = DEFAULT_SWAP.0, allow_hyphen_values = true)]
    col1: isize,
    #[clap(long, default_value_t = DEFAULT_SWAP.1, allow_hyphen_values = true)]
    col2: isize,

    #[clap(long, default_value_t = DEFAULT_UPDATE.0, allow_hyphen_values = true)]
    update_row: isize,
    #[clap(long, default_value_t = DEFAULT_UPDATE.1, allow_hyphen_values = true)]
    update_col: isize,
    #[clap(long, default_value_t = DEFAULT_UPDATE.2, allow_hyphen_values = true)]
    update_value: i32,
}

impl Args {
    fn mutations(&self) -> Mutations {
        Mutations {
            swap_rows: (self.row1, self.row2),
            swap_cols: (self.col1, self.col2),
            update: (self.update_row, self.update_col, self.update_value),
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn prompt_filename() -> Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter input filename: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let filename = line.trim();
    if filename.is_empty() {
        bail!("no input filename given");
    }
    Ok(PathBuf::from(filename))
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let path = match &args.input {
        Some(path) => path.clone(),
        None => prompt_filename()?,
    };
    let (a, b) = read_matrices(&path).context("Error reading file")?;

    let stdout = io::stdout();
    Driver::on(a, b)
        .with(args.mutations())
        .run(&mut stdout.lock())
}
