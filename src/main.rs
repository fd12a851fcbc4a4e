#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "tokval", about = "Token-stream to value-tree materialization tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Read {
		path: PathBuf,
		#[arg(long = "as", value_enum, default_value = "value")]
		read_as: cmd::read::ReadAs,
		#[arg(long)]
		decimal_floats: bool,
		#[arg(long)]
		fail_on_duplicate_keys: bool,
		#[arg(long)]
		max_depth: Option<u32>,
		#[arg(long)]
		json: bool,
	},
	Tokens {
		path: PathBuf,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> tokval::tree::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Read {
			path,
			read_as,
			decimal_floats,
			fail_on_duplicate_keys,
			max_depth,
			json,
		} => cmd::read::run(path, read_as, decimal_floats, fail_on_duplicate_keys, max_depth, json),
		Commands::Tokens { path } => cmd::tokens::run(path),
	}
}
