use std::{fs, io, path::PathBuf};

use clap::Parser;
use tomcast::convert;

/// tomcast converts TOML configuration documents into a bracketed
/// configuration dialect, resolving prefix-notation constants along the way.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the document to convert. Reads standard input when omitted.
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let source = match &args.file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|_| {
                          eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                    path.display());
                          std::process::exit(1);
                      }),
        None => io::read_to_string(io::stdin()).unwrap_or_else(|_| {
                    eprintln!("Failed to read from standard input.");
                    std::process::exit(1);
                }),
    };

    match convert(&source) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
