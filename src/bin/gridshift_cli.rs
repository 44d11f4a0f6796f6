//! CLI tool for gridshift - generates grid data and outputs JSON
//!
//! Usage:
//!   gridshift_cli <rows> <columns>                  # Weekday grid to stdout
//!   gridshift_cli <rows> <columns> --seed 7         # Reproducible grid
//!   gridshift_cli <rows> <columns> -o out.json      # Output JSON to file
//!   gridshift_cli --people 10,5,3                   # Nested person records
//!
//! Set `RUST_LOG=debug` to see generation logs on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gridshift::data::{generate_grid, make_nested, person_columns, SeededSource};
use gridshift::types::{Column, Row};

const USAGE: &str = "Usage: gridshift_cli <rows> <columns> [--seed N] [-o output.json]\n       \
                     gridshift_cli --people <len,len,...> [--seed N] [-o output.json]";

/// Same shape as the grid preview, for person records.
#[derive(Serialize)]
struct People {
    columns: Vec<Column>,
    data: Vec<Row>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn parse_count(value: &str, what: &str) -> usize {
    match value.parse() {
        Ok(n) => n,
        Err(e) => fail(&format!("Invalid {what} '{value}': {e}")),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        fail(USAGE);
    }

    let mut positional: Vec<&str> = Vec::new();
    let mut seed: Option<u64> = None;
    let mut output_path: Option<&str> = None;
    let mut people: Option<Vec<usize>> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let value = args.get(i + 1).map(String::as_str);
        match (arg, value) {
            ("--seed", Some(v)) => {
                seed = Some(match v.parse() {
                    Ok(s) => s,
                    Err(e) => fail(&format!("Invalid seed '{v}': {e}")),
                });
                i += 2;
            }
            ("-o", Some(v)) => {
                output_path = Some(v);
                i += 2;
            }
            ("--people", Some(v)) => {
                people = Some(v.split(',').map(|n| parse_count(n.trim(), "length")).collect());
                i += 2;
            }
            ("--seed" | "-o" | "--people", None) => fail(&format!("Missing value for {arg}\n{USAGE}")),
            _ => {
                positional.push(arg);
                i += 1;
            }
        }
    }

    let mut source = match seed {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::from_entropy(),
    };

    let json = match people {
        Some(lens) => {
            let records = People {
                columns: person_columns(),
                data: make_nested(&lens, &mut source),
            };
            serde_json::to_string_pretty(&records)
        }
        None => {
            if positional.len() != 2 {
                fail(USAGE);
            }
            let rows = parse_count(positional[0], "row count");
            let columns = parse_count(positional[1], "column count");
            serde_json::to_string_pretty(&generate_grid(rows, columns, &mut source))
        }
    };
    let json = match json {
        Ok(j) => j,
        Err(e) => fail(&format!("Error serializing JSON: {e}")),
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
