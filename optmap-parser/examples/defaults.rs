//! This example demonstrates declared defaults and how explicit values
//! override them.
//!
//! Try running it with no arguments, with `--output lib.so`, with
//! `--output=lib.so`, and with a bare `--output` at the end of the
//! command line (the default survives).
use optmap_parser::{parse, Error, Opt, Schema};

fn main() -> Result<(), Error> {
    let schema = Schema::new()
        .with(Opt::value().long("--output").short("-o").default_value("a.out"))
        .with(Opt::flag().long("--quiet").short("-q"));

    let parsed = parse(&schema, std::env::args().skip(1))?;

    println!("output: {}", parsed["--output"]);
    println!("quiet: {}", parsed["--quiet"]);
    println!("inputs: {:?}", parsed.positional());

    Ok(())
}
