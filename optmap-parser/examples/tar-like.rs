//! A tar like command line resolved against a static schema, with usage
//! and error printing.
use optmap_parser::{parse, Error, Opt, Schema};

const USAGE: &str = "tar-like [--verbose] [-f FILE] <TARGET>...";

fn execute() -> Result<(), Error> {
    let schema = Schema::new()
        .with(Opt::flag().long("--verbose").short("-v"))
        .with(
            Opt::value()
                .long("--file")
                .short("-f")
                .default_value("archive.tar.gz"),
        );

    let parsed = parse(&schema, std::env::args().skip(1))?;

    if parsed.positional().is_empty() {
        println!("{}", USAGE);
        return Ok(());
    }

    println!("verbose: {}", parsed["--verbose"]);
    println!("file: {}", parsed["--file"]);
    println!("targets: {:?}", parsed.positional());

    Ok(())
}

fn main() {
    if let Err(err) = execute() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
