//! Bare-bones lispy REPL; tokenize, parse, read, reduce, print, loop.
//!
//! Run with logging as: `RUST_LOG=debug cargo run --example repl`.

use clap::{App, Arg};
use log::LevelFilter;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use lispy::interpreter;
use lispy::parser;
use lispy::reader;
use lispy::token::string_stream::StringStream;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("Cli lispy REPL")
        .version("0.1")
        .about("Bare-bones single-threaded arithmetic REPL")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Skip the greeting banner"),
        )
        .get_matches();

    if !matches.is_present("quiet") {
        println!("lispy version: {}", env!("CARGO_PKG_VERSION"));
        println!("CTRL-C to exit");
        println!();
    }

    let mut editor = Editor::<()>::new();
    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                return Ok(());
            }
            Err(err) => return Err(format!("[Readline Error]: {:?}", err)),
        };
        editor.add_history_entry(line.as_str());

        let stream = match StringStream::new(&line) {
            Ok(stream) => stream,
            Err(err) => {
                println!(" {}", err);
                println!();
                continue;
            }
        };
        let root = match parser::parse(stream) {
            Ok(parsed) => parsed,
            Err(err) => {
                println!(" {}", err);
                println!();
                continue;
            }
        };

        for expr in &root.children {
            println!("-> {}", interpreter::eval(reader::read(expr)));
        }
        println!();
    }
}
