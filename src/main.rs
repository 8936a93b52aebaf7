use std::env;
use std::path::Path;

#[cfg(feature = "cli")]
use rustyline::error::ReadlineError;
#[cfg(feature = "cli")]
use rustyline::Editor;

use lispy::interpreter;
use lispy::parser;
use lispy::reader;
use lispy::token::file_stream::FileStream;
#[cfg(feature = "cli")]
use lispy::token::string_stream::StringStream;

fn usage(args: &Vec<String>) {
    println!(
        "usage: {} [SRC_FILE]",
        Path::new(&args[0]).file_name().unwrap().to_string_lossy()
    );
    println!();
}

fn main() -> Result<(), String> {
    #[cfg(feature = "cli")]
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    return match args.len() {
        1 => interactive_repl(),
        2 => file_repl(&args[1]),
        n => {
            usage(&args);
            Err(format!("Wrong argument count: {}, expected 0 or 1", n - 1))
        }
    };
}

fn display_greeting() {
    println!("lispy version: {}", env!("CARGO_PKG_VERSION"));
    println!("CTRL-C to exit");
    println!();
}

#[cfg(feature = "cli")]
fn interactive_repl() -> Result<(), String> {
    display_greeting();

    let mut editor = Editor::<()>::new();
    let mut curr_expr = String::new();
    loop {
        let prompt = if curr_expr.is_empty() {
            "[lispy]> "
        } else {
            "..       "
        };
        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                curr_expr.clear();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                return Ok(());
            }
            Err(err) => return Err(format!("[Readline Error]: {:?}", err)),
        };

        if !curr_expr.is_empty() {
            curr_expr.push('\n');
        }
        curr_expr.push_str(&line);

        let stream = match StringStream::new(&curr_expr) {
            Ok(stream) => stream,
            Err(err) => {
                println!(" {}", err);
                curr_expr.clear();
                continue;
            }
        };
        let root = match parser::parse(stream) {
            Ok(parsed) => parsed,
            // An open s-expression continues on the next line.
            Err(err) if err.unfinished() => continue,
            Err(err) => {
                println!(" {}", err);
                curr_expr.clear();
                continue;
            }
        };

        editor.add_history_entry(curr_expr.as_str());
        curr_expr.clear();

        for expr in &root.children {
            println!("{}", interpreter::eval(reader::read(expr)));
        }
    }
}

#[cfg(not(feature = "cli"))]
fn interactive_repl() -> Result<(), String> {
    Err("interactive mode requires the cli feature".to_string())
}

fn file_repl(path: &str) -> Result<(), String> {
    let stream = match FileStream::new(path) {
        Ok(stream) => stream,
        Err(err) => return Err(format!("{}", err)),
    };
    let root = match parser::parse(stream) {
        Ok(parsed) => parsed,
        Err(err) => return Err(format!("{}", err)),
    };

    for expr in &root.children {
        let value = reader::read(expr);
        println!("> {}", value);
        println!("{}", interpreter::eval(value));
        println!();
    }

    Ok(())
}
