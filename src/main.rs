use std::{
    env,
    fs::read_to_string,
    io::{self, Write},
    process::ExitCode,
    time::Instant,
};

use monkey::{format_error, lexer::lexer::tokenize, parser::parser::Parser};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match args.as_slice() {
        [_] => {
            start_repl();
            ExitCode::SUCCESS
        }
        [_, flag, file_path] if flag == "--tokens" => dump_tokens(file_path),
        [_, file_path] => run_file(file_path),
        _ => {
            eprintln!("usage: monkey [--tokens] [file]");
            ExitCode::FAILURE
        }
    }
}

fn read_source(file_path: &str) -> Option<String> {
    match read_to_string(file_path) {
        Ok(contents) => Some(contents),
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            None
        }
    }
}

fn run_file(file_path: &str) -> ExitCode {
    let Some(source) = read_source(file_path) else {
        return ExitCode::FAILURE;
    };

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let start = Instant::now();
    let mut parser = Parser::new(source.as_str());
    let program = parser.parse_program();

    println!("Parsed in {:?}", start.elapsed());

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            eprintln!("{}\n", format_error(error, &source, file_name));
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn dump_tokens(file_path: &str) -> ExitCode {
    let Some(source) = read_source(file_path) else {
        return ExitCode::FAILURE;
    };

    for token in tokenize(source) {
        println!("{}", token);
    }

    ExitCode::SUCCESS
}

fn start_repl() {
    println!("Type 'exit' to quit.");

    loop {
        print!(">> ");
        if let Err(error) = io::stdout().flush() {
            eprintln!("<output error: {}>", error);
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(error) => {
                eprintln!("<input error: {}>", error);
                break;
            }
        }

        let input = line.trim_end();
        if input == "exit" {
            println!("Goodbye!");
            break;
        }

        let mut parser = Parser::new(input);
        let program = parser.parse_program();

        if parser.errors().is_empty() {
            println!("{}", program);
        } else {
            for error in parser.errors() {
                eprintln!("{}", format_error(error, input, "repl"));
            }
        }
    }
}
