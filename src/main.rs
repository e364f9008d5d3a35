use std::{env, path::PathBuf, process::ExitCode, time::Instant};

use shale::{display_error, parser::parser::parse};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: shale <source-file>");
        return ExitCode::FAILURE;
    }

    let path = PathBuf::from(&args[1]);

    let start = Instant::now();
    match parse(&path) {
        Ok(module) => {
            println!("Parsed in {:?}", start.elapsed());
            println!("{:#?}", module);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &path);
            ExitCode::FAILURE
        }
    }
}
