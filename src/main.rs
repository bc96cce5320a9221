use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::process;

use hilite::{highlight_line, log, println_stderr, rules_for, tools};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println_stderr!("Usage: {} filename", args[0]);
        return 1;
    }

    let filename = &args[1];
    let file = match File::open(filename) {
        Ok(x) => x,
        Err(_) => {
            println_stderr!("Error: Cannot open file {}", filename);
            return 1;
        }
    };

    let ext = tools::get_file_extension(filename);
    let rules = rules_for(&ext);
    log!("hilite: {} (ext: {:?}, {} rules)", filename, ext, rules.len());

    let reader = BufReader::new(file);
    for line in reader.lines() {
        match line {
            Ok(line) => println!("{}", highlight_line(&line, rules)),
            Err(e) => {
                println_stderr!("hilite: {}: read error: {}", filename, e);
                return 1;
            }
        }
    }

    0
}
