use std::env;
use std::fs;
use std::process;

use clap::{App, Arg};
use log::debug;

use boxpush_solver::level::Level;
use boxpush_solver::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("boxpush-solver")
        .version("0.1")
        .about("Finds the shortest solution of a box-pushing puzzle")
        .arg(
            Arg::with_name("stats")
                .short("-s")
                .long("--stats")
                .help("print search statistics to stderr"),
        )
        .arg(
            Arg::with_name("status")
                .long("--status")
                .help("print progress per depth while searching"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();

    let map = fs::read_to_string(path).unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap();
        eprintln!("Can't read file {} in {}: {}", path, current_dir.display(), err);
        process::exit(1);
    });

    let level: Level = match map.parse() {
        Ok(level) => level,
        Err(err) => {
            // per the output contract malformed input reads as unsolvable
            debug!("Rejected input: {}", err);
            println!("No solution!");
            return;
        }
    };

    let solution = level
        .solve(matches.is_present("status"))
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });

    if matches.is_present("stats") {
        eprint!("{}", solution.stats);
    }

    match solution.moves {
        Some(moves) => println!("{}", moves),
        None => println!("No solution!"),
    }
}
