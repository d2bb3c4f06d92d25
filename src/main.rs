// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

use std::process;

use clap::{App, Arg};
use log::debug;

use fifteen_solver::parser;
use fifteen_solver::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("fifteen-solver")
        .author("martin-t")
        .version("0.1")
        .about("Searches for a solved 4x4 sliding puzzle")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print detailed stats after the summary"),
        )
        .arg(
            Arg::with_name("status")
                .short("s")
                .long("status")
                .help("print stats each time a new depth is expanded"),
        )
        .arg(
            Arg::with_name("state")
                .required(true)
                .help("16 symbols 1-9, A-F and a space, row by row"),
        )
        .arg(
            Arg::with_name("method")
                .required(true)
                .help("BFS, DFS, DLS, GBFS or AStar"),
        )
        .arg(
            Arg::with_name("option")
                .help("h1 or h2 for GBFS and AStar, depth limit for DLS"),
        )
        .get_matches();

    let state = matches.value_of("state").unwrap();
    let method = matches.value_of("method").unwrap();
    let option = matches.value_of("option");

    let board = parser::parse_state(state).unwrap_or_else(|err| {
        eprintln!("Invalid initial state {:?}: {}", state, err);
        process::exit(1);
    });
    let strategy = parser::parse_strategy(method, option).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    debug!("Start:\n{}", board);

    println!("{}", strategy);
    let report = board.solve(strategy, matches.is_present("status"));
    println!("{}", report.summary());

    if matches.is_present("verbose") {
        println!();
        print!("{}", report.stats);
    }
}
