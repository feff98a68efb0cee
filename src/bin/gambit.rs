// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate serde_derive;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgMatches, SubCommand};
use gambit::eval::{BoardEvaluator, PositionalEvaluator, Score};
use gambit::game::Game;
use gambit::search::{AlphaBetaSearcher, SearchConfig, SearchResult, Searcher};
use gambit::{perft, Board, Color, GameStatus, Move};

fn main() {
    env_logger::init();
    let depth_arg = || {
        Arg::with_name("depth")
            .help("Depth of move tree to search")
            .value_name("DEPTH")
            .short("-d")
            .long("--depth")
            .takes_value(true)
    };
    let moves_arg = || {
        Arg::with_name("MOVES")
            .help("Moves from the initial position, in coordinate notation (e2e4)")
            .multiple(true)
            .index(1)
    };

    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .help("JSON file holding the engine's search configuration")
                .value_name("FILE")
                .short("-c")
                .long("--config")
                .takes_value(true),
        )
        .subcommand(
            SubCommand::with_name("play")
                .about("Play a game in the terminal")
                .arg(depth_arg())
                .arg(
                    Arg::with_name("engine-color")
                        .help("Side the engine plays")
                        .value_name("COLOR")
                        .long("--engine-color")
                        .possible_values(&["white", "black"])
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("two-player")
                        .help("Play both sides without the engine")
                        .long("--two-player"),
                ),
        )
        .subcommand(
            SubCommand::with_name("perft")
                .about("PERFT analysis of board positions")
                .arg(depth_arg().required(true))
                .arg(moves_arg()),
        )
        .subcommand(
            SubCommand::with_name("evaluate")
                .about("Evaluate a board position")
                .arg(depth_arg())
                .arg(
                    Arg::with_name("json")
                        .help("Print the evaluation as JSON")
                        .long("--json"),
                )
                .arg(moves_arg()),
        )
        .get_matches();

    let config = match matches.value_of("config") {
        Some(path) => load_config(path),
        None => SearchConfig::default(),
    };

    match matches.subcommand() {
        ("play", Some(matches)) => run_play(matches, config),
        ("perft", Some(matches)) => run_perft(matches),
        ("evaluate", Some(matches)) => run_evaluate(matches, config),
        _ => {
            eprintln!("{}", matches.usage());
            process::exit(1);
        }
    }
}

fn load_config(path: &str) -> SearchConfig {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("failed to open {}: {}", path, err);
            process::exit(1);
        }
    };

    match serde_json::from_reader(file) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid config {}: {}", path, err);
            process::exit(1);
        }
    }
}

fn with_depth(matches: &ArgMatches, mut config: SearchConfig) -> SearchConfig {
    if matches.is_present("depth") {
        config.depth = value_t_or_exit!(matches, "depth", u32);
    }

    config
}

fn board_after(matches: &ArgMatches) -> Board {
    let mut board = Board::new();
    for text in matches.values_of("MOVES").into_iter().flatten() {
        let result = text
            .parse::<Move>()
            .map_err(|err| err.to_string())
            .and_then(|mov| board.apply_move(mov.from, mov.to).map_err(|err| err.to_string()));
        if let Err(err) = result {
            eprintln!("bad move {}: {}", text, err);
            process::exit(1);
        }
    }

    board
}

fn print_status(board: &Board) {
    match board.status() {
        GameStatus::Ongoing => {}
        GameStatus::Checkmate { winner } => println!("checkmate, {} wins", winner),
        GameStatus::Stalemate => println!("stalemate"),
    }
}

fn run_play(matches: &ArgMatches, config: SearchConfig) -> ! {
    let mut config = with_depth(matches, config);
    if matches.is_present("engine-color") {
        config.engine_color = value_t_or_exit!(matches, "engine-color", Color);
    }

    let opponent = if matches.is_present("two-player") {
        None
    } else {
        Some(config)
    };

    let mut game = Game::new(opponent);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        println!("{}", game.board());
        if game.board().is_over() {
            print_status(game.board());
            process::exit(0);
        }

        if let Some(mov) = game.engine_turn() {
            println!("engine plays {}", mov);
            continue;
        }

        print!("{} to move> ", game.board().side_to_move());
        io::stdout().flush().ok();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => process::exit(0),
        };

        match line.trim() {
            "" => {}
            "quit" => process::exit(0),
            "restart" => game.restart(),
            "moves" => {
                let side = game.board().side_to_move();
                let moves: Vec<String> = game
                    .board()
                    .all_legal_moves(side)
                    .iter()
                    .map(|mov| mov.to_string())
                    .collect();
                println!("{}", moves.join(" "));
            }
            text => match text.parse::<Move>() {
                Ok(mov) => {
                    if let Err(err) = game.play(mov) {
                        println!("{}", err);
                    }
                }
                Err(err) => println!("{}", err),
            },
        }
    }
}

fn run_perft(matches: &ArgMatches) -> ! {
    let depth = value_t_or_exit!(matches, "depth", u32);
    let board = board_after(matches);

    println!("depth: {}", depth);
    println!();
    println!("{}", board);
    for i in 1..depth + 1 {
        let start = Instant::now();
        let results = perft(&board, i);
        let ms = start.elapsed().as_millis();
        println!("perft({}) = {} ({} ms)", i, results, ms);
    }

    process::exit(0);
}

#[derive(Serialize)]
struct Evaluation {
    engine_color: Color,
    static_score: Score,
    search: Option<SearchResult>,
}

fn run_evaluate(matches: &ArgMatches, config: SearchConfig) -> ! {
    let config = with_depth(matches, config);
    let board = board_after(matches);

    let evaluator = PositionalEvaluator::new();
    let mut searcher: AlphaBetaSearcher<PositionalEvaluator> = AlphaBetaSearcher::new(config);
    let report = Evaluation {
        engine_color: config.engine_color,
        static_score: evaluator.evaluate(&board, config.engine_color),
        search: searcher.search(&board),
    };

    if matches.is_present("json") {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("failed to serialize evaluation: {}", err);
                process::exit(1);
            }
        }
        process::exit(0);
    }

    println!("engine: {}", config.engine_color);
    println!("depth:  {}", config.depth);
    println!();
    println!("{}", board);
    print_status(&board);
    println!("static score: {}", report.static_score);
    match report.search {
        Some(result) => {
            match result.best_move {
                Some(mov) => println!("best move: {}", mov),
                None => println!("best move: none"),
            }
            println!("    score: {}", result.score);
            println!("    nodes: {}", result.nodes_searched);
        }
        None => println!("{} to move, not searching", board.side_to_move()),
    }

    process::exit(0);
}
