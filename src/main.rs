use clap::Parser;
use simon_says::{
    config::Config, Difficulty, InputOutcome, Mode, RoundController, Scheduler, Symbol,
};
use std::io::{self, BufRead, BufReader, Write};
use std::sync::mpsc::{self, Receiver};
use std::thread;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::parse();
    log::debug!("{:?}", config);

    println!("Simon Says v0.1.0");
    println!("Type 'START' to play, 'HELP' for help\n");

    let mut controller = RoundController::new(
        config.difficulty,
        Scheduler::new(),
        config.peripherals(),
        config.rng(),
    );
    let lines = spawn_line_reader(BufReader::new(io::stdin()));

    loop {
        // Let the playback run in real time before asking for input
        if wait_for_turn(&mut controller) {
            let dropped = discard_pending(&lines);
            if dropped > 0 {
                println!("Ignored {} line(s) typed during playback", dropped);
            }
        }

        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        // The reader hangs up at end of input
        let Ok(line) = lines.recv() else {
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if input.eq_ignore_ascii_case("start") {
            if let Err(e) = controller.start() {
                println!("Error: {}", e);
            }
            continue;
        }

        if input.eq_ignore_ascii_case("reset") {
            controller.reset();
            continue;
        }

        let mut words = input.split_whitespace();
        if words
            .next()
            .is_some_and(|word| word.eq_ignore_ascii_case("difficulty"))
        {
            match change_difficulty(&mut controller, words.next()) {
                Ok(difficulty) => println!("Difficulty: {}", difficulty),
                Err(e) => println!("Error: {}", e),
            }
            continue;
        }

        match Symbol::parse_line(input) {
            Ok(symbols) => press_all(&mut controller, &symbols),
            Err(e) => println!("Error: {} (type HELP for commands)", e),
        }
    }
}

/// Read lines on a separate thread so input typed during playback can be told apart
fn spawn_line_reader<R: BufRead + Send + 'static>(input: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Drop every line already received. Returns how many were dropped.
fn discard_pending(lines: &Receiver<String>) -> usize {
    lines.try_iter().count()
}

/// Run the playback in real time. Returns true if anything was shown.
fn wait_for_turn(controller: &mut RoundController) -> bool {
    let mut played = false;
    while controller.mode() == Mode::Showing {
        let Some((wait, event)) = controller.next_timer() else {
            break;
        };
        thread::sleep(wait);
        controller.on_timer(event);
        played = true;
    }
    played
}

fn change_difficulty(
    controller: &mut RoundController,
    name: Option<&str>,
) -> Result<Difficulty, String> {
    let name = name.ok_or_else(|| "Usage: DIFFICULTY easy|medium|hard".to_string())?;
    let difficulty: Difficulty = name.parse().map_err(|e| format!("{}", e))?;
    controller
        .set_difficulty(difficulty)
        .map_err(|e| format!("{}", e))?;
    Ok(difficulty)
}

fn press_all(controller: &mut RoundController, symbols: &[Symbol]) {
    for (index, symbol) in symbols.iter().enumerate() {
        match controller.on_player_input(*symbol) {
            InputOutcome::Accepted => {}
            InputOutcome::Ignored => {
                println!("Not your turn yet");
                return;
            }
            InputOutcome::RoundComplete { .. } | InputOutcome::GameOver { .. } => {
                if index + 1 < symbols.len() {
                    println!("Ignored {} extra press(es)", symbols.len() - index - 1);
                }
                return;
            }
        }
    }
}

fn print_help() {
    println!("Simon Says - Available Commands:");
    println!();
    println!("  START                    - Start a new game");
    println!("  RESET                    - Abandon the game");
    println!("  DIFFICULTY hard          - easy, medium or hard (not during a game)");
    println!("  HELP                     - Show this help");
    println!("  EXIT                     - Quit");
    println!();
    println!("Playing:");
    println!("  Watch the sequence, then type it back when it is your turn.");
    println!("  r g b y                  - Press red, green, blue, yellow");
    println!("  red green                - Full color names work too");
    println!("  Lines typed while the sequence is showing are discarded.");
    println!();
}
