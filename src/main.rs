use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use aces_up::{
    Activation, EngineError, GameConfig, GameController, Hint, Snapshot, Status, SystemClock, View,
    STACK_COUNT,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aces-up")]
#[command(about = "Aces Up solitaire, driven by commands on stdin")]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Hint highlight duration in milliseconds
    #[arg(long)]
    hint_ms: Option<u64>,

    /// JSON config file; command-line options override it
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Print `state` as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    NewGame,
    Deal,
    Remove(usize),
    Move(usize, usize),
    Select(usize),
    Undo,
    Redo,
    Hint,
    State,
    Quit,
}

/// Parse one input line. Stack numbers are 1-based.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let stack = |s: &str| -> Result<usize, String> {
        match s.parse::<usize>() {
            Ok(n) if (1..=STACK_COUNT).contains(&n) => Ok(n - 1),
            _ => Err(format!("stack must be 1..={STACK_COUNT}, got {s:?}")),
        }
    };
    let arity = |n: usize| -> Result<(), String> {
        if args.len() == n {
            Ok(())
        } else {
            Err(format!("{name} takes {n} argument(s), got {}", args.len()))
        }
    };

    let command = match name {
        "new-game" => arity(0).map(|_| Command::NewGame)?,
        "deal" => arity(0).map(|_| Command::Deal)?,
        "remove" => {
            arity(1)?;
            Command::Remove(stack(args[0])?)
        }
        "move" => {
            arity(2)?;
            Command::Move(stack(args[0])?, stack(args[1])?)
        }
        "select" => {
            arity(1)?;
            Command::Select(stack(args[0])?)
        }
        "undo" => arity(0).map(|_| Command::Undo)?,
        "redo" => arity(0).map(|_| Command::Redo)?,
        "hint" => arity(0).map(|_| Command::Hint)?,
        "state" => arity(0).map(|_| Command::State)?,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}")),
    };
    Ok(Some(command))
}

/// Announces the end of a game.
struct TerminalView {
    last_status: Status,
}

impl View for TerminalView {
    fn render(&mut self, snapshot: &Snapshot) {
        if snapshot.status != self.last_status {
            match snapshot.status {
                Status::Won => println!("You win! {} moves.", snapshot.move_count),
                Status::Lost => println!("No moves left. Game over."),
                _ => {}
            }
            self.last_status = snapshot.status;
        }
    }
}

fn load_config(args: &Args) -> Result<GameConfig, EngineError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| EngineError::Config {
                detail: format!("{}: {e}", path.display()),
            })?;
            GameConfig::from_json(&text)?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = args.hint_ms {
        config = config.with_hint_duration_ms(ms);
    }
    Ok(config)
}

fn verdict(accepted: bool) -> &'static str {
    if accepted {
        "ok"
    } else {
        "rejected"
    }
}

/// Drive one session from `input`, one command per line, replying on `out`.
///
/// Rule rejections are ordinary replies. Malformed input and engine errors
/// end the session with `Err`.
fn run<R: BufRead, W: Write>(args: &Args, input: R, out: &mut W) -> Result<(), String> {
    let config = load_config(args).map_err(|e| e.to_string())?;
    let view = TerminalView {
        last_status: Status::NotStarted,
    };
    let mut game = GameController::new(config, view, SystemClock::new()).map_err(|e| e.to_string())?;

    for line in input.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let Some(command) = parse_command(&line)? else {
            continue;
        };
        game.tick();

        let engine = |e: EngineError| e.to_string();
        let reply = match command {
            Command::NewGame => {
                game.new_game().map_err(engine)?;
                "ok".to_string()
            }
            Command::Deal => verdict(game.deal().map_err(engine)?).to_string(),
            Command::Remove(stack) => verdict(game.attempt_remove(stack).map_err(engine)?).to_string(),
            Command::Move(from, to) => verdict(game.attempt_move(from, to).map_err(engine)?).to_string(),
            Command::Select(stack) => {
                let text = match game.on_card_activated(stack).map_err(engine)? {
                    Activation::Removed => "removed",
                    Activation::Moved => "moved",
                    Activation::Selected => "selected",
                    Activation::Deselected => "deselected",
                    Activation::Rejected => "rejected",
                };
                text.to_string()
            }
            Command::Undo => verdict(game.undo().map_err(engine)?).to_string(),
            Command::Redo => verdict(game.redo().map_err(engine)?).to_string(),
            Command::Hint => match game.show_hint() {
                Some(Hint::RemoveCard { stack }) => format!("remove {}", stack + 1),
                Some(Hint::MoveCard { from, to }) => format!("move {} {}", from + 1, to + 1),
                Some(Hint::Deal) => "deal".to_string(),
                None => "none".to_string(),
            },
            Command::State => {
                let snapshot = game.snapshot();
                if args.json {
                    serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?
                } else {
                    snapshot.to_string().trim_end().to_string()
                }
            }
            Command::Quit => break,
        };
        writeln!(out, "{reply}").map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aces_up=warn")),
        )
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    match run(&args, stdin.lock(), &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
