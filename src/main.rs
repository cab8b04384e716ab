use crossterm::cursor;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::input::{self, GameInput};
use flappy::{build_info, logging, ui, FlappyError, GameConfig, Result, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::time::Instant;
use tracing::info;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play { seed: Option<u64> },
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut seed = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" => {
                i += 1;
                let value = args.get(i).cloned().unwrap_or_default();
                seed = Some(value.parse().map_err(|_| FlappyError::InvalidArgument {
                    flag: "--seed".to_string(),
                    value,
                })?);
            }
            other => return Err(FlappyError::UnknownCommand(other.to_string())),
        }
        i += 1;
    }
    Ok(Command::Play { seed })
}

fn print_help() {
    println!("Flappy - terminal Flappy Bird\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed N   Use a fixed seed for obstacle heights");
    println!("  --version  Show version information");
    println!("  --help     Show this help message\n");
    println!("Controls: Space/Up/Enter/click to jump, q/Esc to quit.");
    println!("Set FLAPPY_LOG=info and redirect stderr to a file for logs.");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|command| match command {
        Command::Version => {
            println!("{}", build_info::version_line());
            Ok(())
        }
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Play { seed } => play(seed),
    });

    if let Err(e) = result {
        eprintln!("flappy: {}", e);
        if matches!(e, FlappyError::UnknownCommand(_)) {
            eprintln!("Run 'flappy --help' for usage.");
        }
        std::process::exit(1);
    }
}

fn play(seed: Option<u64>) -> Result<()> {
    logging::init_default();

    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut session = Session::new(GameConfig::default(), rng)?;
    info!(?seed, "starting flappy");

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_game(&mut terminal, &mut session);
    // Restore the terminal even if the loop failed
    let restored = restore_terminal();
    result?;
    restored?;

    println!(
        "Best score: {} over {} run(s). Goodbye!",
        session.best_score(),
        session.runs()
    );
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    match enter_game_screen() {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            // Raw mode is already on; undo whatever part of the setup ran
            let _ = restore_terminal();
            Err(e)
        }
    }
}

fn enter_game_screen() -> Result<Tui> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Put the terminal back the way the shell expects it.
///
/// Every step runs even if an earlier one failed; the first error is returned.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = leave_game_screen(&mut io::stdout());
    raw.and(screen)?;
    Ok(())
}

fn leave_game_screen<W: Write>(out: &mut W) -> io::Result<()> {
    let mouse = out.execute(DisableMouseCapture).map(|_| ());
    let screen = out.execute(LeaveAlternateScreen).map(|_| ());
    let shown = out.execute(cursor::Show).map(|_| ());
    mouse.and(screen).and(shown)
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// Draw, poll input until the next tick is due, then step the simulation.
fn run_game(terminal: &mut Tui, session: &mut Session<ChaCha8Rng>) -> Result<()> {
    let tick_interval = session.config().tick_interval();
    let mut last_tick = Instant::now();

    loop {
        let render = session.render_state();
        terminal.draw(|frame| ui::draw_ui(frame, &render))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match input::map_event(&event::read()?) {
                GameInput::Jump => {
                    session.jump();
                }
                GameInput::Quit => return Ok(()),
                GameInput::Other => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            session.tick();
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_plays_unseeded() {
        assert_eq!(parse_args(&[]).unwrap(), Command::Play { seed: None });
    }

    #[test]
    fn test_seed_flag() {
        assert_eq!(
            parse_args(&args(&["--seed", "42"])).unwrap(),
            Command::Play { seed: Some(42) }
        );
    }

    #[test]
    fn test_bad_seed() {
        let err = parse_args(&args(&["--seed", "forty"])).unwrap_err();
        assert!(matches!(err, FlappyError::InvalidArgument { .. }));

        let err = parse_args(&args(&["--seed"])).unwrap_err();
        assert!(matches!(err, FlappyError::InvalidArgument { .. }));
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(&args(&["-v"])).unwrap(), Command::Version);
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
    }

    /// Writer that rejects every write and counts the attempts.
    struct ClosedWriter {
        writes: usize,
    }

    impl Write for ClosedWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_leave_game_screen_sequences() {
        let mut out = Vec::new();
        leave_game_screen(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"), "alternate screen not left");
        assert!(text.contains("\x1b[?25h"), "cursor not shown");
    }

    #[test]
    fn test_leave_game_screen_runs_every_step() {
        let mut out = ClosedWriter { writes: 0 };
        let err = leave_game_screen(&mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // Mouse capture, alternate screen and cursor were each attempted
        assert!(out.writes >= 3, "only {} writes attempted", out.writes);
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_args(&args(&["update"])).unwrap_err();
        assert!(matches!(err, FlappyError::UnknownCommand(ref c) if c == "update"));
    }
}
