//! Interactive stepper for blocked matrix multiplication.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result, bail};
use blockstep::trace::init_tracing;
use blockstep::{RenderOptions, SimConfig, SimulationState, render_frame};
use clap::Parser;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Step through blocked matrix multiplication one multiply-add at a time"
)]
struct Cli {
    /// Matrix dimension N (the matrices are N×N)
    #[arg(long, short = 'n', default_value_t = blockstep::sim::config::DEFAULT_N)]
    size: usize,

    /// Block (tile) size; must divide N
    #[arg(long, short = 'b', default_value_t = blockstep::sim::config::DEFAULT_BLOCK)]
    block: usize,

    /// Start at this step instead of 0
    #[arg(long)]
    jump: Option<usize>,

    /// Run single-letter commands (n = next, p = previous, r = reset),
    /// print the final frame and exit
    #[arg(long)]
    script: Option<String>,

    /// Mark cells with brackets instead of ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Hide the loop nest listing
    #[arg(long)]
    no_loops: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    Reset,
    Jump(usize),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let cmd = match words.next() {
        None => return Some(Command::Next),
        Some(word) => word,
    };
    match cmd {
        "n" | "next" => Some(Command::Next),
        "p" | "prev" => Some(Command::Prev),
        "r" | "reset" => Some(Command::Reset),
        "q" | "quit" => Some(Command::Quit),
        "g" | "goto" => words.next()?.parse().ok().map(Command::Jump),
        _ => None,
    }
}

fn apply(sim: &mut SimulationState, cmd: Command) {
    let moved = match cmd {
        Command::Next => sim.advance(),
        Command::Prev => sim.retreat(),
        Command::Reset => {
            sim.reset();
            true
        }
        Command::Jump(target) => sim.jump_to(target) > 0,
        Command::Quit => false,
    };
    if !moved {
        debug!(?cmd, step = sim.step(), "command left state unchanged");
    }
}

fn run_script(sim: &mut SimulationState, script: &str) -> Result<()> {
    for ch in script.chars().filter(|c| !c.is_whitespace()) {
        let cmd = match ch {
            'n' => Command::Next,
            'p' => Command::Prev,
            'r' => Command::Reset,
            other => bail!("unknown script command {:?} (expected n, p or r)", other),
        };
        apply(sim, cmd);
    }
    Ok(())
}

fn run_interactive(sim: &mut SimulationState, opts: &RenderOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", render_frame(sim, opts))?;
        write!(stdout, "\n[n]ext  [p]rev  [r]eset  [g <step>]  [q]uit > ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line.context("failed to read command")?;

        match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(cmd) => apply(sim, cmd),
            None => {
                warn!(input = line.trim(), "unrecognised command");
                writeln!(stdout, "unrecognised command: {}", line.trim())?;
            }
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = SimConfig::new(cli.size, cli.block).context("invalid matrix/block size")?;
    let mut sim = SimulationState::new(config);
    if let Some(step) = cli.jump {
        sim.jump_to(step);
    }

    let opts = RenderOptions {
        color: !cli.no_color && io::stdout().is_terminal(),
        show_loops: !cli.no_loops,
    };

    match cli.script {
        Some(script) => {
            run_script(&mut sim, &script)?;
            print!("{}", render_frame(&sim, &opts));
            Ok(())
        }
        None => run_interactive(&mut sim, &opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_commands() {
        assert_eq!(parse_command(""), Some(Command::Next));
        assert_eq!(parse_command("next"), Some(Command::Next));
        assert_eq!(parse_command(" p "), Some(Command::Prev));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("g 12"), Some(Command::Jump(12)));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("g"), None);
        assert_eq!(parse_command("g x"), None);
        assert_eq!(parse_command("jump"), None);
    }

    #[test]
    fn script_drives_state() {
        let mut sim = SimulationState::default();
        run_script(&mut sim, "nnn p n").unwrap();
        assert_eq!(sim.step(), 3);
        run_script(&mut sim, "r").unwrap();
        assert_eq!(sim, SimulationState::default());
    }

    #[test]
    fn script_rejects_unknown_letters() {
        let mut sim = SimulationState::default();
        let err = run_script(&mut sim, "nx").unwrap_err();
        assert!(err.to_string().contains("unknown script command"));
        assert_eq!(sim.step(), 1);
    }
}
