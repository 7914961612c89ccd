//! Terminal GeoQuest runner (default binary).
//!
//! Drives the session core from a crossterm poll-then-tick loop: input is
//! mapped to session commands, elapsed time is fed to the core, and the
//! snapshot is redrawn every frame.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geoquest::audio::DebugAudioSink;
use geoquest::core::Session;
use geoquest::data;
use geoquest::input::map_key;
use geoquest::term::{GameView, TerminalRenderer};
use geoquest::types::{PlayerCommand, TICK_MS};

#[derive(Debug, Default)]
struct Args {
    countries: Option<PathBuf>,
    seed: Option<u32>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--countries" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --countries"))?;
                parsed.countries = Some(PathBuf::from(v));
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                parsed.seed = Some(seed);
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(parsed)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    // Logs go to stderr so the alternate screen stays clean; quiet unless
    // RUST_LOG says otherwise.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoquest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw_args)?;

    let pool = match &args.countries {
        Some(path) => data::load_countries(path)?,
        None => data::builtin_countries(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut session = Session::new(pool, Box::new(DebugAudioSink), seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::new();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let snap = session.snapshot();
        term.draw(&view.render(&snap))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(command) = map_key(snap.status, key.code) {
                        match command {
                            PlayerCommand::Quit => return Ok(()),
                            PlayerCommand::Start(difficulty) => {
                                session.start_session(difficulty)?;
                            }
                            PlayerCommand::RestartSame => {
                                let difficulty = session.difficulty();
                                session.start_session(difficulty)?;
                            }
                            PlayerCommand::Select(index) => {
                                if let Some(option) = snap.options.get(index) {
                                    session.submit_selection(Some(&option.id));
                                }
                            }
                            PlayerCommand::ReturnToMenu => session.return_to_menu(),
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_defaults() {
        let args = parse_args(&[]).unwrap();
        assert!(args.countries.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_parse_args_values() {
        let raw = vec![
            "--countries".to_string(),
            "pool.json".to_string(),
            "--seed".to_string(),
            "42".to_string(),
        ];
        let args = parse_args(&raw).unwrap();
        assert_eq!(args.countries, Some(PathBuf::from("pool.json")));
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn test_parse_args_rejects_unknown() {
        assert!(parse_args(&["--bogus".to_string()]).is_err());
        assert!(parse_args(&["--seed".to_string()]).is_err());
        assert!(parse_args(&["--seed".to_string(), "abc".to_string()]).is_err());
    }
}
