mod app;
mod field;
mod ui;
mod util;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use crate::field::PhoneField;
use dialfield_core::{validate_debounce_ms, FieldMode};
use dialfield_lookup::{CachedLookup, FixedLookupService, HttpLookupService, LookupService};

#[derive(Debug, Parser)]
#[command(name = "dialfield", version, about = "phone/SID field demo form")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Validation backend endpoint; overrides the configured one.
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long)]
    debounce_ms: Option<u64>,
    /// Accept SID identifiers only.
    #[arg(long)]
    sid: bool,
    /// Accept both phone numbers and SID identifiers.
    #[arg(long, conflicts_with = "sid")]
    mixed: bool,
    /// Start with the field disabled.
    #[arg(long)]
    disabled: bool,
    /// Replace the built-in helper line.
    #[arg(long)]
    helper: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = dialfield_config::load(args.config.clone()).context("load config")?;

    let debounce_ms = match args.debounce_ms {
        Some(ms) => validate_debounce_ms(ms).context("invalid --debounce-ms")?,
        None => config.debounce_ms,
    };

    let mode = if args.mixed {
        FieldMode::mixed()
    } else if args.sid {
        FieldMode::sid_only()
    } else {
        config.field_mode().context("configured input_kinds")?
    };

    let endpoint = args.endpoint.or_else(|| config.lookup.endpoint.clone());
    let service: Box<dyn LookupService> = match endpoint {
        Some(endpoint) => Box::new(HttpLookupService::new(
            endpoint,
            config.lookup.timeout_secs,
            None,
        )),
        None => Box::new(demo_numbers()),
    };
    let mut lookup = CachedLookup::new(service);

    let field = PhoneField::new(mode, debounce_ms).with_disabled(args.disabled);
    let mut app = App::new(field, Instant::now());
    app.helper_override = args.helper;

    let mut terminal = TerminalGuard::new()?;
    run_app(&mut terminal, &mut app, &mut lookup)
}

/// Offline backend for running the demo without a validation service.
fn demo_numbers() -> FixedLookupService {
    FixedLookupService::new()
        .with_number("+14155550100", true)
        .with_number("+442079460958", true)
        .with_number("+15005550001", false)
}

fn run_app(
    terminal: &mut TerminalGuard,
    app: &mut App,
    lookup: &mut dyn LookupService,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        app.tick(Instant::now(), lookup);

        terminal.terminal_mut().draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key, Instant::now()),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
