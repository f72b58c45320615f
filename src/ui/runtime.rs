use crate::duration::TICK_INTERVAL;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::clock::{ClockEffect, ClockIntent, TimerState};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::key_to_intent;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// How long to wait for an event before redrawing anyway.
const IDLE_REDRAW: Duration = Duration::from_millis(250);

/// Runs the clock screen until the user quits or a signal arrives.
pub fn run(initial: TimerState) -> io::Result<()> {
    let shutdown = ShutdownHandle::new();
    shutdown.register_signals()?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_INTERVAL, shutdown.clone());
    let mut app = App::new(initial);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.dispatch(ClockIntent::Resize {
            width: cols,
            height: rows,
        });
    }
    events.schedule_tick();

    let result = event_loop(&mut terminal, &mut app, &events);

    shutdown.signal();
    drop(guard);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app.state()))?;

        let effect = match events.next(IDLE_REDRAW) {
            Ok(AppEvent::Key(key)) => match key_to_intent(key, Instant::now()) {
                Some(intent) => app.dispatch(intent),
                None => None,
            },
            Ok(AppEvent::Tick(at)) => app.dispatch(ClockIntent::Tick { at }),
            Ok(AppEvent::Resize(cols, rows)) => app.dispatch(ClockIntent::Resize {
                width: cols,
                height: rows,
            }),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Termination signal received");
                app.dispatch(ClockIntent::Quit)
            }
            Ok(AppEvent::InputError(error)) => {
                tracing::error!(%error, "Terminal input failed");
                return Err(io::Error::other(error));
            }
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        };

        if app.should_quit() {
            tracing::info!("Quit requested");
            return Ok(());
        }

        match effect {
            Some(ClockEffect::ScheduleTick) => events.schedule_tick(),
            Some(ClockEffect::Bell) => ring_bell(),
            Some(ClockEffect::Quit) | None => {}
        }
    }
}

fn ring_bell() {
    let mut stdout = io::stdout();
    if let Err(error) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
        tracing::warn!(%error, "Failed to ring terminal bell");
    }
}
