use crossterm::event::{self, Event, KeyEvent};
use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownHandle;

/// Upper bound on a single input poll, so shutdown and signals are noticed promptly.
const MAX_POLL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Scheduled tick, carrying the instant it fired.
    Tick(Instant),
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
    /// Reading terminal input failed; the input thread has stopped.
    InputError(String),
}

/// Single-consumer event queue fed by a background input thread.
///
/// Ticks are one-shot: each [`EventHandler::schedule_tick`] produces exactly
/// one `Tick` after `tick_rate`, and the consumer re-arms it when it wants
/// the next one.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tick_rate: Duration,
    tick_deadline: Arc<Mutex<Option<Instant>>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_deadline = Arc::new(Mutex::new(None::<Instant>));
        let deadline = Arc::clone(&tick_deadline);

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            if shutdown.take_interrupt() && tx.send(AppEvent::Shutdown).is_err() {
                break;
            }

            let pending = *deadline.lock();
            let timeout = pending
                .map(|at| at.saturating_duration_since(Instant::now()))
                .unwrap_or(MAX_POLL)
                .min(MAX_POLL);

            let polled = match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        let _ = tx.send(AppEvent::InputError(err.to_string()));
                        break;
                    }
                },
                Ok(false) => Ok(()),
                Err(err) => {
                    let _ = tx.send(AppEvent::InputError(err.to_string()));
                    break;
                }
            };
            if polled.is_err() {
                break;
            }

            let due = {
                let mut slot = deadline.lock();
                match *slot {
                    Some(at) if at <= Instant::now() => slot.take(),
                    _ => None,
                }
            };
            if due.is_some() && tx.send(AppEvent::Tick(Instant::now())).is_err() {
                break;
            }
        });

        Self {
            rx,
            tick_rate,
            tick_deadline,
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Arms the next tick. A tick already pending keeps its deadline.
    pub fn schedule_tick(&self) {
        let mut slot = self.tick_deadline.lock();
        if slot.is_none() {
            *slot = Some(Instant::now() + self.tick_rate);
        }
    }
}
