//! Timer-driven transcript pacer.
//!
//! # Architecture
//! - `SimulatorHandle::start` owns the session plus two tokio tasks: a 1 s
//!   ticker for the elapsed readout, and a pacer that appends the next
//!   scripted line after a re-rolled randomized delay.
//! - Both tasks stop themselves once the session leaves `Recording`, and are
//!   aborted on `close` and on drop, so a discarded session can never be
//!   mutated by a stale timer.
//! - While paused the pacer re-rolls without appending; the only ordering
//!   guarantee is strict append order of the fixed script.

use std::sync::Arc;

use rand::Rng;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, Duration};
use tracing::debug;

use crate::errors::AppError;
use crate::interview::script::Script;
use crate::interview::session::{InterviewSession, Stage};

pub struct SimulatorHandle {
    script: Script,
    session: Arc<Mutex<InterviewSession>>,
    ticker: JoinHandle<()>,
    pacer: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Starts a fresh recording session and spawns its timer tasks.
    pub fn start(script: Script) -> Self {
        let mut session = InterviewSession::new();
        session.start();
        debug!(session = %session.id, title = script.title, "interview started");
        let session = Arc::new(Mutex::new(session));

        let ticker = tokio::spawn(run_ticker(Arc::clone(&session)));
        let pacer = tokio::spawn(run_pacer(Arc::clone(&session), script));

        SimulatorHandle {
            script,
            session,
            ticker,
            pacer,
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// A point-in-time copy of the session for rendering.
    pub async fn snapshot(&self) -> InterviewSession {
        self.session.lock().await.clone()
    }

    pub async fn pause(&self) {
        self.session.lock().await.pause();
    }

    pub async fn resume(&self) {
        self.session.lock().await.resume();
    }

    /// Completes the interview if the transcript gate is met; the timer tasks
    /// wind down once the stage leaves `Recording`.
    pub async fn complete(&self) -> Result<InterviewSession, AppError> {
        let mut session = self.session.lock().await;
        session.complete()?;
        Ok(session.clone())
    }

    /// Cancels the timer tasks and hard-resets the session, regardless of
    /// stage. Used when the dialog closes.
    pub async fn close(&self) {
        self.ticker.abort();
        self.pacer.abort();
        self.session.lock().await.reset();
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.ticker.abort();
        self.pacer.abort();
    }
}

async fn run_ticker(session: Arc<Mutex<InterviewSession>>) {
    let mut clock = interval(Duration::from_secs(1));
    clock.tick().await; // the first tick fires immediately
    loop {
        clock.tick().await;
        let mut session = session.lock().await;
        if session.stage() != Stage::Recording {
            break;
        }
        session.tick();
    }
}

async fn run_pacer(session: Arc<Mutex<InterviewSession>>, script: Script) {
    loop {
        let delay = roll_delay(&script);
        sleep(Duration::from_millis(delay)).await;

        let mut session = session.lock().await;
        if session.stage() != Stage::Recording {
            break;
        }
        if !session.is_active() {
            continue; // paused: skip this slot and re-roll
        }
        if !session.append_next(&script) {
            break; // script exhausted
        }
    }
}

fn roll_delay(script: &Script) -> u64 {
    rand::thread_rng().gen_range(script.min_delay_ms..=script.max_delay_ms)
}
