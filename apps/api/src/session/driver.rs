use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::config::DEFAULT_QUESTION_TIME_LIMIT;
use crate::models::session::StartSessionResponse;
use crate::session::client::{ClientError, InterviewBackend};
use crate::session::lifecycle::{InterviewSession, SessionSnapshot, Tick};
use crate::session::timer::{RecordingTimers, TimerEvent, TimerKind};
use crate::session::{SessionError, SessionPhase};

#[derive(Debug, Clone, Copy)]
pub struct DriverSettings {
    /// Countdown units per question.
    pub time_limit: u32,
    /// Length of one countdown unit.
    pub tick: Duration,
    pub indicator_period: Duration,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_QUESTION_TIME_LIMIT,
            tick: Duration::from_secs(1),
            indicator_period: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    BeginAnswer,
    StopAnswer,
    Capture(String),
    Next,
    Abort,
}

#[derive(Debug)]
pub enum SessionOutcome {
    /// Every question was answered and a submission was attempted.
    Completed(InterviewSession),
    /// The caller left before the end.
    Aborted(InterviewSession),
}

impl SessionOutcome {
    pub fn session(&self) -> &InterviewSession {
        match self {
            SessionOutcome::Completed(session) | SessionOutcome::Aborted(session) => session,
        }
    }
}

/// Owns one interview session and the timers that drive it.
///
/// Commands, timer events and the session-start reply are handled one at a
/// time on a single task, so the session needs no locking. The start call
/// runs on its own task and never holds up the question flow. Timers only
/// exist while an answer is being recorded and are dropped on every path out
/// of a recording window, including when the driver itself is dropped.
pub struct SessionDriver {
    backend: Arc<dyn InterviewBackend>,
    session: InterviewSession,
    settings: DriverSettings,
    timers: Option<RecordingTimers>,
    generation: u64,
    start_attempted: bool,
    timer_tx: mpsc::UnboundedSender<TimerEvent>,
    timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    start_tx: mpsc::UnboundedSender<Result<StartSessionResponse, ClientError>>,
    start_rx: mpsc::UnboundedReceiver<Result<StartSessionResponse, ClientError>>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl SessionDriver {
    /// Loads the question set for `role`. A failed load is returned to the
    /// caller to show; it is not retried.
    pub async fn prepare(
        backend: Arc<dyn InterviewBackend>,
        role: &str,
        settings: DriverSettings,
    ) -> Result<Self, ClientError> {
        let questions = backend.questions(role).await?;
        info!(role, questions = questions.len(), "question set loaded");
        let session = InterviewSession::new(role, questions, settings.time_limit);
        Ok(Self::new(backend, session, settings))
    }

    pub fn new(
        backend: Arc<dyn InterviewBackend>,
        session: InterviewSession,
        settings: DriverSettings,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (start_tx, start_rx) = mpsc::unbounded_channel();
        let (snapshots, _) = watch::channel(session.snapshot());
        Self {
            backend,
            session,
            settings,
            timers: None,
            generation: 0,
            start_attempted: false,
            timer_tx,
            timer_rx,
            start_tx,
            start_rx,
            snapshots,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn session(&self) -> &InterviewSession {
        &self.session
    }

    /// Runs the session until it completes or the command channel closes.
    pub async fn run(mut self, mut commands: mpsc::Receiver<SessionCommand>) -> SessionOutcome {
        if let Err(e) = self.session.start() {
            warn!("Session already started: {e}");
        }
        if self.session.questions().is_empty() {
            if let Err(e) = self.session.advance() {
                warn!("Could not skip empty question set: {e}");
            }
        }
        self.publish();

        while matches!(self.session.phase(), SessionPhase::Answering { .. }) {
            tokio::select! {
                command = commands.recv() => {
                    let flow = match command {
                        Some(command) => self.handle_command(command),
                        None => ControlFlow::Break(()),
                    };
                    if flow.is_break() {
                        self.stop_timers();
                        info!(session = %self.session.id(), "interview session aborted");
                        self.publish();
                        return SessionOutcome::Aborted(self.session);
                    }
                }
                Some(event) = self.timer_rx.recv() => self.handle_timer(event),
                Some(started) = self.start_rx.recv() => self.handle_started(started),
            }
            self.publish();
        }

        self.stop_timers();
        self.submit().await;
        self.publish();
        SessionOutcome::Completed(self.session)
    }

    fn handle_command(&mut self, command: SessionCommand) -> ControlFlow<()> {
        let applied = match command {
            SessionCommand::Abort => return ControlFlow::Break(()),
            SessionCommand::BeginAnswer => self.begin_answer(),
            SessionCommand::StopAnswer => {
                if self.session.stop_answer() {
                    self.stop_timers();
                }
                Ok(())
            }
            SessionCommand::Capture(text) => self.session.capture(text),
            SessionCommand::Next => {
                self.stop_timers();
                self.session
                    .advance()
                    .map(|phase| debug!(%phase, "advanced to next question"))
            }
        };
        if let Err(e) = applied {
            warn!("Ignoring command: {e}");
        }
        ControlFlow::Continue(())
    }

    fn begin_answer(&mut self) -> Result<(), SessionError> {
        if !self.session.begin_answer()? {
            return Ok(());
        }
        self.start_timers();

        if self.session.remote_id().is_none() && !self.start_attempted {
            self.start_attempted = true;
            let backend = Arc::clone(&self.backend);
            let role = self.session.role().to_string();
            let tx = self.start_tx.clone();
            tokio::spawn(async move {
                // The driver may have finished already; the reply is then moot.
                let _ = tx.send(backend.start_session(&role).await);
            });
        }
        Ok(())
    }

    /// Applies the server session id. The run loop only polls for it while
    /// questions remain, so a reply that lands after the last answer is
    /// dropped and the submission goes out without it.
    fn handle_started(&mut self, started: Result<StartSessionResponse, ClientError>) {
        match started {
            Ok(started) => {
                debug!(session_id = %started.session_id, "backend session started");
                self.session.set_remote_id(started.session_id);
            }
            Err(e) => warn!("Session start failed, continuing without a server id: {e}"),
        }
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        let current = self.timers.as_ref().map(RecordingTimers::generation);
        if current != Some(event.generation) {
            return;
        }

        match event.kind {
            TimerKind::Countdown => match self.session.tick() {
                Ok(Tick::Expired(phase)) => {
                    self.stop_timers();
                    info!(%phase, "answer time expired");
                }
                Ok(_) => {}
                Err(e) => warn!("Countdown tick rejected: {e}"),
            },
            TimerKind::Indicators => {
                self.session.perturb(&mut rand::thread_rng());
            }
        }
    }

    fn start_timers(&mut self) {
        self.generation += 1;
        self.timers = Some(RecordingTimers::start(
            self.generation,
            self.settings.tick,
            self.settings.indicator_period,
            &self.timer_tx,
        ));
    }

    fn stop_timers(&mut self) {
        self.timers = None;
    }

    async fn submit(&mut self) {
        let result = match self.session.submission() {
            Ok(submission) => match self.backend.submit(&submission).await {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Submission failed, results will show the demo result: {e}");
                    None
                }
            },
            Err(e) => {
                warn!("Nothing to submit: {e}");
                None
            }
        };

        let scored = result.is_some();
        match self.session.complete(result) {
            Ok(()) => info!(
                session = %self.session.id(),
                answers = self.session.answers().len(),
                scored,
                "interview session completed"
            ),
            Err(e) => warn!("Could not complete session: {e}"),
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.session.snapshot());
    }
}
