use rand::Rng;
use uuid::Uuid;

use crate::models::result::InterviewResult;
use crate::models::session::Submission;
use crate::scoring::canned::demo_result;
use crate::session::indicators::{Level, LiveIndicators};
use crate::session::{SessionError, SessionPhase};

/// What a countdown tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not recording; nothing changed.
    Idle,
    /// Countdown moved down to the carried value.
    Counting(u32),
    /// Countdown hit zero and the session advanced to the carried phase.
    Expired(SessionPhase),
}

/// Point-in-time view of a session for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub question: Option<String>,
    pub total_questions: usize,
    pub answered: usize,
    pub countdown: u32,
    /// `countdown` as `m:ss`.
    pub countdown_label: String,
    pub recording: bool,
    pub stress: f64,
    pub confidence: f64,
    pub stress_level: Level,
    pub confidence_level: Level,
}

/// One candidate's run through a question set, held on the client.
///
/// `NotStarted → Answering(i) → … → Submitting → Completed`. Answers are
/// appended on advance, so the answer count never exceeds the question count,
/// and the countdown always stays within `0..=time_limit`.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    id: Uuid,
    remote_id: Option<String>,
    role: String,
    questions: Vec<String>,
    answers: Vec<String>,
    draft: Option<String>,
    phase: SessionPhase,
    time_limit: u32,
    countdown: u32,
    recording: bool,
    indicators: LiveIndicators,
    result: Option<InterviewResult>,
}

impl InterviewSession {
    pub fn new(role: impl Into<String>, questions: Vec<String>, time_limit: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            remote_id: None,
            role: role.into(),
            questions,
            answers: Vec::new(),
            draft: None,
            phase: SessionPhase::NotStarted,
            time_limit,
            countdown: time_limit,
            recording: false,
            indicators: LiveIndicators::default(),
            result: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Identifier assigned by the backend, if session start succeeded.
    pub fn remote_id(&self) -> Option<&str> {
        self.remote_id.as_deref()
    }

    pub fn set_remote_id(&mut self, remote_id: String) {
        self.remote_id = Some(remote_id);
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn indicators(&self) -> &LiveIndicators {
        &self.indicators
    }

    pub fn result(&self) -> Option<&InterviewResult> {
        self.result.as_ref()
    }

    /// The scored result, or the demonstration result when none arrived.
    pub fn result_or_demo(&self) -> InterviewResult {
        self.result.clone().unwrap_or_else(demo_result)
    }

    pub fn current_question(&self) -> Option<&str> {
        match self.phase {
            SessionPhase::Answering { index } => self.questions.get(index).map(String::as_str),
            _ => None,
        }
    }

    pub fn countdown_label(&self) -> String {
        format_countdown(self.countdown)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            question: self.current_question().map(str::to_string),
            total_questions: self.questions.len(),
            answered: self.answers.len(),
            countdown: self.countdown,
            countdown_label: self.countdown_label(),
            recording: self.recording,
            stress: self.indicators.stress(),
            confidence: self.indicators.confidence(),
            stress_level: self.indicators.stress_level(),
            confidence_level: self.indicators.confidence_level(),
        }
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.require_phase(SessionPhase::NotStarted, "start")?;
        self.phase = SessionPhase::Answering { index: 0 };
        self.countdown = self.time_limit;
        Ok(())
    }

    /// Opens the timed answer window for the current question and resets the
    /// countdown. Returns false if a window was already open.
    pub fn begin_answer(&mut self) -> Result<bool, SessionError> {
        self.answering_index("begin an answer")?;
        if self.recording {
            return Ok(false);
        }
        self.recording = true;
        self.countdown = self.time_limit;
        Ok(true)
    }

    /// Closes the answer window. Returns whether one was open.
    pub fn stop_answer(&mut self) -> bool {
        std::mem::replace(&mut self.recording, false)
    }

    /// Stores text captured for the current question; it becomes the answer
    /// when the session advances.
    pub fn capture(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.answering_index("capture an answer")?;
        self.draft = Some(text.into());
        Ok(())
    }

    /// One countdown unit. Only counts while recording; zero auto-advances.
    pub fn tick(&mut self) -> Result<Tick, SessionError> {
        if !self.recording || !matches!(self.phase, SessionPhase::Answering { .. }) {
            return Ok(Tick::Idle);
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return Ok(Tick::Counting(self.countdown));
        }
        self.advance().map(Tick::Expired)
    }

    /// Moves the live indicators one step. Only while recording.
    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.recording {
            return false;
        }
        self.indicators.perturb(rng);
        true
    }

    /// Records the current answer (captured text or a placeholder) and moves
    /// to the next question, or to `Submitting` after the last one.
    pub fn advance(&mut self) -> Result<SessionPhase, SessionError> {
        let index = self.answering_index("advance")?;

        if let Some(question) = self.questions.get(index) {
            let answer = self
                .draft
                .take()
                .unwrap_or_else(|| format!("Answer to: {question}"));
            self.answers.push(answer);
        }

        self.recording = false;
        self.countdown = self.time_limit;
        self.phase = if index + 1 < self.questions.len() {
            SessionPhase::Answering { index: index + 1 }
        } else {
            SessionPhase::Submitting
        };
        Ok(self.phase)
    }

    pub fn submission(&self) -> Result<Submission, SessionError> {
        self.require_phase(SessionPhase::Submitting, "build a submission")?;
        Ok(Submission {
            session_id: self.remote_id.clone(),
            role: self.role.clone(),
            answers: self.answers.clone(),
        })
    }

    /// Ends the session. `None` means the submission failed.
    pub fn complete(&mut self, result: Option<InterviewResult>) -> Result<(), SessionError> {
        self.require_phase(SessionPhase::Submitting, "complete")?;
        self.result = result;
        self.phase = SessionPhase::Completed;
        Ok(())
    }

    fn require_phase(&self, phase: SessionPhase, action: &'static str) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    fn answering_index(&self, action: &'static str) -> Result<usize, SessionError> {
        match self.phase {
            SessionPhase::Answering { index } => Ok(index),
            phase => Err(SessionError::InvalidTransition { action, phase }),
        }
    }
}

/// `125` → `"2:05"`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
