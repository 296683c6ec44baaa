//! Interview session state machine: `Initial -> Recording -> Complete`.
//!
//! Pause/resume is a self-loop on `Recording`: only the `is_active` flag
//! changes. `reset` is an unconditional hard return to defaults from any
//! stage, used when the dialog closes. The machine itself is synchronous and
//! timer-free; the async pacing lives in `simulator`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::script::{Script, Speaker};

/// Completing an interview requires at least this many transcript lines.
pub const MIN_LINES_TO_COMPLETE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Initial,
    Recording,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub speaker: Speaker,
    pub text: String,
}

/// Derived completion-screen summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewSummary {
    pub duration_secs: u64,
    pub exchanges: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: Uuid,
    stage: Stage,
    transcript: Vec<Utterance>,
    elapsed_secs: u64,
    is_active: bool,
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewSession {
    pub fn new() -> Self {
        InterviewSession {
            id: Uuid::new_v4(),
            stage: Stage::Initial,
            transcript: Vec::new(),
            elapsed_secs: 0,
            is_active: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn transcript(&self) -> &[Utterance] {
        &self.transcript
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Begins recording: clears the transcript, zeroes the timer.
    pub fn start(&mut self) {
        self.stage = Stage::Recording;
        self.transcript.clear();
        self.elapsed_secs = 0;
        self.is_active = true;
    }

    pub fn pause(&mut self) {
        if self.stage == Stage::Recording {
            self.is_active = false;
        }
    }

    pub fn resume(&mut self) {
        if self.stage == Stage::Recording {
            self.is_active = true;
        }
    }

    /// One elapsed second of active recording.
    pub fn tick(&mut self) {
        if self.stage == Stage::Recording && self.is_active {
            self.elapsed_secs += 1;
        }
    }

    /// Appends the next scripted line in strict script order.
    /// Returns false once the script is exhausted.
    pub fn append_next(&mut self, script: &Script) -> bool {
        let Some(line) = script.lines.get(self.transcript.len()) else {
            return false;
        };
        self.transcript.push(Utterance {
            speaker: line.speaker,
            text: line.text.to_string(),
        });
        true
    }

    pub fn script_exhausted(&self, script: &Script) -> bool {
        self.transcript.len() >= script.len()
    }

    /// Finishes the interview. Rejected until the transcript holds at least
    /// `MIN_LINES_TO_COMPLETE` lines; the stage stays `Recording` on failure.
    pub fn complete(&mut self) -> Result<(), AppError> {
        if self.transcript.len() < MIN_LINES_TO_COMPLETE {
            return Err(AppError::GateNotSatisfied(format!(
                "the interview needs at least {MIN_LINES_TO_COMPLETE} transcript lines before it can be completed"
            )));
        }
        self.is_active = false;
        self.stage = Stage::Complete;
        Ok(())
    }

    /// Hard reset to initial defaults regardless of stage. The id is
    /// regenerated: nothing of the discarded session survives.
    pub fn reset(&mut self) {
        self.id = Uuid::new_v4();
        self.stage = Stage::Initial;
        self.transcript.clear();
        self.elapsed_secs = 0;
        self.is_active = false;
    }

    pub fn summary(&self) -> InterviewSummary {
        InterviewSummary {
            duration_secs: self.elapsed_secs,
            exchanges: self.transcript.len() / 2,
        }
    }
}

/// Formats elapsed seconds as the mm:ss readout shown next to the mic.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::script::WORK_STYLE;

    fn recording_session_with_lines(n: usize) -> InterviewSession {
        let mut session = InterviewSession::new();
        session.start();
        for _ in 0..n {
            assert!(session.append_next(&WORK_STYLE));
        }
        session
    }

    // ── stage transitions ───────────────────────────────────────────────────

    #[test]
    fn test_new_session_is_initial_and_idle() {
        let session = InterviewSession::new();
        assert_eq!(session.stage(), Stage::Initial);
        assert!(!session.is_active());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_start_clears_previous_state() {
        let mut session = recording_session_with_lines(2);
        session.tick();
        session.start();
        assert!(session.transcript().is_empty());
        assert_eq!(session.elapsed_secs(), 0);
        assert_eq!(session.stage(), Stage::Recording);
    }

    #[test]
    fn test_pause_keeps_stage_recording() {
        let mut session = recording_session_with_lines(0);
        session.pause();
        assert_eq!(session.stage(), Stage::Recording);
        assert!(!session.is_active());
        session.resume();
        assert!(session.is_active());
    }

    #[test]
    fn test_tick_only_advances_while_active() {
        let mut session = recording_session_with_lines(0);
        session.tick();
        session.pause();
        session.tick();
        assert_eq!(session.elapsed_secs(), 1);
    }

    // ── completion gate ─────────────────────────────────────────────────────

    #[test]
    fn test_complete_rejected_below_three_lines() {
        let mut session = recording_session_with_lines(2);
        let err = session.complete();
        assert!(matches!(err, Err(AppError::GateNotSatisfied(_))));
        assert_eq!(session.stage(), Stage::Recording, "stage must not change");
        assert!(session.is_active());
    }

    #[test]
    fn test_complete_succeeds_at_three_lines() {
        let mut session = recording_session_with_lines(3);
        assert!(session.complete().is_ok());
        assert_eq!(session.stage(), Stage::Complete);
        assert!(!session.is_active());
    }

    // ── transcript growth ───────────────────────────────────────────────────

    #[test]
    fn test_append_follows_strict_script_order() {
        let session = recording_session_with_lines(WORK_STYLE.len());
        for (utterance, line) in session.transcript().iter().zip(WORK_STYLE.lines) {
            assert_eq!(utterance.text, line.text);
            assert_eq!(utterance.speaker, line.speaker);
        }
    }

    #[test]
    fn test_append_stops_at_script_end() {
        let mut session = recording_session_with_lines(WORK_STYLE.len());
        assert!(session.script_exhausted(&WORK_STYLE));
        assert!(!session.append_next(&WORK_STYLE));
        assert_eq!(session.transcript().len(), WORK_STYLE.len());
    }

    // ── reset ───────────────────────────────────────────────────────────────

    #[test]
    fn test_reset_from_any_stage_restores_defaults() {
        let mut mid_recording = recording_session_with_lines(4);
        mid_recording.tick();
        mid_recording.reset();
        assert_eq!(mid_recording.stage(), Stage::Initial);
        assert!(mid_recording.transcript().is_empty());
        assert_eq!(mid_recording.elapsed_secs(), 0);
        assert!(!mid_recording.is_active());

        let mut completed = recording_session_with_lines(3);
        completed.complete().expect("three lines is enough");
        completed.reset();
        assert_eq!(completed.stage(), Stage::Initial);
    }

    #[test]
    fn test_reset_regenerates_session_id() {
        let mut session = recording_session_with_lines(2);
        let old_id = session.id;
        session.reset();
        assert_ne!(session.id, old_id, "a reset session is a new session");
    }

    #[test]
    fn test_summary_counts_exchanges() {
        let session = recording_session_with_lines(6);
        assert_eq!(session.summary().exchanges, 3);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(65), "01:05");
        assert_eq!(format_elapsed(600), "10:00");
    }
}
