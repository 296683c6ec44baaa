//! Step controller: sequences the six fixed steps, gates forward progress,
//! and owns the aggregate form.
//!
//! Gating is a pure function of the form: a blocked `advance` mutates
//! nothing and surfaces as a disabled control, never as an escalated error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::wizard::form::OnboardingForm;

pub const TOTAL_STEPS: usize = 6;

/// Route id handed to the external router on completion.
pub const COMPLETION_DESTINATION: &str = "dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    ResumeUpload,
    PersonalInfo,
    Experience,
    WorkStyleInterview,
    Skills,
    Verification,
}

impl Step {
    pub const ALL: [Step; TOTAL_STEPS] = [
        Step::ResumeUpload,
        Step::PersonalInfo,
        Step::Experience,
        Step::WorkStyleInterview,
        Step::Skills,
        Step::Verification,
    ];

    /// 1-based position, as shown in the "Step N of 6" header.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::ResumeUpload => "Resume Upload & AI Parsing",
            Step::PersonalInfo => "Personal Information",
            Step::Experience => "Experience Enhancement",
            Step::WorkStyleInterview => "Work Style & Career Goals",
            Step::Skills => "Skills Intelligence",
            Step::Verification => "Identity Verification",
        }
    }

    fn next(self) -> Option<Step> {
        Self::ALL.get(self.number()).copied()
    }

    fn previous(self) -> Option<Step> {
        self.number().checked_sub(2).map(|i| Self::ALL[i])
    }
}

/// Terminal submission payload. The completion is purely local; the
/// destination is an opaque identifier for the external router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub destination: &'static str,
    pub completed_at: DateTime<Utc>,
}

/// Outcome of a forward-navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The current step's gate is unmet; nothing changed.
    Blocked,
    Moved(Step),
    Completed(Completion),
}

#[derive(Debug, Clone)]
pub struct WizardController {
    step: Step,
    pub form: OnboardingForm,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        WizardController {
            step: Step::ResumeUpload,
            form: OnboardingForm::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Whether the given step's precondition is met by the current form.
    pub fn can_proceed(&self, step: Step) -> bool {
        match step {
            Step::ResumeUpload => self.form.resume.is_some(),
            Step::PersonalInfo => {
                let info = &self.form.personal_info;
                !info.first_name.is_empty()
                    && !info.last_name.is_empty()
                    && !info.email.is_empty()
            }
            // Experience review and the AI interview are optional.
            Step::Experience | Step::WorkStyleInterview => true,
            Step::Skills => !self.form.skills.is_empty(),
            Step::Verification => self.form.verification_complete,
        }
    }

    /// Why the current step is blocked, for the disabled-control hint.
    pub fn gate_hint(&self) -> Option<&'static str> {
        if self.can_proceed(self.step) {
            return None;
        }
        Some(match self.step {
            Step::ResumeUpload => "upload a resume to continue",
            Step::PersonalInfo => "first name, last name, and email are required",
            Step::Skills => "add at least one skill to continue",
            Step::Verification => "complete the verification review to finish",
            Step::Experience | Step::WorkStyleInterview => "",
        })
    }

    /// Moves forward one step, or submits on the final step. A no-op while
    /// the current gate is unmet.
    pub fn advance(&mut self) -> Advance {
        if !self.can_proceed(self.step) {
            return Advance::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => {
                let completion = Completion {
                    destination: COMPLETION_DESTINATION,
                    completed_at: Utc::now(),
                };
                info!(destination = completion.destination, "onboarding complete");
                Advance::Completed(completion)
            }
        }
    }

    /// Moves back one step, floored at the first. Always allowed.
    pub fn back(&mut self) -> Step {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::Attachment;
    use bytes::Bytes;

    fn fake_resume() -> Attachment {
        Attachment {
            file_name: "resume.pdf".to_string(),
            size_bytes: 4,
            content: Bytes::from_static(b"fake"),
        }
    }

    fn controller_through_step_two() -> WizardController {
        let mut wizard = WizardController::new();
        wizard.form.resume = Some(fake_resume());
        assert_eq!(wizard.advance(), Advance::Moved(Step::PersonalInfo));
        wizard.form.personal_info.first_name = "Sarah".to_string();
        wizard.form.personal_info.last_name = "Chen".to_string();
        wizard.form.personal_info.email = "sarah@example.com".to_string();
        wizard
    }

    // ── gating ──────────────────────────────────────────────────────────────

    #[test]
    fn test_step_one_gate_flips_on_resume_attachment() {
        let mut wizard = WizardController::new();
        assert!(!wizard.can_proceed(Step::ResumeUpload));
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.step(), Step::ResumeUpload);

        wizard.form.resume = Some(fake_resume());
        assert!(
            wizard.can_proceed(Step::ResumeUpload),
            "gate opens immediately after attachment, independent of other steps"
        );
    }

    #[test]
    fn test_personal_info_requires_all_three_fields() {
        let mut wizard = WizardController::new();
        wizard.form.personal_info.first_name = "Sarah".to_string();
        wizard.form.personal_info.last_name = "Chen".to_string();
        assert!(!wizard.can_proceed(Step::PersonalInfo));
        wizard.form.personal_info.email = "sarah@example.com".to_string();
        assert!(wizard.can_proceed(Step::PersonalInfo));
    }

    #[test]
    fn test_optional_steps_are_always_satisfied() {
        let wizard = WizardController::new();
        assert!(wizard.can_proceed(Step::Experience));
        assert!(wizard.can_proceed(Step::WorkStyleInterview));
    }

    #[test]
    fn test_skills_step_requires_a_skill() {
        let mut wizard = WizardController::new();
        assert!(!wizard.can_proceed(Step::Skills));
        wizard.form.skills.add("Rust");
        assert!(wizard.can_proceed(Step::Skills));
    }

    #[test]
    fn test_gate_hint_present_only_while_blocked() {
        let mut wizard = WizardController::new();
        assert!(wizard.gate_hint().is_some());
        wizard.form.resume = Some(fake_resume());
        assert!(wizard.gate_hint().is_none());
    }

    // ── navigation ──────────────────────────────────────────────────────────

    #[test]
    fn test_back_is_always_allowed_and_floors_at_first() {
        let mut wizard = controller_through_step_two();
        assert_eq!(wizard.back(), Step::ResumeUpload);
        assert_eq!(wizard.back(), Step::ResumeUpload, "floored at step 1");
    }

    #[test]
    fn test_full_run_completes_with_destination() {
        let mut wizard = controller_through_step_two();
        assert_eq!(wizard.advance(), Advance::Moved(Step::Experience));
        assert_eq!(wizard.advance(), Advance::Moved(Step::WorkStyleInterview));
        assert_eq!(wizard.advance(), Advance::Moved(Step::Skills));

        assert_eq!(wizard.advance(), Advance::Blocked, "no skills yet");
        wizard.form.skills.add("Rust");
        assert_eq!(wizard.advance(), Advance::Moved(Step::Verification));

        assert_eq!(wizard.advance(), Advance::Blocked, "not verified yet");
        wizard.form.verification_complete = true;
        match wizard.advance() {
            Advance::Completed(completion) => {
                assert_eq!(completion.destination, COMPLETION_DESTINATION);
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(wizard.step(), Step::Verification, "saturates at the last step");
    }

    #[test]
    fn test_step_numbers_are_one_based() {
        assert_eq!(Step::ResumeUpload.number(), 1);
        assert_eq!(Step::Verification.number(), TOTAL_STEPS);
    }
}
