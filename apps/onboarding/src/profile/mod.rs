//! Read-only profile presentation assembled after the wizard finishes:
//! the completion checklist and the sortable skills table.

use serde::Serialize;

use crate::errors::AppError;
use crate::skills::SkillsTable;
use crate::wizard::OnboardingForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub label: String,
    pub done: bool,
}

/// The "Profile Completion" checklist shown on the review screen.
pub fn completion_checklist(form: &OnboardingForm) -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            label: "Resume uploaded".to_string(),
            done: form.resume.is_some(),
        },
        ChecklistItem {
            label: "Personal information".to_string(),
            done: !form.personal_info.first_name.is_empty()
                && !form.personal_info.last_name.is_empty()
                && !form.personal_info.email.is_empty(),
        },
        ChecklistItem {
            label: "Voice recording (optional)".to_string(),
            done: form.voice_recording.is_some(),
        },
        ChecklistItem {
            label: "Career goals defined".to_string(),
            done: !form.work_style.career_goals.is_empty(),
        },
        ChecklistItem {
            label: format!("Skills added ({})", form.skills.len()),
            done: !form.skills.is_empty(),
        },
    ]
}

/// The finished profile handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub display_name: String,
    pub email: String,
    pub checklist: Vec<ChecklistItem>,
    pub skills_table: SkillsTable,
}

impl ProfileView {
    pub fn from_form(form: &OnboardingForm) -> Self {
        ProfileView {
            display_name: form.personal_info.full_name(),
            email: form.personal_info.email.clone(),
            checklist: completion_checklist(form),
            skills_table: SkillsTable::seeded(),
        }
    }
}

/// Serializes the form for the presentation layer. Blob payloads are skipped;
/// nothing here is persisted.
pub fn export_json(form: &OnboardingForm) -> Result<String, AppError> {
    serde_json::to_string_pretty(form)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("profile export failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    use crate::upload::Attachment;

    fn filled_form() -> OnboardingForm {
        let mut form = OnboardingForm::new();
        form.resume = Some(Attachment {
            file_name: "resume.pdf".to_string(),
            size_bytes: 4,
            content: Bytes::from_static(b"fake"),
        });
        form.personal_info.first_name = "Sarah".to_string();
        form.personal_info.last_name = "Chen".to_string();
        form.personal_info.email = "sarah@example.com".to_string();
        form.skills.add("Rust");
        form
    }

    #[test]
    fn test_checklist_reflects_form_state() {
        let checklist = completion_checklist(&filled_form());
        let by_label: Vec<(&str, bool)> = checklist
            .iter()
            .map(|i| (i.label.as_str(), i.done))
            .collect();
        assert!(by_label.contains(&("Resume uploaded", true)));
        assert!(by_label.contains(&("Voice recording (optional)", false)));
        assert!(by_label.contains(&("Skills added (1)", true)));
    }

    #[test]
    fn test_profile_view_carries_name_and_table() {
        let view = ProfileView::from_form(&filled_form());
        assert_eq!(view.display_name, "Sarah Chen");
        assert!(!view.skills_table.rows().is_empty());
    }

    #[test]
    fn test_export_omits_blob_payloads() {
        let json = export_json(&filled_form()).expect("form serializes");
        assert!(json.contains("sarah@example.com"));
        assert!(!json.contains("resume.pdf"), "attachments are not exported");
    }
}
