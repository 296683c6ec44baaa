//! The aggregated onboarding form.
//!
//! Single-owner state: the controller holds the form, screens borrow the
//! slice they edit, and nothing is shared or persisted. The data lives for
//! the session and leaves only as a JSON export of the finished profile.

use serde::{Deserialize, Serialize};

use crate::interview::recorder::AudioClip;
use crate::skills::TagList;
use crate::upload::Attachment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub phone_country: String,
    pub street_address: String,
    pub city: String,
    pub state_province: String,
    pub zip_postal_code: String,
    pub country: String,
    pub links: ProfileLinks,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        PersonalInfo {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            phone_country: "+1".to_string(),
            street_address: String::new(),
            city: String::new(),
            state_province: String::new(),
            zip_postal_code: String::new(),
            country: "United States".to_string(),
            links: ProfileLinks::default(),
        }
    }
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|n| n.chars().next())
            .collect()
    }
}

/// Optional online-presence profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub behance: String,
    pub dribbble: String,
    pub medium: String,
    pub twitter: String,
    pub stack_overflow: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkStyle {
    pub career_goals: String,
    pub work_preferences: Vec<String>,
    pub industries: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingForm {
    #[serde(skip)]
    pub resume: Option<Attachment>,
    pub personal_info: PersonalInfo,
    #[serde(skip)]
    pub profile_photo: Option<Attachment>,
    #[serde(skip)]
    pub voice_recording: Option<AudioClip>,
    pub work_style: WorkStyle,
    pub skills: TagList,
    pub verification_complete: bool,
}

impl OnboardingForm {
    /// Default suggestion chips offered on the skills step.
    pub fn skill_suggestions() -> Vec<String> {
        [
            "JavaScript",
            "Python",
            "Project Management",
            "Communication",
            "Leadership",
            "Data Analysis",
        ]
        .map(String::from)
        .to_vec()
    }

    pub fn new() -> Self {
        OnboardingForm {
            skills: TagList::with_suggestions(Self::skill_suggestions()),
            ..Default::default()
        }
    }
}
