// Onboarding wizard: the aggregated form and the step controller that
// sequences the six screens and gates forward navigation.

pub mod controller;
pub mod form;

pub use controller::{Advance, Completion, Step, WizardController, TOTAL_STEPS};
pub use form::{OnboardingForm, PersonalInfo, ProfileLinks, WorkStyle};
