//! Terminal front-end for the onboarding wizard.
//!
//! One screen per wizard step; the navigation footer drives the controller.
//! The screen is cleared on every step change so each step starts at the top,
//! and a blocked Next surfaces the gate hint instead of advancing.

pub mod interview;
pub mod screens;

use anyhow::Result;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};

use crate::experience::{seed_entries, ExperienceEntry};
use crate::notify::Notice;
use crate::profile::ProfileView;
use crate::state::AppState;
use crate::wizard::{Advance, Step, WizardController, TOTAL_STEPS};

enum Nav {
    Next,
    Previous,
    Quit,
}

pub async fn run(state: AppState) -> Result<()> {
    let term = Term::stdout();
    let mut wizard = WizardController::new();
    let mut experiences: Vec<ExperienceEntry> = seed_entries();

    loop {
        term.clear_screen()?;
        render_header(&wizard);

        match wizard.step() {
            Step::ResumeUpload => screens::resume_upload(&state, &mut wizard.form).await?,
            Step::PersonalInfo => screens::personal_info(&state, &mut wizard.form).await?,
            Step::Experience => screens::experience_review(&mut experiences)?,
            Step::WorkStyleInterview => {
                interview::work_style_step(&state, &mut wizard.form).await?
            }
            Step::Skills => screens::skills(&mut wizard.form)?,
            Step::Verification => screens::verification(&mut wizard.form)?,
        }

        match prompt_navigation(&wizard)? {
            Nav::Next => match wizard.advance() {
                Advance::Blocked => {
                    if let Some(hint) = wizard.gate_hint() {
                        state.notifier.notify(Notice::info("Hold on", hint));
                        screens::pause_for_enter()?;
                    }
                }
                Advance::Moved(_) => {}
                Advance::Completed(_) => {
                    state.notifier.notify(Notice::success(
                        "Onboarding Complete!",
                        "Welcome to Job Twin. Your voice-enhanced profile is ready.",
                    ));
                    term.clear_screen()?;
                    let view = ProfileView::from_form(&wizard.form);
                    screens::profile_page(&state, &wizard.form, &view).await?;
                    return Ok(());
                }
            },
            Nav::Previous => {
                wizard.back();
            }
            Nav::Quit => return Ok(()),
        }
    }
}

fn render_header(wizard: &WizardController) {
    let step = wizard.step();
    let percent = step.number() * 100 / TOTAL_STEPS;
    println!(
        "{}",
        style("Job Twin — Transform Your Resume with Voice").bold()
    );
    println!(
        "{}   {}",
        style(format!("Step {} of {TOTAL_STEPS}", step.number())).dim(),
        style(format!("{percent}% Complete")).dim()
    );
    println!("{}\n", style(step.title()).cyan().bold());
}

fn prompt_navigation(wizard: &WizardController) -> Result<Nav> {
    let next_label = if wizard.step() == Step::Verification {
        "Complete Setup"
    } else {
        "Next"
    };
    let next_item = match wizard.gate_hint() {
        Some(hint) if !hint.is_empty() => format!("{next_label} ({hint})"),
        _ => next_label.to_string(),
    };

    let items = [next_item.as_str(), "Previous", "Quit"];
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Navigation")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => Nav::Next,
        1 => Nav::Previous,
        _ => Nav::Quit,
    })
}
