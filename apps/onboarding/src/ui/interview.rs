//! The work-style step: scripted interview dialog, voice sample recording,
//! and the career-goals questions.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use tokio::time::{sleep, Duration};

use crate::interview::recorder::{SystemMicrophone, VoiceRecorder};
use crate::interview::script::{Script, Speaker, WORK_STYLE};
use crate::interview::session::{format_elapsed, InterviewSession};
use crate::interview::SimulatorHandle;
use crate::notify::Notice;
use crate::state::AppState;
use crate::wizard::OnboardingForm;

const WORK_PREFERENCES: &[&str] = &["Remote", "Hybrid", "On-site", "Flexible hours"];
const INDUSTRIES: &[&str] = &[
    "Technology",
    "Aerospace",
    "Finance",
    "Healthcare",
    "Education",
    "Consumer",
];

pub async fn work_style_step(state: &AppState, form: &mut OnboardingForm) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("This interview will focus on your work type and career objectives.");
    println!(
        "{}",
        style("5-7 minute conversation about your work preferences and aspirations").dim()
    );

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Work Style & Career Goals")
            .items(&[
                "Start Interview",
                "Record a voice sample",
                "Describe career goals & preferences",
                "Continue",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => {
                run_interview(state, WORK_STYLE).await?;
            }
            1 => record_voice_sample(state, form).await?,
            2 => career_questions(&theme, form)?,
            _ => return Ok(()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scripted interview dialog
// ────────────────────────────────────────────────────────────────────────────

pub(super) async fn run_interview(
    state: &AppState,
    script: Script,
) -> Result<Option<InterviewSession>> {
    let theme = ColorfulTheme::default();
    let sim = SimulatorHandle::start(script);

    loop {
        let session = sim.snapshot().await;
        render_transcript(&session);

        let toggle = if session.is_active() { "Pause" } else { "Resume" };
        let choice = Select::with_theme(&theme)
            .with_prompt("AI Interview in Progress")
            .items(&["Listen", toggle, "Complete Interview", "Cancel"])
            .default(0)
            .interact()?;
        match choice {
            0 => sleep(Duration::from_secs(4)).await,
            1 => {
                if session.is_active() {
                    sim.pause().await;
                } else {
                    sim.resume().await;
                }
            }
            2 => match sim.complete().await {
                Ok(completed) => {
                    render_brief(sim.script(), &completed);
                    super::screens::pause_for_enter()?;
                    return Ok(Some(completed));
                }
                Err(err) => state.notifier.notify(err.to_notice()),
            },
            // Closing mid-recording discards everything, timers included.
            _ => {
                sim.close().await;
                return Ok(None);
            }
        }
    }
}

fn render_transcript(session: &InterviewSession) {
    println!(
        "\n  {}  {}",
        style("●").red(),
        style(format_elapsed(session.elapsed_secs())).bold()
    );
    for utterance in session.transcript() {
        let (who, line) = match utterance.speaker {
            Speaker::Interviewer => ("AI", style(utterance.text.as_str()).cyan()),
            Speaker::Candidate => ("You", style(utterance.text.as_str())),
        };
        println!("  {} {}", style(format!("{who}:")).bold(), line);
    }
    if session.is_active() {
        println!("  {}", style("Listening...").dim());
    }
}

fn render_brief(script: &Script, session: &InterviewSession) {
    println!("\n{}", style("Interview Complete!").green().bold());
    println!("{}", style(script.takeaways_heading).bold());
    for takeaway in script.takeaways {
        println!("  • {takeaway}");
    }
    let summary = session.summary();
    println!(
        "\n  Duration: {}   Exchanges: {}",
        format_elapsed(summary.duration_secs),
        summary.exchanges
    );
}

// ────────────────────────────────────────────────────────────────────────────
// Voice sample
// ────────────────────────────────────────────────────────────────────────────

async fn record_voice_sample(state: &AppState, form: &mut OnboardingForm) -> Result<()> {
    let mut recorder = VoiceRecorder::new(Box::new(SystemMicrophone::new()));
    if let Err(err) = recorder.start() {
        // Denied access leaves the recording slot unset.
        state.notifier.notify(err.to_notice());
        return Ok(());
    }
    state.notifier.notify(Notice::info(
        "Recording started",
        "Speak clearly into your microphone",
    ));

    Input::<String>::new()
        .with_prompt("Press Enter to stop recording")
        .allow_empty(true)
        .interact_text()?;

    if let Some(clip) = recorder.stop() {
        state.notifier.notify(Notice::success(
            "Recording completed",
            "Your voice sample has been saved",
        ));
        form.voice_recording = Some(clip);
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Career goals & preferences
// ────────────────────────────────────────────────────────────────────────────

fn career_questions(theme: &ColorfulTheme, form: &mut OnboardingForm) -> Result<()> {
    form.work_style.career_goals = Input::with_theme(theme)
        .with_prompt("What are your long-term career goals?")
        .with_initial_text(form.work_style.career_goals.clone())
        .allow_empty(true)
        .interact_text()?;

    let picked = MultiSelect::with_theme(theme)
        .with_prompt("Work preferences (space to toggle)")
        .items(WORK_PREFERENCES)
        .interact()?;
    form.work_style.work_preferences = picked
        .into_iter()
        .map(|i| WORK_PREFERENCES[i].to_string())
        .collect();

    let picked = MultiSelect::with_theme(theme)
        .with_prompt("Industries of interest (space to toggle)")
        .items(INDUSTRIES)
        .interact()?;
    form.work_style.industries = picked
        .into_iter()
        .map(|i| INDUSTRIES[i].to_string())
        .collect();
    Ok(())
}
