//! Step screens. Each screen edits its slice of the form and returns;
//! navigation stays with the run loop.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::experience::ExperienceEntry;
use crate::interview::script::PROFILE_VOICE;
use crate::notify::Notice;
use crate::profile::ProfileView;
use crate::skills::{SortColumn, TagList};
use crate::state::AppState;
use crate::upload::Attachment;
use crate::wizard::OnboardingForm;

pub fn pause_for_enter() -> Result<()> {
    Input::<String>::new()
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Step 1: resume upload
// ────────────────────────────────────────────────────────────────────────────

pub async fn resume_upload(state: &AppState, form: &mut OnboardingForm) -> Result<()> {
    let policy = state.resume_policy();
    println!("Upload your resume for AI-powered analysis and enhancement.");
    println!(
        "{}",
        style(format!(
            "Supported formats: {} — maximum size {}MB",
            policy.allowed_list(),
            policy.max_size_mb
        ))
        .dim()
    );

    if let Some(resume) = &form.resume {
        println!(
            "\n  {} {} ({:.2} MB)",
            style("✓").green(),
            resume.file_name,
            resume.size_mb()
        );
    }

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Resume")
        .items(&["Choose a file", "Done"])
        .default(0)
        .interact()?;
    if choice != 0 {
        return Ok(());
    }

    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Path to your resume")
        .interact_text()?;
    match Attachment::load(&PathBuf::from(path), &policy).await {
        Ok(attachment) => {
            state.notifier.notify(Notice::success(
                "File uploaded successfully",
                format!("{} is ready for processing", attachment.file_name),
            ));
            form.resume = Some(attachment);
        }
        // Rejection leaves the slot untouched; the toast is the only effect.
        Err(err) => state.notifier.notify(err.to_notice()),
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Step 2: personal information
// ────────────────────────────────────────────────────────────────────────────

const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Australia",
    "Germany",
    "France",
    "Other",
];

const PHONE_COUNTRIES: &[&str] = &["+1", "+44", "+49", "+33", "+61"];

pub async fn personal_info(state: &AppState, form: &mut OnboardingForm) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("Complete your profile with detailed information.\n");

    let info = &mut form.personal_info;
    info.first_name = text_field(&theme, "First Name *", &info.first_name)?;
    info.last_name = text_field(&theme, "Last Name *", &info.last_name)?;
    info.email = text_field(&theme, "Email Address *", &info.email)?;

    info.street_address = text_field(&theme, "Street Address", &info.street_address)?;
    info.city = text_field(&theme, "City", &info.city)?;
    info.state_province = text_field(&theme, "State/Province", &info.state_province)?;
    info.zip_postal_code = text_field(&theme, "ZIP/Postal Code", &info.zip_postal_code)?;

    let country_default = COUNTRIES
        .iter()
        .position(|c| *c == info.country)
        .unwrap_or(0);
    info.country = COUNTRIES[Select::with_theme(&theme)
        .with_prompt("Country")
        .items(COUNTRIES)
        .default(country_default)
        .interact()?]
    .to_string();

    let phone_default = PHONE_COUNTRIES
        .iter()
        .position(|c| *c == info.phone_country)
        .unwrap_or(0);
    info.phone_country = PHONE_COUNTRIES[Select::with_theme(&theme)
        .with_prompt("Phone country code")
        .items(PHONE_COUNTRIES)
        .default(phone_default)
        .interact()?]
    .to_string();
    info.phone = text_field(&theme, "Phone", &info.phone)?;

    if Confirm::with_theme(&theme)
        .with_prompt("Add online presence links? (optional)")
        .default(false)
        .interact()?
    {
        let links = &mut info.links;
        links.linkedin = text_field(&theme, "LinkedIn Profile", &links.linkedin)?;
        links.github = text_field(&theme, "GitHub Profile", &links.github)?;
        links.portfolio = text_field(&theme, "Portfolio/Website", &links.portfolio)?;
        links.behance = text_field(&theme, "Behance", &links.behance)?;
        links.dribbble = text_field(&theme, "Dribbble", &links.dribbble)?;
        links.medium = text_field(&theme, "Medium", &links.medium)?;
        links.twitter = text_field(&theme, "Twitter/X", &links.twitter)?;
        links.stack_overflow = text_field(&theme, "Stack Overflow", &links.stack_overflow)?;
    }

    if Confirm::with_theme(&theme)
        .with_prompt("Add a profile photo? (JPG, PNG, or GIF, optional)")
        .default(false)
        .interact()?
    {
        let policy = state.photo_policy();
        let path: String = Input::with_theme(&theme)
            .with_prompt("Path to your photo")
            .interact_text()?;
        match Attachment::load(&PathBuf::from(path), &policy).await {
            Ok(photo) => {
                state.notifier.notify(Notice::success(
                    "Photo updated",
                    format!("{} is set as your profile photo", photo.file_name),
                ));
                form.profile_photo = Some(photo);
            }
            Err(err) => state.notifier.notify(err.to_notice()),
        }
    }

    Ok(())
}

fn text_field(theme: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    let value = Input::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(current.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Step 3: experience review
// ────────────────────────────────────────────────────────────────────────────

pub fn experience_review(entries: &mut [ExperienceEntry]) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("Review the positions extracted from your resume and confirm suggested tags.\n");

    loop {
        let mut items: Vec<String> = entries
            .iter()
            .map(|e| format!("{} — {} ({})", e.title, e.company, e.duration))
            .collect();
        items.push("Done".to_string());

        let choice = Select::with_theme(&theme)
            .with_prompt("Experience")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;
        if choice == entries.len() {
            return Ok(());
        }
        expand_entry(&theme, &mut entries[choice])?;
    }
}

fn expand_entry(theme: &ColorfulTheme, entry: &mut ExperienceEntry) -> Result<()> {
    println!(
        "\n{} at {} — {}, {}",
        style(&entry.title).bold(),
        entry.company,
        entry.duration,
        entry.location
    );
    println!("{}\n", style(&entry.description).dim());

    loop {
        render_tag_columns(entry);
        let choice = Select::with_theme(theme)
            .with_prompt("Skills & Software")
            .items(&[
                "Confirm a suggested skill",
                "Confirm suggested software",
                "Add a skill",
                "Add software",
                "Back",
            ])
            .default(4)
            .interact()?;
        match choice {
            0 => promote_from(theme, &mut entry.skills)?,
            1 => promote_from(theme, &mut entry.software)?,
            2 => add_into(theme, "Start typing to add a skill", &mut entry.skills)?,
            3 => add_into(theme, "Start typing to add software", &mut entry.software)?,
            _ => return Ok(()),
        }
    }
}

fn render_tag_columns(entry: &ExperienceEntry) {
    println!("  Skills:   {}", entry.skills.confirmed().join(", "));
    if !entry.skills.suggestions().is_empty() {
        println!(
            "  {} {}",
            style("AI Suggested Skills:").dim(),
            style(entry.skills.suggestions().join(", ")).dim()
        );
    }
    println!("  Software: {}", entry.software.confirmed().join(", "));
    if !entry.software.suggestions().is_empty() {
        println!(
            "  {} {}",
            style("AI Suggested Software:").dim(),
            style(entry.software.suggestions().join(", ")).dim()
        );
    }
}

fn promote_from(theme: &ColorfulTheme, tags: &mut TagList) -> Result<()> {
    if tags.suggestions().is_empty() {
        println!("{}", style("No suggestions left.").dim());
        return Ok(());
    }
    let suggestions = tags.suggestions().to_vec();
    let choice = Select::with_theme(theme)
        .with_prompt("Confirm suggestion")
        .items(&suggestions)
        .default(0)
        .interact()?;
    tags.promote(&suggestions[choice]);
    Ok(())
}

fn add_into(theme: &ColorfulTheme, prompt: &str, tags: &mut TagList) -> Result<()> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    // Empty and duplicate submissions are silent no-ops.
    tags.add(&value);
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Step 5: skills intelligence
// ────────────────────────────────────────────────────────────────────────────

pub fn skills(form: &mut OnboardingForm) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("Add your key skills to enhance AI matching with relevant opportunities.\n");

    loop {
        if !form.skills.is_empty() {
            println!("  Your skills: {}", form.skills.confirmed().join(", "));
        }
        if !form.skills.suggestions().is_empty() {
            println!(
                "  {} {}",
                style("Suggestions:").dim(),
                style(form.skills.suggestions().join(", ")).dim()
            );
        }

        let choice = Select::with_theme(&theme)
            .with_prompt("Skills")
            .items(&["Add a skill", "Pick a suggestion", "Remove a skill", "Done"])
            .default(0)
            .interact()?;
        match choice {
            0 => add_into(&theme, "Type a skill", &mut form.skills)?,
            1 => promote_from(&theme, &mut form.skills)?,
            2 => {
                if form.skills.is_empty() {
                    continue;
                }
                let confirmed = form.skills.confirmed().to_vec();
                let idx = Select::with_theme(&theme)
                    .with_prompt("Remove which skill?")
                    .items(&confirmed)
                    .default(0)
                    .interact()?;
                form.skills.remove(&confirmed[idx]);
            }
            _ => return Ok(()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Step 6: verification & review
// ────────────────────────────────────────────────────────────────────────────

pub fn verification(form: &mut OnboardingForm) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!(
        "  {}  {} <{}>\n",
        style(form.personal_info.initials()).bold().reverse(),
        form.personal_info.full_name(),
        form.personal_info.email
    );

    println!("{}", style("Profile Completion").bold());
    for item in crate::profile::completion_checklist(form) {
        let mark = if item.done {
            style("✓").green()
        } else {
            style("○").dim()
        };
        println!("  {mark} {}", item.label);
    }

    println!("\n{}", style("Next Steps").bold());
    for step in [
        "AI will process your resume and voice profile",
        "Receive personalized job recommendations",
        "Access enhanced networking tools",
        "Get AI-powered interview preparation",
    ] {
        println!("  • {step}");
    }
    println!();

    if form.verification_complete {
        println!("  {} Verified", style("✓").green());
        return Ok(());
    }
    if Confirm::with_theme(&theme)
        .with_prompt("Complete setup and verify your profile?")
        .default(true)
        .interact()?
    {
        form.verification_complete = true;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Profile page (post-completion)
// ────────────────────────────────────────────────────────────────────────────

pub async fn profile_page(
    state: &AppState,
    form: &OnboardingForm,
    view: &ProfileView,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!(
        "{} <{}>\n",
        style(&view.display_name).bold(),
        view.email
    );
    for item in &view.checklist {
        let mark = if item.done {
            style("✓").green()
        } else {
            style("○").dim()
        };
        println!("  {mark} {}", item.label);
    }

    let mut table = view.skills_table.clone();
    loop {
        println!("\n  {:<32} {:<10} {:>5}  {}", "Name", "Type", "Years", "Last Used");
        for row in table.rows() {
            let last_used = if row.is_current() {
                style(row.last_used.clone()).green().to_string()
            } else {
                row.last_used.clone()
            };
            println!(
                "  {:<32} {:<10} {:>5.1}  {}",
                row.name,
                format!("{:?}", row.kind).to_lowercase(),
                row.years,
                last_used
            );
        }

        let choice = Select::with_theme(&theme)
            .with_prompt("Your profile")
            .items(&[
                "Sort by years",
                "Sort by last used",
                "Start AI voice interview",
                "Export profile as JSON",
                "Exit",
            ])
            .default(4)
            .interact()?;
        match choice {
            0 => table.sort_by(SortColumn::Years),
            1 => table.sort_by(SortColumn::LastUsed),
            2 => {
                super::interview::run_interview(state, PROFILE_VOICE).await?;
            }
            3 => match crate::profile::export_json(form) {
                Ok(json) => println!("\n{json}"),
                Err(err) => state.notifier.notify(err.to_notice()),
            },
            _ => return Ok(()),
        }
    }
}
