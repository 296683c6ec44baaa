//! Pre-authored interview scripts.
//!
//! The "AI interview" is a replay of a fixed transcript paced by randomized
//! delays (cosmetic pacing, not scheduling). Two variants exist: the
//! work-style interview launched from the wizard, and the richer profile
//! voice interview launched from the profile page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Interviewer,
    Candidate,
}

#[derive(Debug, Clone, Copy)]
pub struct ScriptLine {
    pub speaker: Speaker,
    pub text: &'static str,
}

/// A fixed interview script plus its pacing window and the canned takeaways
/// shown on the completion screen.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    pub title: &'static str,
    pub lines: &'static [ScriptLine],
    /// Bounds for the re-rolled delay before each appended line.
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub takeaways_heading: &'static str,
    pub takeaways: &'static [&'static str],
}

impl Script {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

const fn ai(text: &'static str) -> ScriptLine {
    ScriptLine {
        speaker: Speaker::Interviewer,
        text,
    }
}

const fn you(text: &'static str) -> ScriptLine {
    ScriptLine {
        speaker: Speaker::Candidate,
        text,
    }
}

pub const WORK_STYLE: Script = Script {
    title: "Work Style & Career Goals",
    lines: &[
        ai("Hello! I'm here to learn about your work style and career goals. Let's start with what motivates you most in your work environment?"),
        you("I'm really motivated by challenging problems and the opportunity to make a meaningful impact. I thrive when I can see how my work contributes to the bigger picture."),
        ai("That's great! How do you prefer to collaborate with your team members? Do you work better independently or in group settings?"),
        you("I enjoy a mix of both. I like having focused time for deep work, but I also value regular collaboration and brainstorming sessions with my team."),
        ai("What are your long-term career aspirations? Where do you see yourself in the next 3-5 years?"),
        you("I'd love to grow into a technical leadership role where I can mentor others while still staying hands-on with interesting technical challenges. Eventually, I'd like to lead a team of engineers working on cutting-edge projects."),
    ],
    min_delay_ms: 3000,
    max_delay_ms: 5000,
    takeaways_heading: "Career Goals Identified",
    takeaways: &[
        "Aspires to technical leadership role with hands-on involvement",
        "Wants to mentor and guide other engineers",
        "Interested in working on cutting-edge, impactful projects",
        "Values meaningful work that contributes to bigger picture",
    ],
};

pub const PROFILE_VOICE: Script = Script {
    title: "Profile Voice Interview",
    lines: &[
        ai("Hello Sarah! I'm excited to learn more about your experience as a Senior Frontend Developer. Can you tell me what draws you to frontend development?"),
        you("I love the intersection of creativity and technical problem-solving. There's something incredibly satisfying about building user interfaces that are both beautiful and performant."),
        ai("That's wonderful! I see you've led teams on high-impact projects. Can you share an example of a challenging project you've worked on recently?"),
        you("Absolutely! I recently led the redesign of our main application's dashboard. We had over 100,000 daily users experiencing slow load times, so I implemented a comprehensive optimization strategy."),
        ai("Impressive! What specific techniques did you use to achieve that 60% performance improvement?"),
        you("We implemented lazy loading for components, optimized our bundle splitting, and introduced efficient caching strategies. I also worked closely with the backend team to optimize our API calls."),
        ai("Excellent! How do you approach mentoring junior developers on your team?"),
        you("I believe in hands-on mentoring. I pair program with them regularly, conduct code reviews focused on learning, and encourage them to take ownership of features while providing guidance."),
    ],
    min_delay_ms: 2500,
    max_delay_ms: 4500,
    takeaways_heading: "Key Strengths Identified",
    takeaways: &[
        "Strong technical leadership with proven team management experience",
        "Exceptional performance optimization skills (60% improvement achieved)",
        "Effective mentoring approach with hands-on guidance methodology",
        "Strategic thinking in both frontend architecture and user experience",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_alternate_speakers() {
        for script in [WORK_STYLE, PROFILE_VOICE] {
            for pair in script.lines.chunks(2) {
                assert_eq!(pair[0].speaker, Speaker::Interviewer);
                if let Some(reply) = pair.get(1) {
                    assert_eq!(reply.speaker, Speaker::Candidate);
                }
            }
        }
    }

    #[test]
    fn test_pacing_windows_are_well_formed() {
        for script in [WORK_STYLE, PROFILE_VOICE] {
            assert!(script.min_delay_ms < script.max_delay_ms);
            assert!(!script.is_empty());
        }
    }
}
