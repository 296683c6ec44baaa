//! Experience entries reviewed on the wizard's third step.
//!
//! Each entry carries two tag lists (skills and software) whose suggestion
//! sides hold the AI-extracted candidates. Confirming a suggestion promotes
//! it into the user-confirmed list; there is no demotion.

use serde::{Deserialize, Serialize};

use crate::skills::TagList;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub skills: TagList,
    pub software: TagList,
}

impl ExperienceEntry {
    #[allow(clippy::too_many_arguments)]
    fn new(
        title: &str,
        company: &str,
        duration: &str,
        location: &str,
        description: &str,
        skills: &[&str],
        suggested_skills: &[&str],
        software: &[&str],
        suggested_software: &[&str],
    ) -> Self {
        ExperienceEntry {
            title: title.to_string(),
            company: company.to_string(),
            duration: duration.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            skills: TagList::with_items(
                skills.iter().map(|s| s.to_string()),
                suggested_skills.iter().map(|s| s.to_string()),
            ),
            software: TagList::with_items(
                software.iter().map(|s| s.to_string()),
                suggested_software.iter().map(|s| s.to_string()),
            ),
        }
    }
}

/// Positions extracted from the uploaded resume. Static demo data; there is
/// no real parsing behind the wizard.
pub fn seed_entries() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry::new(
            "Senior Software Engineer",
            "AeroSpace Dynamics",
            "2024 - Present",
            "Denver, CO",
            "Leading development of mission-critical flight control software systems for \
             commercial and military aircraft. Architecting real-time embedded systems using \
             C++ and Python for avionics platforms. Implementing safety-critical software \
             following DO-178C aviation standards and conducting comprehensive testing \
             protocols.",
            &[
                "C++",
                "Python",
                "Embedded Systems",
                "Real-time Systems",
                "DO-178C Standards",
                "MATLAB",
            ],
            &[
                "Leadership",
                "Communication",
                "Problem Solving",
                "Project Management",
                "Quality Assurance",
                "Risk Management",
            ],
            &["Git", "Excel", "Slack", "Tableau", "Teams"],
            &[],
        ),
        ExperienceEntry::new(
            "Senior Software Engineer",
            "TechCorp Inc.",
            "2022 - 2024",
            "San Francisco, CA",
            "Developed scalable web applications using modern JavaScript frameworks and cloud \
             technologies. Led a team of 5 engineers in delivering high-quality software \
             solutions. Implemented microservices architecture and improved system performance \
             by 40%.",
            &[
                "JavaScript",
                "React",
                "Node.js",
                "AWS",
                "Docker",
                "Kubernetes",
                "TypeScript",
            ],
            &["Team Leadership", "Agile Methodology", "System Design"],
            &["Git", "Jira", "Slack", "VS Code", "Docker Desktop", "AWS Console"],
            &["Jenkins", "Terraform", "New Relic"],
        ),
        ExperienceEntry::new(
            "Product Manager",
            "StartupX",
            "2020 - 2022",
            "Austin, TX",
            "Managed product roadmap and strategy for B2B SaaS platform. Collaborated with \
             cross-functional teams to define requirements and prioritize features. Increased \
             user engagement by 60% through data-driven product decisions.",
            &[
                "Product Strategy",
                "Data Analysis",
                "User Research",
                "Agile",
                "Scrum",
            ],
            &[
                "Market Research",
                "Competitive Analysis",
                "Stakeholder Management",
            ],
            &["Figma", "Mixpanel", "Amplitude", "Notion", "Slack"],
            &["ProductBoard", "Miro", "Confluence"],
        ),
        ExperienceEntry::new(
            "Software Developer",
            "SecureLife Insurance",
            "2018 - 2020",
            "Chicago, IL",
            "Built and maintained insurance management systems using Java and Spring framework. \
             Developed RESTful APIs and integrated with third-party services. Improved \
             application security and implemented automated testing.",
            &["Java", "Spring Framework", "SQL", "REST APIs", "JUnit"],
            &["Software Architecture", "Database Design", "API Design"],
            &["IntelliJ IDEA", "Maven", "Jenkins", "Oracle Database"],
            &["SonarQube", "Postman", "Swagger"],
        ),
    ]
}
