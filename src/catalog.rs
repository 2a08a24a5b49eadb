//! Compiled-in project and skill records shown by the detail modals.

use url::Url;

pub const SKILL_FALLBACK: &str = "No additional details available for this skill yet.";

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub challenge: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceHost {
    GitHub,
    GitLab,
    Bitbucket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Source(SourceHost),
    Website,
}

impl LinkKind {
    pub fn classify(href: &str) -> Self {
        let host = Url::parse(href)
            .ok()
            .and_then(|url| url.host_str().map(str::to_ascii_lowercase));

        let Some(host) = host else {
            return Self::Website;
        };

        let is_domain = |domain: &str| host == domain || host.ends_with(&format!(".{domain}"));
        if is_domain("github.com") {
            Self::Source(SourceHost::GitHub)
        } else if is_domain("gitlab.com") {
            Self::Source(SourceHost::GitLab)
        } else if is_domain("bitbucket.org") {
            Self::Source(SourceHost::Bitbucket)
        } else {
            Self::Website
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Source(SourceHost::GitHub) => "View on GitHub",
            Self::Source(SourceHost::GitLab) => "View on GitLab",
            Self::Source(SourceHost::Bitbucket) => "View on Bitbucket",
            Self::Website => "Visit Site",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Source(SourceHost::GitHub) => "fab fa-github",
            Self::Source(SourceHost::GitLab) => "fab fa-gitlab",
            Self::Source(SourceHost::Bitbucket) => "fab fa-bitbucket",
            Self::Website => "fas fa-external-link-alt",
        }
    }

    pub fn is_source(self) -> bool {
        matches!(self, Self::Source(_))
    }
}

static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: "idialysis",
        tag: "Healthcare",
        title: "iDialysis - PD Patient Management System",
        description: "A web platform that lets peritoneal dialysis patients log daily exchanges while clinicians monitor trends and intervene early.",
        features: &[
            "Daily exchange logging with fluid balance tracking",
            "Clinician dashboard with abnormal reading alerts",
            "Appointment and supply reminders",
            "Printable monthly treatment reports",
        ],
        technologies: &["PHP", "MySQL", "JavaScript", "Bootstrap"],
        challenge: "Clinical staff needed a view that surfaced risky trends without drowning them in raw numbers, so readings are aggregated per patient and only outliers are highlighted.",
        link: Some("https://idialysis.netlify.app"),
    },
    ProjectEntry {
        id: "hospital-db",
        tag: "Database",
        title: "Hospital Management Database",
        description: "A normalised relational schema covering patients, wards, staff rosters and billing for a mid-sized hospital.",
        features: &[
            "Third normal form schema with referential integrity",
            "Stored procedures for admissions and discharges",
            "Views for ward occupancy reporting",
        ],
        technologies: &["Oracle SQL", "PL/SQL", "ER Modelling"],
        challenge: "Billing rules differed per ward, which was resolved by moving tariffs into their own table keyed by ward and treatment type.",
        link: None,
    },
    ProjectEntry {
        id: "portfolio",
        tag: "Web",
        title: "Personal Portfolio Website",
        description: "This site: a static portfolio with theme switching, project filtering and animated statistics.",
        features: &[
            "Light and dark themes remembered across visits",
            "Project filtering by category",
            "Image gallery with keyboard navigation",
        ],
        technologies: &["HTML", "CSS", "Rust", "WebAssembly"],
        challenge: "Keeping every interaction snappy on low-end phones meant doing all layout reads once per scroll tick.",
        link: Some("https://github.com/cebause01/portfolio"),
    },
    ProjectEntry {
        id: "inventory-app",
        tag: "Mobile",
        title: "Campus Inventory Tracker",
        description: "A mobile app for lab assistants to check equipment in and out by scanning QR codes.",
        features: &[
            "QR code check-in and check-out",
            "Overdue equipment notifications",
            "Offline queue that syncs when back online",
        ],
        technologies: &["Flutter", "Dart", "Firebase"],
        challenge: "Lab basements had no signal, so every scan is queued locally and reconciled on reconnect.",
        link: Some("https://gitlab.com/cebause01/inventory-tracker"),
    },
];

static SKILLS: &[(&str, &str)] = &[
    (
        "JavaScript",
        "Building interactive front-ends, DOM scripting and small Node.js utilities.",
    ),
    (
        "PHP",
        "Server-rendered web applications with session handling and MySQL integration.",
    ),
    (
        "MySQL",
        "Schema design, indexing and query tuning for transactional web applications.",
    ),
    (
        "Python",
        "Data cleaning scripts, automation and introductory machine learning experiments.",
    ),
    (
        "HTML & CSS",
        "Responsive layouts with Flexbox and Grid, theming through custom properties.",
    ),
    (
        "Git",
        "Feature-branch workflows, rebasing and code review on GitHub.",
    ),
];

pub fn project(id: &str) -> Option<&'static ProjectEntry> {
    PROJECTS.iter().find(|entry| entry.id == id)
}

pub fn projects() -> &'static [ProjectEntry] {
    PROJECTS
}

pub fn skill_description(name: &str) -> Option<&'static str> {
    SKILLS
        .iter()
        .find(|(skill, _)| *skill == name)
        .map(|(_, description)| *description)
}
