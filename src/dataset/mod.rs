//! CV dataset
//!
//! The dataset is immutable structured content: about text, basic info,
//! skill ratings, work history, education, help text, banner and contact
//! targets. [`render`] turns each section into plain multi-line text.
//!
//! A built-in CV ships with the binary. A replacement can be loaded from a
//! JSON or TOML file; the file path may contain a `{lang}` placeholder that
//! is filled with the preferred language code.

pub mod render;

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder replaced with the language code in dataset paths
pub const LANGUAGE_PLACEHOLDER: &str = "{lang}";

static BUILTIN: Lazy<CvDataset> = Lazy::new(CvDataset::sample);

/// A `label: value` pair from the basic information section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub label: String,
    pub value: String,
}

/// A rated skill; `level` is a percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// One job in the work history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// One education entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub period: String,
    pub title: String,
    pub degree: String,
    pub school: String,
    pub description: String,
}

/// External targets used by `contact`, `open` and `download`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Relative path of the downloadable CV document
    pub cv_path: String,
}

/// The complete CV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvDataset {
    pub about: String,
    pub basic: Vec<BasicInfo>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub contact: Contact,
    pub help: String,
    pub ascii: String,
}

impl CvDataset {
    /// Shared instance of the built-in CV
    pub fn builtin() -> &'static CvDataset {
        &BUILTIN
    }

    /// Load a dataset from a JSON or TOML file (chosen by extension)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::DatasetLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };
        let dataset: CvDataset = parsed.map_err(|reason| Error::DatasetLoadFailed {
            path: path.to_path_buf(),
            reason,
        })?;

        if let Some(skill) = dataset.skills.iter().find(|s| s.level > 100) {
            return Err(Error::DatasetLoadFailed {
                path: path.to_path_buf(),
                reason: format!("skill '{}' rated {} (max 100)", skill.name, skill.level),
            });
        }

        info!(
            "Loaded CV dataset from {} ({} jobs, {} skills)",
            path.display(),
            dataset.experience.len(),
            dataset.skills.len()
        );
        Ok(dataset)
    }

    /// Load the dataset for a language, falling back to the built-in CV
    /// when no path is configured or the file cannot be read.
    pub fn load_for_language(template: Option<&Path>, language: &str) -> Self {
        let Some(template) = template else {
            return Self::builtin().clone();
        };
        let path = resolve_dataset_path(template, language);
        match Self::load_from_file(&path) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!("{}. Using the built-in CV", e);
                Self::builtin().clone()
            }
        }
    }

    /// The CV this terminal was written for
    pub fn sample() -> Self {
        fn info(label: &str, value: &str) -> BasicInfo {
            BasicInfo {
                label: label.to_string(),
                value: value.to_string(),
            }
        }
        fn skill(name: &str, level: u8) -> Skill {
            Skill {
                name: name.to_string(),
                level,
            }
        }
        fn job(period: &str, company: &str, role: &str, bullets: &[&str]) -> Experience {
            Experience {
                period: period.to_string(),
                company: company.to_string(),
                role: role.to_string(),
                bullets: bullets.iter().map(|b| b.to_string()).collect(),
            }
        }

        Self {
            about: "Hello! I am Claudiu Morogan. SQL Developer, Web Developer and Software Engineer.\n\n\
                    I am a programmer passionate about creating new things and learning new technologies. \
                    Team player, collaborative and curious."
                .to_string(),
            basic: vec![
                info("Age", "36"),
                info("Email", "contact@claudiu-morogan.dev"),
                info("Languages", "Romanian (native), English (Advanced)"),
            ],
            skills: vec![
                skill("PL/SQL", 80),
                skill("MySQL", 75),
                skill("PHP", 60),
                skill("HTML", 80),
                skill("CSS / Bootstrap", 75),
                skill("Python", 30),
            ],
            experience: vec![
                job(
                    "Aug 2023 - Present",
                    "Global Business Associates",
                    "PHP & PL/SQL Developer",
                    &[
                        "PL/SQL development per requirements",
                        "Oracle database maintenance & development",
                        "PHP application development & maintenance",
                    ],
                ),
                job(
                    "Nov 2022 - Jul 2023",
                    "Wolters Kluwer",
                    "Senior Engineer / PHP Developer",
                    &[
                        "LexForce platform PHP feature development",
                        "Database schema design & optimization",
                        "Light Linux server configuration",
                        "Docker environment setup",
                        "Git workflow optimization",
                    ],
                ),
                job(
                    "Mar 2020 - Nov 2022",
                    "Oracle",
                    "APEX PL/SQL Developer",
                    &[
                        "Design & build PL/SQL packages / APEX UI",
                        "Custom SQL queries & functions",
                        "Database design per app needs",
                    ],
                ),
                job(
                    "Oct 2017 - Mar 2020",
                    "Orange Romania",
                    "Reporting Specialist Developer",
                    &[
                        "PL/SQL development",
                        "Oracle & MySQL maintenance",
                        "PHP (CodeIgniter,Yii2) development",
                        "Automation with Talend OpenStudio",
                    ],
                ),
                job(
                    "Nov 2016 - Mar 2020",
                    "Orange Services Romania",
                    "Software Application Developer Engineer",
                    &["PL/SQL & Oracle APEX development", "Application maintenance"],
                ),
                job(
                    "Nov 2014 - Nov 2016",
                    "NSRA",
                    "Analyst Programmer",
                    &[
                        "DB maintenance (MySQL, Oracle11G, MSSQL)",
                        "Internal PHP apps (CodeIgniter, Bootstrap, jQuery)",
                        "Legacy FoxPro & Delphi maintenance",
                        "Windows server configuration",
                        "Help-desk",
                    ],
                ),
                job(
                    "Jul 2014 - Nov 2014",
                    "Smart Vision Solutions",
                    "PHP BackEnd Developer",
                    &[
                        "CodeIgniter & pure PHP",
                        "jQuery, Maps API, vanilla JS",
                        "MySQL",
                        "SVN versioning",
                        "xDebug/Selenium/manual testing",
                    ],
                ),
                job(
                    "Nov 2013 - Jul 2014",
                    "Websem Publicity",
                    "PHP Developer",
                    &[
                        "Wordpress & OpenCart customization",
                        "Custom JS/jQuery scripts",
                        "MySQL",
                        "Deploy to production",
                    ],
                ),
                job(
                    "Mar 2013 - Sep 2013",
                    "CLARISOFT TECHNOLOGIES ROM SRL",
                    "Software Application Developer Engineer",
                    &[
                        "Simple PHP, jQuery, CSS",
                        "SVN code review process",
                        "xDebug testing",
                        "Client spec implementation",
                    ],
                ),
            ],
            education: vec![
                Education {
                    period: "2011 - 2013".to_string(),
                    title: "Master's Degree".to_string(),
                    degree: "Master of Information Technology".to_string(),
                    school: "Romanian-American University of Bucharest".to_string(),
                    description: "Advanced programming focus; extensive self-study; strong software \
                                  development & frameworks foundation."
                        .to_string(),
                },
                Education {
                    period: "2008 - 2011".to_string(),
                    title: "Bachelor's Degree".to_string(),
                    degree: "Bachelor of Computer Science".to_string(),
                    school: "Romanian-American University of Bucharest".to_string(),
                    description: "Core computing fundamentals, algorithms, data structures, DB \
                                  management, hands-on projects."
                        .to_string(),
                },
            ],
            contact: Contact {
                email: "contact@claudiu-morogan.dev".to_string(),
                linkedin: "https://www.linkedin.com/in/morogan-claudiu/".to_string(),
                github: "https://github.com/claudiu-morogan".to_string(),
                cv_path: "CV-Claudiu-Morogan.pdf".to_string(),
            },
            help: HELP_TEXT.to_string(),
            ascii: ASCII_BANNER.join("\n"),
        }
    }
}

/// Fill the `{lang}` placeholder of a dataset path
pub fn resolve_dataset_path(template: &Path, language: &str) -> PathBuf {
    let raw = template.to_string_lossy();
    if raw.contains(LANGUAGE_PLACEHOLDER) {
        PathBuf::from(raw.replace(LANGUAGE_PLACEHOLDER, language))
    } else {
        template.to_path_buf()
    }
}

const HELP_TEXT: &str = "Available commands:
  help                Show this help
  about               About me
  basic               Basic information
  skills              Professional skills
  experience          Work experience summary
  education           Education history
  contact             Contact details
  open linkedin       Open Linkedin profile
  open github         Open GitHub profile
  download cv         Download PDF CV
  clear               Clear the terminal
  theme               Toggle light/dark
  goto <section>      Scroll to section (about|skills|experience|education)
  search <keyword>    Search in experience entries
  settings            Show or change settings (settings autoclear <on|off>)
  autoclear [on|off]  Toggle clearing the screen before each command
  ascii               Show ASCII header
";

const ASCII_BANNER: &[&str] = &[
    r"   ____ _                _ _ _          __  __                                   ",
    r"  / ___| |__   __ _  ___(_) | | ___ _ _|  \ /  | ___ _ __ ___   ___  _ __   __ _  ",
    r" | |   | '_ \ / _` |/ __| | | |/ _ (_) | |\/| |/ _ \ '_ ` _ \ / _ \| '_ \ / _` | ",
    r" | |___| | | | (_| | (__| | | |  __/_| | |  | |  __/ | | | | | (_) | | | | (_| | ",
    r"  \____|_| |_|\__,_|\___|_|_|_|\___(_)_|_|  |_|\___|_| |_| |_|\___/|_| |_|\__, | ",
    r"                                                                        |___/      ",
];
