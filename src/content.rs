use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::appearance::Appearance;

/// Number of projects/certifications previewed on the home page.
pub const RECENT_LIMIT: usize = 3;
pub const CONTENT_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file {0} is not embedded")]
    Missing(&'static str),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
    #[error("{kind} is missing a value for {field}")]
    Blank {
        kind: &'static str,
        field: &'static str,
    },
    #[error("{kind} has an invalid url: {url}")]
    InvalidUrl { kind: &'static str, url: String },
    #[error("Portfolio has no {0}")]
    Empty(&'static str),
}

fn required(kind: &'static str, field: &'static str, value: String) -> Result<String, ContentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContentError::Blank { kind, field });
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn web_url(kind: &'static str, url: String) -> Result<String, ContentError> {
    let url = required(kind, "url", url)?;
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(url)
    } else {
        Err(ContentError::InvalidUrl { kind, url })
    }
}

fn optional_web_url(kind: &'static str, url: Option<String>) -> Result<Option<String>, ContentError> {
    optional(url).map(|url| web_url(kind, url)).transpose()
}

fn records<R, T>(raw: Vec<R>) -> Result<Vec<T>, ContentError>
where
    T: TryFrom<R, Error = ContentError>,
{
    raw.into_iter().map(T::try_from).collect()
}

#[derive(Deserialize, Debug)]
struct RawProfile {
    name: String,
    headline: String,
    phone: Option<String>,
    image_light: String,
    image_dark: String,
    about: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub phone: Option<String>,
    pub image_light: String,
    pub image_dark: String,
    pub about: Vec<String>,
}

impl Profile {
    /// Day picture in light mode, night picture in dark mode.
    pub fn image_for(&self, appearance: Appearance) -> &str {
        match appearance {
            Appearance::Light => &self.image_light,
            Appearance::Dark => &self.image_dark,
        }
    }
}

impl TryFrom<RawProfile> for Profile {
    type Error = ContentError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        const KIND: &str = "Profile";
        let about = raw
            .about
            .into_iter()
            .map(|p| required(KIND, "about", p))
            .collect::<Result<Vec<_>, _>>()?;
        if about.is_empty() {
            return Err(ContentError::Blank {
                kind: KIND,
                field: "about",
            });
        }
        Ok(Self {
            name: required(KIND, "name", raw.name)?,
            headline: required(KIND, "headline", raw.headline)?,
            phone: optional(raw.phone),
            image_light: required(KIND, "image_light", raw.image_light)?,
            image_dark: required(KIND, "image_dark", raw.image_dark)?,
            about,
        })
    }
}

#[derive(Deserialize, Debug)]
struct RawStackCategory {
    title: String,
    items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackCategory {
    pub title: String,
    pub items: Vec<String>,
}

impl StackCategory {
    pub fn items_text(&self) -> String {
        self.items.join(", ")
    }
}

impl TryFrom<RawStackCategory> for StackCategory {
    type Error = ContentError;

    fn try_from(raw: RawStackCategory) -> Result<Self, Self::Error> {
        const KIND: &str = "Stack category";
        let items = raw
            .items
            .into_iter()
            .map(|i| required(KIND, "items", i))
            .collect::<Result<Vec<_>, _>>()?;
        if items.is_empty() {
            return Err(ContentError::Blank {
                kind: KIND,
                field: "items",
            });
        }
        Ok(Self {
            title: required(KIND, "title", raw.title)?,
            items,
        })
    }
}

#[derive(Deserialize, Debug)]
struct RawProject {
    name: String,
    description: String,
    url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: Option<String>,
}

impl TryFrom<RawProject> for Project {
    type Error = ContentError;

    fn try_from(raw: RawProject) -> Result<Self, Self::Error> {
        const KIND: &str = "Project";
        Ok(Self {
            name: required(KIND, "name", raw.name)?,
            description: required(KIND, "description", raw.description)?,
            url: optional_web_url(KIND, raw.url)?,
        })
    }
}

#[derive(Deserialize, Debug)]
struct RawCertification {
    name: String,
    issuer: String,
    date: String,
    url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: Option<String>,
}

impl TryFrom<RawCertification> for Certification {
    type Error = ContentError;

    fn try_from(raw: RawCertification) -> Result<Self, Self::Error> {
        const KIND: &str = "Certification";
        Ok(Self {
            name: required(KIND, "name", raw.name)?,
            issuer: required(KIND, "issuer", raw.issuer)?,
            date: required(KIND, "date", raw.date)?,
            url: optional_web_url(KIND, raw.url)?,
        })
    }
}

#[derive(Deserialize, Debug)]
struct RawExperienceEntry {
    role: String,
    organization: String,
    year: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub year: String,
}

impl TryFrom<RawExperienceEntry> for ExperienceEntry {
    type Error = ContentError;

    fn try_from(raw: RawExperienceEntry) -> Result<Self, Self::Error> {
        const KIND: &str = "Experience entry";
        Ok(Self {
            role: required(KIND, "role", raw.role)?,
            organization: required(KIND, "organization", raw.organization)?,
            year: required(KIND, "year", raw.year)?,
        })
    }
}

#[derive(Deserialize, Debug)]
struct RawEducationEntry {
    degree: String,
    school: String,
    year: String,
    honors: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub honors: Option<String>,
}

impl TryFrom<RawEducationEntry> for EducationEntry {
    type Error = ContentError;

    fn try_from(raw: RawEducationEntry) -> Result<Self, Self::Error> {
        const KIND: &str = "Education entry";
        Ok(Self {
            degree: required(KIND, "degree", raw.degree)?,
            school: required(KIND, "school", raw.school)?,
            year: required(KIND, "year", raw.year)?,
            honors: optional(raw.honors),
        })
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    GitHub,
    LinkedIn,
    Email,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Email => "Email",
        }
    }

    pub fn icon(self) -> ContactIcon {
        match self {
            Self::GitHub => ContactIcon::Devicon("devicon-github-plain"),
            Self::LinkedIn => ContactIcon::Devicon("devicon-linkedin-plain"),
            // devicon has no mail glyph
            Self::Email => ContactIcon::Glyph("📧"),
        }
    }
}

/// Either a devicon font class or a plain text glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Devicon(&'static str),
    Glyph(&'static str),
}

#[derive(Deserialize, Debug)]
struct RawContactLink {
    kind: ContactKind,
    url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub url: String,
}

impl ContactLink {
    /// Mail links stay in the current tab and hand off to the mail client.
    pub fn target(&self) -> &'static str {
        match self.kind {
            ContactKind::Email => "_self",
            _ => "_blank",
        }
    }

    pub fn rel(&self) -> Option<&'static str> {
        match self.kind {
            ContactKind::Email => None,
            _ => Some("noopener noreferrer"),
        }
    }
}

impl TryFrom<RawContactLink> for ContactLink {
    type Error = ContentError;

    fn try_from(raw: RawContactLink) -> Result<Self, Self::Error> {
        const KIND: &str = "Contact link";
        let url = match raw.kind {
            ContactKind::Email => {
                let url = required(KIND, "url", raw.url)?;
                if !url.starts_with("mailto:") || url.len() == "mailto:".len() {
                    return Err(ContentError::InvalidUrl { kind: KIND, url });
                }
                url
            }
            _ => web_url(KIND, raw.url)?,
        };
        Ok(Self {
            kind: raw.kind,
            url,
        })
    }
}

#[derive(Deserialize, Debug)]
struct RawPortfolio {
    profile: RawProfile,
    stack: Vec<RawStackCategory>,
    projects: Vec<RawProject>,
    #[serde(default)]
    certifications: Vec<RawCertification>,
    #[serde(default)]
    experience: Vec<RawExperienceEntry>,
    #[serde(default)]
    education: Vec<RawEducationEntry>,
    contacts: Vec<RawContactLink>,
}

/// Every content list shown on the site, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub stack: Vec<StackCategory>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub contacts: Vec<ContactLink>,
}

impl TryFrom<RawPortfolio> for Portfolio {
    type Error = ContentError;

    fn try_from(raw: RawPortfolio) -> Result<Self, Self::Error> {
        let portfolio = Self {
            profile: Profile::try_from(raw.profile)?,
            stack: records(raw.stack)?,
            projects: records(raw.projects)?,
            certifications: records(raw.certifications)?,
            experience: records(raw.experience)?,
            education: records(raw.education)?,
            contacts: records(raw.contacts)?,
        };
        if portfolio.projects.is_empty() {
            return Err(ContentError::Empty("projects"));
        }
        if portfolio.contacts.is_empty() {
            return Err(ContentError::Empty("contact links"));
        }
        Ok(portfolio)
    }
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw = serde_json::from_str::<RawPortfolio>(json)
            .map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn load() -> Result<Self, ContentError> {
        let file = ContentAssets::get(CONTENT_FILE).ok_or(ContentError::Missing(CONTENT_FILE))?;
        let json =
            std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(json)
    }

    /// Parsed once per process and shared by every render.
    pub fn embedded() -> Result<&'static Portfolio, ContentError> {
        PORTFOLIO.as_ref().map_err(Clone::clone)
    }

    pub fn recent_projects(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(RECENT_LIMIT)]
    }

    pub fn recent_certifications(&self) -> &[Certification] {
        &self.certifications[..self.certifications.len().min(RECENT_LIMIT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "profile": {
                "name": "Ada Example",
                "headline": "Engineer",
                "phone": "",
                "image_light": "/day.jpg",
                "image_dark": "/night.jpg",
                "about": ["First paragraph.", "Second paragraph."]
            },
            "stack": [{ "title": "Backend", "items": ["Rust", "Go"] }],
            "projects": [
                { "name": "One", "description": "First", "url": "https://one.example" },
                { "name": "Two", "description": "Second" },
                { "name": "Three", "description": "Third", "url": "" },
                { "name": "Four", "description": "Fourth" }
            ],
            "certifications": [
                { "name": "Cert", "issuer": "Issuer", "date": "2025" }
            ],
            "experience": [{ "role": "Intern", "organization": "Org", "year": "2025" }],
            "education": [{ "degree": "BSc", "school": "School", "year": "2026", "honors": "Cum Laude" }],
            "contacts": [
                { "kind": "github", "url": "https://github.com/example" },
                { "kind": "email", "url": "mailto:ada@example.com" }
            ]
        })
    }

    fn parse(value: &serde_json::Value) -> Result<Portfolio, ContentError> {
        Portfolio::from_json(&value.to_string())
    }

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::embedded().expect("embedded content should be valid");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.contacts.is_empty());
        assert!(!portfolio.profile.about.is_empty());
    }

    #[test]
    fn test_sample_parses() {
        let portfolio = parse(&sample()).unwrap();
        assert_eq!(portfolio.profile.name, "Ada Example");
        assert_eq!(portfolio.profile.phone, None);
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.projects[0].url.as_deref(), Some("https://one.example"));
        // blank optional urls are treated as absent
        assert_eq!(portfolio.projects[2].url, None);
        assert_eq!(portfolio.stack[0].items_text(), "Rust, Go");
        assert_eq!(portfolio.education[0].honors.as_deref(), Some("Cum Laude"));
    }

    #[test]
    fn test_recent_previews_are_capped() {
        let portfolio = parse(&sample()).unwrap();
        assert_eq!(portfolio.recent_projects().len(), RECENT_LIMIT);
        assert_eq!(portfolio.recent_projects()[0].name, "One");
        assert_eq!(portfolio.recent_certifications().len(), 1);
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let mut value = sample();
        value["projects"][1]["name"] = "   ".into();
        assert_eq!(
            parse(&value),
            Err(ContentError::Blank {
                kind: "Project",
                field: "name"
            })
        );

        let mut value = sample();
        value["education"][0]["school"] = "".into();
        assert_eq!(
            parse(&value),
            Err(ContentError::Blank {
                kind: "Education entry",
                field: "school"
            })
        );
    }

    #[test]
    fn test_invalid_urls_rejected() {
        let mut value = sample();
        value["projects"][0]["url"] = "ftp://one.example".into();
        assert!(matches!(
            parse(&value),
            Err(ContentError::InvalidUrl { kind: "Project", .. })
        ));

        let mut value = sample();
        value["contacts"][1]["url"] = "https://mail.example".into();
        assert!(matches!(
            parse(&value),
            Err(ContentError::InvalidUrl {
                kind: "Contact link",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_sections_rejected() {
        let mut value = sample();
        value["projects"] = serde_json::json!([]);
        assert_eq!(parse(&value), Err(ContentError::Empty("projects")));

        let mut value = sample();
        value["stack"][0]["items"] = serde_json::json!([]);
        assert!(matches!(parse(&value), Err(ContentError::Blank { field: "items", .. })));
    }

    #[test]
    fn test_unknown_contact_kind_is_parse_error() {
        let mut value = sample();
        value["contacts"][0]["kind"] = "myspace".into();
        assert!(matches!(parse(&value), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_contact_link_targets() {
        let portfolio = parse(&sample()).unwrap();
        let github = &portfolio.contacts[0];
        assert_eq!(github.target(), "_blank");
        assert_eq!(github.rel(), Some("noopener noreferrer"));
        let email = &portfolio.contacts[1];
        assert_eq!(email.kind.label(), "Email");
        assert_eq!(email.target(), "_self");
        assert_eq!(email.rel(), None);
    }

    #[test]
    fn test_contact_icons() {
        assert_eq!(
            ContactKind::GitHub.icon(),
            ContactIcon::Devicon("devicon-github-plain")
        );
        assert_eq!(
            ContactKind::LinkedIn.icon(),
            ContactIcon::Devicon("devicon-linkedin-plain")
        );
        assert_eq!(ContactKind::Email.icon(), ContactIcon::Glyph("📧"));
    }

    #[test]
    fn test_embedded_profile_images_ship_in_public() {
        let portfolio = Portfolio::embedded().expect("embedded content should be valid");
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for appearance in [Appearance::Light, Appearance::Dark] {
            let image = portfolio.profile.image_for(appearance);
            let path = public.join(image.trim_start_matches('/'));
            assert!(path.is_file(), "missing asset {}", path.display());
        }
        assert!(public.join("favicon.svg").is_file());
    }

    #[test]
    fn test_profile_image_follows_appearance() {
        let portfolio = parse(&sample()).unwrap();
        assert_eq!(portfolio.profile.image_for(Appearance::Light), "/day.jpg");
        assert_eq!(portfolio.profile.image_for(Appearance::Dark), "/night.jpg");
    }
}
