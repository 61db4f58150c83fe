use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for slug length, generous for kebab-case project names.
pub const SLUG_MAX_LEN: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,

    #[error("slug '{slug}' is longer than {max} characters")]
    TooLong { slug: String, max: usize },

    #[error("slug '{0}' must be lowercase kebab-case (a-z, 0-9, single '-')")]
    InvalidFormat(String),
}

/// URL-safe identifier for a project, e.g. `image-emotion-detector`.
///
/// A slug is lowercase kebab-case: ASCII letters and digits separated by
/// single hyphens, never starting or ending with one. Validated once at
/// construction so the rest of the crate can treat it as well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn parse(input: &str) -> Result<Self, SlugError> {
        if input.is_empty() {
            return Err(SlugError::Empty);
        }

        if input.len() > SLUG_MAX_LEN {
            return Err(SlugError::TooLong {
                slug: input.to_string(),
                max: SLUG_MAX_LEN,
            });
        }

        let valid_chars = input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid_chars || input.starts_with('-') || input.ends_with('-') || input.contains("--") {
            return Err(SlugError::InvalidFormat(input.to_string()));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets map lookups accept plain &str keys.
impl std::borrow::Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Card-level facts about one project, shown on the home page grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub title: String,
    pub slug: Slug,
    pub image: String,
    pub client: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
}

impl Inline {
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text(content.into())
    }

    pub fn strong(content: impl Into<String>) -> Self {
        Inline::Strong(content.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(Vec<Inline>),
    Bullets(Vec<String>),
    Numbered(Vec<String>),
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(parts: impl IntoIterator<Item = Inline>) -> Self {
        Block::Paragraph(parts.into_iter().collect())
    }

    /// Paragraph made of a single plain-text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Block::Paragraph(vec![Inline::Text(text.into())])
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::Bullets(items.into_iter().map(Into::into).collect())
    }

    pub fn numbered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::Numbered(items.into_iter().map(Into::into).collect())
    }
}

/// Ordered sequence of content blocks, the unit every detail section is
/// authored in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RichText(pub Vec<Block>);

impl RichText {
    pub fn of(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self(blocks.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Full write-up for one project detail page. The five text sections render
/// in field order; the two images are optional trailing sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContent {
    pub overview: RichText,
    pub about: RichText,
    pub steps: RichText,
    pub services: RichText,
    pub time_and_cost: RichText,
    pub architecture_image: Option<String>,
    pub final_result_image: Option<String>,
}

impl ProjectContent {
    /// Total number of authored blocks across all text sections.
    pub fn block_count(&self) -> usize {
        self.overview.len()
            + self.about.len()
            + self.steps.len()
            + self.services.len()
            + self.time_and_cost.len()
    }
}

/// What to do with a project that is listed but has no authored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingContentPolicy {
    /// Generate a "coming soon" page at the project's route.
    #[default]
    Placeholder,
    /// Generate no page for the project at all.
    Skip,
}

impl MissingContentPolicy {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "placeholder" => Some(MissingContentPolicy::Placeholder),
            "skip" => Some(MissingContentPolicy::Skip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissingContentPolicy::Placeholder => "placeholder",
            MissingContentPolicy::Skip => "skip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub count: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub intro: String,
    pub portrait_image: String,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub years: String,
    pub title: String,
    pub company: String,
    pub mode: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub title: String,
    pub description: String,
}

pub const SKILL_MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    /// Self-assessed proficiency from 0 to [`SKILL_MAX_RATING`].
    pub rating: u8,
}

/// Everything the home page renders besides the project grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeContent {
    pub profile: Profile,
    pub certifications: Vec<Certification>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

/// One page the build has decided to generate. Produced by the extract
/// stage, consumed by the transform stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageJob {
    Home {
        home: HomeContent,
        featured: Vec<ProjectSummary>,
    },
    ProjectDetail {
        summary: ProjectSummary,
        content: ProjectContent,
    },
    ComingSoon {
        summary: ProjectSummary,
    },
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Home,
    Project,
    ComingSoon,
    NotFound,
}

/// A fully rendered HTML document plus the output path it belongs at,
/// relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub route: String,
    pub title: String,
    pub kind: PageKind,
    pub html: String,
}

/// The complete output of the transform stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSite {
    pub pages: Vec<RenderedPage>,
    pub stylesheet: String,
    pub manifest_json: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub path: String,
    pub title: String,
    pub kind: PageKind,
}

/// Machine-readable build summary written next to the generated pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    pub generator: String,
    pub version: String,
    pub built_at: DateTime<Utc>,
    pub base_path: String,
    pub pages: Vec<ManifestEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slugs() {
        assert_eq!(
            Slug::parse("image-emotion-detector").unwrap().as_str(),
            "image-emotion-detector"
        );
        assert!(Slug::parse("az-900").is_ok());
        assert!(Slug::parse("a").is_ok());
    }

    #[test]
    fn test_parse_rejects_empty_slug() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        for input in [
            "Image-Emotion",
            "has space",
            "trailing-",
            "-leading",
            "double--dash",
            "under_score",
        ] {
            assert_eq!(
                Slug::parse(input),
                Err(SlugError::InvalidFormat(input.to_string())),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_overlong_slug() {
        let long = "a".repeat(SLUG_MAX_LEN + 1);
        assert!(matches!(Slug::parse(&long), Err(SlugError::TooLong { .. })));
    }

    #[test]
    fn test_slug_serializes_as_plain_string() {
        let slug = Slug::parse("ai-cloud-tutor").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"ai-cloud-tutor\"");
    }

    #[test]
    fn test_block_builders() {
        let block = Block::paragraph([
            Inline::text("Built with "),
            Inline::strong("AWS Lambda"),
            Inline::text("."),
        ]);

        match block {
            Block::Paragraph(parts) => assert_eq!(parts.len(), 3),
            other => panic!("unexpected block: {:?}", other),
        }

        assert_eq!(
            Block::plain("Simple."),
            Block::Paragraph(vec![Inline::Text("Simple.".to_string())])
        );

        match Block::bullets(["EC2", "ALB"]) {
            Block::Bullets(items) => assert_eq!(items, vec!["EC2", "ALB"]),
            other => panic!("unexpected block: {:?}", other),
        }
    }

    #[test]
    fn test_missing_content_policy_parsing() {
        assert_eq!(
            MissingContentPolicy::parse("placeholder"),
            Some(MissingContentPolicy::Placeholder)
        );
        assert_eq!(
            MissingContentPolicy::parse("skip"),
            Some(MissingContentPolicy::Skip)
        );
        assert_eq!(MissingContentPolicy::parse("explode"), None);
        assert_eq!(
            MissingContentPolicy::default(),
            MissingContentPolicy::Placeholder
        );
    }

    #[test]
    fn test_block_count_sums_all_sections() {
        let content = ProjectContent {
            overview: RichText::of([Block::heading(2, "Overview"), Block::plain("One.")]),
            about: RichText::of([Block::plain("Two.")]),
            steps: RichText::default(),
            services: RichText::of([Block::bullets(["S3"])]),
            time_and_cost: RichText::of([Block::plain("1 hour")]),
            architecture_image: None,
            final_result_image: None,
        };

        assert_eq!(content.block_count(), 5);
    }
}
