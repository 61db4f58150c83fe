use crate::domain::model::{ProjectContent, ProjectSummary, Slug};
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate slug in catalog: '{0}'")]
    DuplicateSlug(Slug),

    #[error("catalog entry '{0}' has an empty title")]
    EmptyTitle(Slug),
}

/// Why a slug could not be resolved to a renderable project.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    /// The slug is not listed in the catalog at all.
    #[error("project is not listed in the catalog")]
    UnknownProject,

    /// The slug is listed, but no detail content has been authored for it.
    #[error("project is listed but has no detail content yet")]
    MissingContent,
}

/// A project summary joined with its detail content, borrowed from the
/// catalog that resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedProject<'a> {
    pub summary: &'a ProjectSummary,
    pub content: &'a ProjectContent,
}

/// The project catalog: an ordered list of summaries plus a content table
/// keyed by slug.
///
/// The two halves are deliberately separate so a project can be announced
/// (listed on the home page) before its write-up exists. [`Catalog::resolve`]
/// distinguishes the two failure modes.
#[derive(Debug, Clone)]
pub struct Catalog {
    summaries: Vec<ProjectSummary>,
    content: IndexMap<Slug, ProjectContent>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate slugs and empty titles.
    pub fn new(
        summaries: Vec<ProjectSummary>,
        content: IndexMap<Slug, ProjectContent>,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(summaries.len());
        for summary in &summaries {
            if summary.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(summary.slug.clone()));
            }
            if !seen.insert(summary.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(summary.slug.clone()));
            }
        }

        Ok(Self { summaries, content })
    }

    /// Looks up a project by slug and joins its summary with its content.
    ///
    /// Fails with [`NotFound::UnknownProject`] when the slug is not listed,
    /// and with [`NotFound::MissingContent`] when it is listed but has no
    /// authored write-up. Pure: no logging, no fallbacks.
    pub fn resolve(&self, slug: &str) -> Result<ResolvedProject<'_>, NotFound> {
        let summary = self
            .summaries
            .iter()
            .find(|s| s.slug.as_str() == slug)
            .ok_or(NotFound::UnknownProject)?;

        let content = self.content.get(slug).ok_or(NotFound::MissingContent)?;

        Ok(ResolvedProject { summary, content })
    }

    /// All listed projects, in authoring order.
    pub fn list_all(&self) -> &[ProjectSummary] {
        &self.summaries
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Listed slugs that have no authored content yet.
    pub fn content_gaps(&self) -> Vec<&Slug> {
        self.summaries
            .iter()
            .filter(|s| !self.content.contains_key(s.slug.as_str()))
            .map(|s| &s.slug)
            .collect()
    }

    /// Content table entries no summary points at. Such write-ups are
    /// unreachable from the home page and never rendered.
    pub fn orphan_content(&self) -> Vec<&Slug> {
        self.content
            .keys()
            .filter(|key| !self.summaries.iter().any(|s| &s.slug == *key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Block, RichText};

    fn summary(slug: &str, title: &str) -> ProjectSummary {
        ProjectSummary {
            title: title.to_string(),
            slug: Slug::parse(slug).unwrap(),
            image: format!("/images/projects/{}.png", slug),
            client: None,
        }
    }

    fn content(heading: &str) -> ProjectContent {
        ProjectContent {
            overview: RichText::of([Block::heading(2, heading), Block::plain("Overview.")]),
            about: RichText::of([Block::plain("About.")]),
            steps: RichText::of([Block::numbered(["First", "Second"])]),
            services: RichText::of([Block::bullets(["Lambda"])]),
            time_and_cost: RichText::of([Block::plain("1 hour")]),
            architecture_image: None,
            final_result_image: None,
        }
    }

    fn two_project_catalog() -> Catalog {
        let summaries = vec![
            summary("with-content", "Project With Content"),
            summary("without-content", "Project Without Content"),
        ];
        let mut table = IndexMap::new();
        table.insert(Slug::parse("with-content").unwrap(), content("Overview"));
        Catalog::new(summaries, table).unwrap()
    }

    #[test]
    fn test_resolve_joins_summary_and_content() {
        let catalog = two_project_catalog();
        let resolved = catalog.resolve("with-content").unwrap();

        assert_eq!(resolved.summary.title, "Project With Content");
        assert_eq!(resolved.content.steps.len(), 1);
    }

    #[test]
    fn test_resolve_distinguishes_failure_modes() {
        let catalog = two_project_catalog();

        assert_eq!(catalog.resolve("nope"), Err(NotFound::UnknownProject));
        assert_eq!(
            catalog.resolve("without-content"),
            Err(NotFound::MissingContent)
        );
    }

    #[test]
    fn test_new_rejects_duplicate_slugs() {
        let summaries = vec![summary("dup", "First"), summary("dup", "Second")];
        let result = Catalog::new(summaries, IndexMap::new());

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateSlug(Slug::parse("dup").unwrap())
        );
    }

    #[test]
    fn test_new_rejects_empty_titles() {
        let summaries = vec![summary("blank", "   ")];
        let result = Catalog::new(summaries, IndexMap::new());

        assert_eq!(
            result.unwrap_err(),
            CatalogError::EmptyTitle(Slug::parse("blank").unwrap())
        );
    }

    #[test]
    fn test_content_gaps_reports_missing_write_ups() {
        let catalog = two_project_catalog();
        let gaps = catalog.content_gaps();

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].as_str(), "without-content");
    }

    #[test]
    fn test_orphan_content_reports_unlisted_entries() {
        let summaries = vec![summary("listed", "Listed")];
        let mut table = IndexMap::new();
        table.insert(Slug::parse("listed").unwrap(), content("Listed"));
        table.insert(Slug::parse("unlisted").unwrap(), content("Unlisted"));
        let catalog = Catalog::new(summaries, table).unwrap();

        let orphans = catalog.orphan_content();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].as_str(), "unlisted");

        assert_eq!(catalog.resolve("unlisted"), Err(NotFound::UnknownProject));
    }

    #[test]
    fn test_list_all_preserves_order_and_len() {
        let catalog = two_project_catalog();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.list_all()[0].slug.as_str(), "with-content");
        assert_eq!(catalog.list_all()[1].slug.as_str(), "without-content");
    }
}
