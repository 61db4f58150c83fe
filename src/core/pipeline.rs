use crate::core::resolver::{Catalog, NotFound, ResolvedProject};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::data;
use crate::domain::model::{
    HomeContent, ManifestEntry, MissingContentPolicy, PageJob, PageKind, RenderedPage,
    RenderedSite, SiteManifest,
};
use crate::render::pages::{self, RenderContext};
use crate::utils::error::{Result, SiteError};
use chrono::Utc;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// The site build as a three-stage pipeline: enumerate the catalog into page
/// jobs, render every job to HTML, write the pages through the storage port.
///
/// Projects the missing-content policy skips are also left off the featured
/// grid, so the home page never links to a page that was not generated.
pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    catalog: Catalog,
    home: HomeContent,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    /// Pipeline over the shipped catalog and home content.
    pub fn new(storage: S, config: C) -> Self {
        Self::with_content(
            storage,
            config,
            data::builtin_catalog().clone(),
            data::home_content(),
        )
    }

    /// Pipeline over caller-provided content, used by tests and previews.
    pub fn with_content(storage: S, config: C, catalog: Catalog, home: HomeContent) -> Self {
        Self {
            storage,
            config,
            catalog,
            home,
        }
    }

    fn render_job(&self, job: &PageJob, ctx: &RenderContext<'_>) -> RenderedPage {
        match job {
            PageJob::Home { home, featured } => RenderedPage {
                route: pages::HOME_OUTPUT_PATH.to_string(),
                title: ctx.site_title.to_string(),
                kind: PageKind::Home,
                html: pages::home_page(home, featured, ctx),
            },
            PageJob::ProjectDetail { summary, content } => RenderedPage {
                route: pages::project_output_path(&summary.slug),
                title: summary.title.clone(),
                kind: PageKind::Project,
                html: pages::project_page(ResolvedProject { summary, content }, ctx),
            },
            PageJob::ComingSoon { summary } => RenderedPage {
                route: pages::project_output_path(&summary.slug),
                title: summary.title.clone(),
                kind: PageKind::ComingSoon,
                html: pages::coming_soon_page(summary, ctx),
            },
            PageJob::NotFound => RenderedPage {
                route: pages::NOT_FOUND_OUTPUT_PATH.to_string(),
                title: "Page not found".to_string(),
                kind: PageKind::NotFound,
                html: pages::not_found_page(ctx),
            },
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<PageJob>> {
        let summaries = self.catalog.list_all();
        let policy = self.config.missing_content_policy();

        tracing::debug!("Catalog lists {} projects", summaries.len());

        let mut featured = Vec::with_capacity(summaries.len());
        let mut project_jobs = Vec::with_capacity(summaries.len());

        for summary in summaries {
            match self.catalog.resolve(summary.slug.as_str()) {
                Ok(resolved) => {
                    featured.push(summary.clone());
                    project_jobs.push(PageJob::ProjectDetail {
                        summary: resolved.summary.clone(),
                        content: resolved.content.clone(),
                    });
                }
                Err(NotFound::MissingContent) => match policy {
                    MissingContentPolicy::Placeholder => {
                        tracing::warn!(
                            "⚠️ No content for '{}' yet, generating a placeholder page",
                            summary.slug
                        );
                        featured.push(summary.clone());
                        project_jobs.push(PageJob::ComingSoon {
                            summary: summary.clone(),
                        });
                    }
                    MissingContentPolicy::Skip => {
                        tracing::warn!("⚠️ No content for '{}' yet, skipping page", summary.slug);
                    }
                },
                // A slug from list_all failing the summary lookup means the
                // catalog tables disagree with themselves.
                Err(NotFound::UnknownProject) => {
                    return Err(SiteError::ContentError {
                        slug: summary.slug.to_string(),
                        message: "listed slug failed to resolve".to_string(),
                    });
                }
            }
        }

        let mut jobs = Vec::with_capacity(project_jobs.len() + 2);
        jobs.push(PageJob::Home {
            home: self.home.clone(),
            featured,
        });
        jobs.extend(project_jobs);
        jobs.push(PageJob::NotFound);

        Ok(jobs)
    }

    async fn transform(&self, jobs: Vec<PageJob>) -> Result<RenderedSite> {
        let ctx = RenderContext {
            site_title: self.config.site_title(),
            base_path: self.config.base_path(),
        };

        let mut rendered = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let page = self.render_job(job, &ctx);
            tracing::debug!("Rendered {} ({} bytes)", page.route, page.html.len());
            rendered.push(page);
        }

        let manifest = SiteManifest {
            generator: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            built_at: Utc::now(),
            base_path: self.config.base_path().to_string(),
            pages: rendered
                .iter()
                .map(|page| ManifestEntry {
                    path: page.route.clone(),
                    title: page.title.clone(),
                    kind: page.kind,
                })
                .collect(),
        };
        let manifest_json = serde_json::to_string_pretty(&manifest)?;

        Ok(RenderedSite {
            pages: rendered,
            stylesheet: pages::STYLESHEET.to_string(),
            manifest_json,
        })
    }

    async fn load(&self, site: RenderedSite) -> Result<String> {
        for page in &site.pages {
            self.storage
                .write_file(&page.route, page.html.as_bytes())
                .await?;
        }
        self.storage
            .write_file(pages::STYLESHEET_OUTPUT_PATH, site.stylesheet.as_bytes())
            .await?;
        self.storage
            .write_file(pages::MANIFEST_OUTPUT_PATH, site.manifest_json.as_bytes())
            .await?;

        tracing::debug!(
            "Wrote {} pages plus stylesheet and manifest",
            site.pages.len()
        );

        if let Some(archive_name) = self.config.archive_filename() {
            tracing::debug!(
                "Creating site archive with {} entries",
                site.pages.len() + 2
            );

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

                for page in &site.pages {
                    zip.start_file::<_, ()>(page.route.as_str(), FileOptions::default())?;
                    zip.write_all(page.html.as_bytes())?;
                }

                zip.start_file::<_, ()>(pages::STYLESHEET_OUTPUT_PATH, FileOptions::default())?;
                zip.write_all(site.stylesheet.as_bytes())?;

                zip.start_file::<_, ()>(pages::MANIFEST_OUTPUT_PATH, FileOptions::default())?;
                zip.write_all(site.manifest_json.as_bytes())?;

                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            tracing::debug!("Writing archive ({} bytes) to storage", zip_data.len());
            self.storage.write_file(archive_name, &zip_data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
