use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::BuildMonitor;

/// Drives a [`Pipeline`] through its three stages and reports progress.
pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
    monitor: BuildMonitor,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: BuildMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🏗️ Starting site build...");

        // Extract
        tracing::info!("📦 Collecting pages...");
        let jobs = self.pipeline.extract().await?;
        tracing::info!("📦 Collected {} page jobs", jobs.len());
        self.monitor.log_stats("Extract");

        // Transform
        tracing::info!("🖨️ Rendering pages...");
        let site = self.pipeline.transform(jobs).await?;
        tracing::info!("🖨️ Rendered {} pages", site.pages.len());
        self.monitor.log_stats("Transform");

        // Load
        tracing::info!("💾 Writing site...");
        let output_path = self.pipeline.load(site).await?;
        tracing::info!("💾 Site written to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
