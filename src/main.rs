use clap::Parser;
use snig_portfolio::config::site::SiteConfig;
use snig_portfolio::data;
use snig_portfolio::domain::model::MissingContentPolicy;
use snig_portfolio::render::pages;
use snig_portfolio::utils::error::ErrorSeverity;
use snig_portfolio::utils::{logger, validation::Validate};
use snig_portfolio::{CliArgs, LocalStorage, SiteEngine, SitePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting portfolio site generator");
    match args.config_source() {
        Some(path) => tracing::info!("📁 Loading configuration from: {}", path),
        None => tracing::info!("📁 No configuration file found, using built-in defaults"),
    }

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SitePipeline::new(storage, config);

    let engine = SiteEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Site build completed successfully!");
            tracing::info!("📁 Site written to: {}", output_path);
            println!("✅ Site build completed successfully!");
            println!("📁 Site written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Site build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &SiteConfig, args: &CliArgs) {
    println!("📋 Configuration Summary:");
    println!("  Site: {}", config.site_title());

    if let Some(author) = config.author() {
        println!("  Author: {}", author);
    }

    let base_path = config.base_path();
    println!(
        "  Base Path: {}",
        if base_path.is_empty() { "(root)" } else { base_path }
    );

    println!("  Output: {}", config.output_path());
    println!(
        "  Missing content: {}",
        config.missing_content_policy().as_str()
    );
    println!(
        "  Archive: {}",
        config.archive_filename().unwrap_or("disabled")
    );

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &SiteConfig) {
    let catalog = data::builtin_catalog();
    let policy = config.missing_content_policy();
    let gaps = catalog.content_gaps();

    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📚 Content Analysis:");
    println!("  Listed projects: {}", catalog.len());
    println!("  Authored write-ups: {}", catalog.len() - gaps.len());
    println!("  Content gaps: {}", gaps.len());
    for slug in &gaps {
        match policy {
            MissingContentPolicy::Placeholder => {
                println!("    - {} → placeholder page", slug);
            }
            MissingContentPolicy::Skip => {
                println!("    - {} → no page", slug);
            }
        }
    }

    println!();
    println!("📄 Pages to generate:");
    println!("  {}", pages::HOME_OUTPUT_PATH);
    for summary in catalog.list_all() {
        let has_content = catalog.resolve(summary.slug.as_str()).is_ok();
        if has_content || policy == MissingContentPolicy::Placeholder {
            println!("  {}", pages::project_output_path(&summary.slug));
        }
    }
    println!("  {}", pages::NOT_FOUND_OUTPUT_PATH);
    println!("  {}", pages::MANIFEST_OUTPUT_PATH);
    println!("  {}", pages::STYLESHEET_OUTPUT_PATH);

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    match config.archive_filename() {
        Some(filename) => println!("  Archive: {}", filename),
        None => println!("  Archive: disabled"),
    }

    println!();
    println!("✅ Dry run analysis complete. Run without --dry-run to build the site.");
}
