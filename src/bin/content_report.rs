use clap::Parser;
use serde::Serialize;
use snig_portfolio::core::resolver::Catalog;
use snig_portfolio::data;

#[derive(Parser)]
#[command(name = "content_report")]
#[command(about = "Inventory and invariant report for the shipped portfolio content")]
struct Args {
    /// Emit the report as JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ProjectReport {
    slug: String,
    title: String,
    has_content: bool,
    blocks: usize,
    architecture_image: bool,
    final_result_image: bool,
}

#[derive(Debug, Serialize)]
struct HomeReport {
    about_paragraphs: usize,
    stats: usize,
    certifications: usize,
    experience_entries: usize,
    education_entries: usize,
    skills: usize,
}

#[derive(Debug, Serialize)]
struct ContentReport {
    listed_projects: usize,
    projects: Vec<ProjectReport>,
    content_gaps: Vec<String>,
    orphan_content: Vec<String>,
    home: HomeReport,
    all_listed_resolve: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build the catalog from the raw tables so a malformed catalog is
    // reported instead of panicking in the LazyLock initializer.
    let catalog = match Catalog::new(data::projects::summaries(), data::projects::content_table()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ Shipped catalog is malformed: {}", e);
            std::process::exit(1);
        }
    };

    let report = build_report(&catalog);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_human_report(&report);
    }

    if !report.all_listed_resolve {
        std::process::exit(2);
    }

    Ok(())
}

fn build_report(catalog: &Catalog) -> ContentReport {
    let mut projects = Vec::with_capacity(catalog.len());
    let mut all_listed_resolve = true;

    for summary in catalog.list_all() {
        match catalog.resolve(summary.slug.as_str()) {
            Ok(resolved) => projects.push(ProjectReport {
                slug: summary.slug.to_string(),
                title: summary.title.clone(),
                has_content: true,
                blocks: resolved.content.block_count(),
                architecture_image: resolved.content.architecture_image.is_some(),
                final_result_image: resolved.content.final_result_image.is_some(),
            }),
            Err(snig_portfolio::NotFound::MissingContent) => projects.push(ProjectReport {
                slug: summary.slug.to_string(),
                title: summary.title.clone(),
                has_content: false,
                blocks: 0,
                architecture_image: false,
                final_result_image: false,
            }),
            Err(snig_portfolio::NotFound::UnknownProject) => {
                all_listed_resolve = false;
            }
        }
    }

    let home = data::home_content();

    ContentReport {
        listed_projects: catalog.len(),
        projects,
        content_gaps: catalog.content_gaps().iter().map(|s| s.to_string()).collect(),
        orphan_content: catalog
            .orphan_content()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        home: HomeReport {
            about_paragraphs: home.profile.about.len(),
            stats: home.profile.stats.len(),
            certifications: home.certifications.len(),
            experience_entries: home.experience.len(),
            education_entries: home.education.len(),
            skills: home.skills.len(),
        },
        all_listed_resolve,
    }
}

fn print_human_report(report: &ContentReport) {
    println!("📚 Portfolio Content Report");
    println!();

    println!("Projects ({} listed):", report.listed_projects);
    for project in &report.projects {
        if project.has_content {
            println!(
                "  ✅ {}: {} ({} blocks, {} images)",
                project.slug,
                project.title,
                project.blocks,
                usize::from(project.architecture_image) + usize::from(project.final_result_image)
            );
        } else {
            println!("  ⚠️ {}: {} (no content yet)", project.slug, project.title);
        }
    }

    println!();
    if report.content_gaps.is_empty() {
        println!("Content gaps: none");
    } else {
        println!("Content gaps: {}", report.content_gaps.join(", "));
    }
    if report.orphan_content.is_empty() {
        println!("Orphan content: none");
    } else {
        println!("Orphan content: {}", report.orphan_content.join(", "));
    }

    println!();
    println!("Home page:");
    println!("  About paragraphs: {}", report.home.about_paragraphs);
    println!("  Stats: {}", report.home.stats);
    println!("  Certifications: {}", report.home.certifications);
    println!("  Experience entries: {}", report.home.experience_entries);
    println!("  Education entries: {}", report.home.education_entries);
    println!("  Skills: {}", report.home.skills);

    println!();
    if report.all_listed_resolve {
        println!("✅ Every listed project resolves");
    } else {
        println!("❌ A listed project failed to resolve, the catalog tables disagree");
    }
}
