use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use snig_portfolio::data;
use snig_portfolio::domain::model::{
    Block, ProjectContent, ProjectSummary, RichText, SiteManifest, Slug,
};
use snig_portfolio::{Catalog, LocalStorage, SiteConfig, SiteEngine, SitePipeline};
use std::path::Path;
use tempfile::TempDir;

const SHIPPED_SLUGS: [&str; 6] = [
    "image-emotion-detector",
    "ai-cloud-tutor",
    "highly-available-architecture",
    "aws-ops-from-slack",
    "serverless-inventory-management",
    "sagemaker-subscriptions",
];

fn config_for(output_path: &str, extra_toml: &str) -> SiteConfig {
    let toml = format!(
        "[site]\ntitle = \"Snigdha | Cloud Engineer\"\n\n[output]\npath = \"{}\"\n\n{}",
        output_path, extra_toml
    );
    let config = SiteConfig::from_toml_str(&toml).unwrap();
    config.validate_config().unwrap();
    config
}

async fn build_site(config: SiteConfig) -> String {
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SitePipeline::new(storage, config);
    let engine = SiteEngine::new_with_monitoring(pipeline, false);

    engine.run().await.unwrap()
}

fn read_to_string(path: &Path) -> String {
    String::from_utf8(std::fs::read(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_end_to_end_build_writes_all_pages() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let result = build_site(config_for(&output_path, "")).await;
    assert_eq!(result, output_path);

    // Fixed outputs.
    assert!(temp_dir.path().join("index.html").exists());
    assert!(temp_dir.path().join("404.html").exists());
    assert!(temp_dir.path().join("manifest.json").exists());
    assert!(temp_dir.path().join("assets/styles.css").exists());

    // One detail page per shipped project, in the Next-style directory layout.
    for slug in SHIPPED_SLUGS {
        let page = temp_dir.path().join(format!("projects/{}/index.html", slug));
        assert!(page.exists(), "missing detail page for '{}'", slug);
    }

    let home = read_to_string(&temp_dir.path().join("index.html"));
    assert!(home.contains("Featured Projects"));
    assert!(home.contains("About Me"));
    assert!(home.contains("Certifications"));
    for slug in SHIPPED_SLUGS {
        assert!(
            home.contains(&format!("href=\"/projects/{}/\"", slug)),
            "home page missing link to '{}'",
            slug
        );
    }

    let detail = read_to_string(
        &temp_dir
            .path()
            .join("projects/image-emotion-detector/index.html"),
    );
    assert!(detail.contains("Image Emotion Detector using Hugging Face + AWS"));
    assert!(detail.contains("Overview of Project"));
    assert!(detail.contains("Architectural diagram"));

    let not_found = read_to_string(&temp_dir.path().join("404.html"));
    assert!(not_found.contains("This page could not be found."));
}

#[tokio::test]
async fn test_build_with_base_path_prefixes_urls() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = config_for(&output_path, "");
    config.site.base_path = Some("/snig-portfolio".to_string());
    build_site(config).await;

    let home = read_to_string(&temp_dir.path().join("index.html"));
    assert!(home.contains("href=\"/snig-portfolio/projects/image-emotion-detector/\""));
    assert!(home.contains("href=\"/snig-portfolio/assets/styles.css\""));

    let detail = read_to_string(&temp_dir.path().join("projects/ai-cloud-tutor/index.html"));
    assert!(detail.contains("src=\"/snig-portfolio/images/projects/ai-cloud-tutor.png\""));
}

#[tokio::test]
async fn test_manifest_lists_every_generated_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    build_site(config_for(&output_path, "")).await;

    let manifest: SiteManifest =
        serde_json::from_str(&read_to_string(&temp_dir.path().join("manifest.json"))).unwrap();

    assert_eq!(manifest.generator, "snig-portfolio");
    assert_eq!(manifest.base_path, "");
    // Home, six projects, 404.
    assert_eq!(manifest.pages.len(), 8);

    for entry in &manifest.pages {
        assert!(
            temp_dir.path().join(&entry.path).exists(),
            "manifest lists '{}' but it was not written",
            entry.path
        );
    }
}

#[tokio::test]
async fn test_build_with_archive_contains_whole_site() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    build_site(config_for(
        &output_path,
        "[output.archive]\nenabled = true\nfilename = \"portfolio.zip\"\n",
    ))
    .await;

    let archive_path = temp_dir.path().join("portfolio.zip");
    assert!(archive_path.exists());

    let zip_data = std::fs::read(&archive_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();

    // 8 pages + stylesheet + manifest.
    assert_eq!(archive.len(), 10);

    let file_names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    assert!(file_names.contains(&"index.html".to_string()));
    assert!(file_names.contains(&"404.html".to_string()));
    assert!(file_names.contains(&"manifest.json".to_string()));
    assert!(file_names.contains(&"assets/styles.css".to_string()));
    for slug in SHIPPED_SLUGS {
        assert!(file_names.contains(&format!("projects/{}/index.html", slug)));
    }

    // Archived home page matches the one on disk.
    let mut home_file = archive.by_name("index.html").unwrap();
    let mut archived_home = String::new();
    std::io::Read::read_to_string(&mut home_file, &mut archived_home).unwrap();

    assert_eq!(
        archived_home,
        read_to_string(&temp_dir.path().join("index.html"))
    );
}

fn gap_catalog() -> Catalog {
    let summaries = vec![
        ProjectSummary {
            title: "Authored Project".to_string(),
            slug: Slug::parse("authored-project").unwrap(),
            image: "/images/projects/authored.png".to_string(),
            client: None,
        },
        ProjectSummary {
            title: "Announced Project".to_string(),
            slug: Slug::parse("announced-project").unwrap(),
            image: "/images/projects/announced.png".to_string(),
            client: None,
        },
    ];

    let mut table = IndexMap::new();
    table.insert(
        Slug::parse("authored-project").unwrap(),
        ProjectContent {
            overview: RichText::of([Block::heading(2, "Overview")]),
            about: RichText::of([Block::plain("About.")]),
            steps: RichText::of([Block::numbered(["One", "Two"])]),
            services: RichText::of([Block::bullets(["Lambda"])]),
            time_and_cost: RichText::of([Block::plain("1 hour")]),
            architecture_image: None,
            final_result_image: None,
        },
    );

    Catalog::new(summaries, table).unwrap()
}

async fn build_gap_site(config: SiteConfig) {
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline =
        SitePipeline::with_content(storage, config, gap_catalog(), data::home_content());
    let engine = SiteEngine::new(pipeline);

    engine.run().await.unwrap();
}

#[tokio::test]
async fn test_placeholder_policy_generates_coming_soon_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    build_gap_site(config_for(
        &output_path,
        "[error_handling]\non_missing_content = \"placeholder\"\n",
    ))
    .await;

    let placeholder = temp_dir.path().join("projects/announced-project/index.html");
    assert!(placeholder.exists());
    let html = read_to_string(&placeholder);
    assert!(html.contains("coming soon"));
    assert!(html.contains("Announced Project"));

    // The announced project still gets a card on the home page.
    let home = read_to_string(&temp_dir.path().join("index.html"));
    assert!(home.contains("href=\"/projects/announced-project/\""));
}

#[tokio::test]
async fn test_skip_policy_omits_unauthored_project() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    build_gap_site(config_for(
        &output_path,
        "[error_handling]\non_missing_content = \"skip\"\n",
    ))
    .await;

    assert!(temp_dir
        .path()
        .join("projects/authored-project/index.html")
        .exists());
    assert!(!temp_dir.path().join("projects/announced-project").exists());

    // No card, no dead link.
    let home = read_to_string(&temp_dir.path().join("index.html"));
    assert!(!home.contains("announced-project"));

    let manifest: SiteManifest =
        serde_json::from_str(&read_to_string(&temp_dir.path().join("manifest.json"))).unwrap();
    assert_eq!(manifest.pages.len(), 3); // home + authored + 404
}
