//! The shipped project catalog: six AWS portfolio projects with their
//! card summaries and full detail write-ups.

use crate::core::resolver::Catalog;
use crate::domain::model::{Block, Inline, ProjectContent, ProjectSummary, RichText, Slug};
use indexmap::IndexMap;
use std::sync::LazyLock;

fn slug(value: &str) -> Slug {
    Slug::parse(value).expect("shipped slug is valid")
}

/// The six listed projects, in the order the home page shows them.
pub fn summaries() -> Vec<ProjectSummary> {
    vec![
        ProjectSummary {
            title: "Image Emotion Detector using Hugging Face + AWS".to_string(),
            slug: slug("image-emotion-detector"),
            image: "/images/projects/image-emotion.png".to_string(),
            client: None,
        },
        ProjectSummary {
            title: "AI-Powered Cloud Learning Assistant (Gemini API)".to_string(),
            slug: slug("ai-cloud-tutor"),
            image: "/images/projects/ai-cloud-tutor.png".to_string(),
            client: None,
        },
        ProjectSummary {
            title: "Highly Available Architecture on AWS (Reliability Pillar)".to_string(),
            slug: slug("highly-available-architecture"),
            image: "/images/projects/ha-architecture.png".to_string(),
            client: None,
        },
        ProjectSummary {
            title: "Real-Time AWS Operations from Slack (Operational Excellence)".to_string(),
            slug: slug("aws-ops-from-slack"),
            image: "/images/projects/slack-ops.gif".to_string(),
            client: None,
        },
        ProjectSummary {
            title: "Serverless Inventory Management on AWS (Performance Efficiency)".to_string(),
            slug: slug("serverless-inventory-management"),
            image: "/images/projects/serverless-inventory.png".to_string(),
            client: None,
        },
        ProjectSummary {
            title: "Predicting Customer Subscriptions with Amazon SageMaker".to_string(),
            slug: slug("sagemaker-subscriptions"),
            image: "/images/projects/sagemaker-subscriptions.png".to_string(),
            client: None,
        },
    ]
}

fn image_emotion_detector() -> ProjectContent {
    ProjectContent {
        overview: RichText::of([
            Block::heading(2, "Overview of Project ☁️"),
            Block::heading(3, "Scenario"),
            Block::paragraph([
                Inline::text("This project is built for a fictional AI-driven SaaS startup called "),
                Inline::strong("Cloudhour"),
                Inline::text(". They want to understand how users feel from uploaded images using a real-time AI workflow."),
            ]),
            Block::paragraph([
                Inline::text("The requirement is a "),
                Inline::strong("serverless, real-time application"),
                Inline::text(" that sends an image to a pre-trained ML model and returns the detected emotion instantly."),
            ]),
            Block::heading(3, "Solution"),
            Block::paragraph([
                Inline::text("A fully serverless AI workflow using "),
                Inline::strong("Hugging Face Inference API"),
                Inline::text(", "),
                Inline::strong("AWS Lambda"),
                Inline::text(", "),
                Inline::strong("API Gateway"),
                Inline::text(" and "),
                Inline::strong("S3"),
                Inline::text(" for UI hosting."),
            ]),
        ]),
        about: RichText::of([
            Block::heading(2, "About this project"),
            Block::plain(
                "This project demonstrates how to combine AI API inference with AWS serverless for real-time computer-vision tasks.",
            ),
            Block::plain("The app workflow includes:"),
            Block::bullets([
                "Frontend hosted on S3",
                "Lambda backend calling Hugging Face",
                "REST API via API Gateway",
                "Monitoring via CloudWatch",
            ]),
        ]),
        steps: RichText::of([
            Block::heading(2, "Steps I followed 👩‍💻"),
            Block::numbered([
                "Created Hugging Face API token",
                "Built Lambda to call HF emotion model",
                "Created API Gateway endpoint",
                "Hosted UI in S3",
                "Tested end-to-end",
            ]),
        ]),
        services: RichText::of([
            Block::heading(2, "Services used 🛠"),
            Block::bullets([
                "Hugging Face API",
                "AWS Lambda",
                "API Gateway",
                "Amazon S3",
                "CloudWatch",
            ]),
        ]),
        time_and_cost: RichText::of([
            Block::heading(2, "Estimated time & cost ⚙️"),
            Block::plain("2–3 hours • Free tier"),
        ]),
        architecture_image: Some("/images/projects/image-emotion-architecture.png".to_string()),
        final_result_image: Some("/images/projects/image-emotion.png".to_string()),
    }
}

fn ai_cloud_tutor() -> ProjectContent {
    ProjectContent {
        overview: RichText::of([
            Block::heading(2, "Overview of Project ☁️"),
            Block::heading(3, "Scenario"),
            Block::plain(
                "CloudQuery wants an AI-powered tutor for AWS learners using Gemini + AWS serverless.",
            ),
            Block::heading(3, "Solution"),
            Block::paragraph([
                Inline::text("Built a serverless chatbot using "),
                Inline::strong("Gemini API"),
                Inline::text(", "),
                Inline::strong("Lambda"),
                Inline::text(", "),
                Inline::strong("API Gateway"),
                Inline::text(", "),
                Inline::strong("DynamoDB"),
                Inline::text(" and "),
                Inline::strong("AWS Amplify"),
                Inline::text("."),
            ]),
        ]),
        about: RichText::of([
            Block::heading(2, "About this project"),
            Block::plain(
                "This AI assistant responds to AWS questions, generates quizzes and keeps conversation history.",
            ),
            Block::bullets([
                "Gemini API for reasoning",
                "Lambda for backend logic",
                "DynamoDB for logs",
                "Secrets Manager for API keys",
            ]),
        ]),
        steps: RichText::of([
            Block::heading(2, "Steps I followed 👩‍💻"),
            Block::numbered([
                "Stored API key in Secrets Manager",
                "Created DynamoDB table",
                "Built Lambda to call Gemini",
                "Configured API Gateway",
                "Deployed UI using Amplify",
            ]),
        ]),
        services: RichText::of([
            Block::heading(2, "Services used 🛠"),
            Block::bullets([
                "API Gateway",
                "AWS Lambda",
                "DynamoDB",
                "Secrets Manager",
                "Amplify",
            ]),
        ]),
        time_and_cost: RichText::of([
            Block::heading(2, "Estimated time & cost ⚙️"),
            Block::plain("2–3 hours • ~$1"),
        ]),
        architecture_image: Some("/images/projects/ai-cloud-tutor-architecture.png".to_string()),
        final_result_image: Some("/images/projects/ai-cloud-tutor.png".to_string()),
    }
}

fn highly_available_architecture() -> ProjectContent {
    ProjectContent {
        overview: RichText::of([
            Block::heading(2, "Overview of Project ☁️"),
            Block::heading(3, "Scenario"),
            Block::plain("Migrating a medical app into a fault-tolerant multi-AZ architecture."),
        ]),
        about: RichText::of([
            Block::heading(2, "What this project covers"),
            Block::bullets([
                "EC2 Auto Scaling",
                "ALB health checks",
                "Multi-AZ RDS",
                "Route 53 failover",
            ]),
        ]),
        steps: RichText::of([
            Block::heading(2, "Steps I followed 👩‍💻"),
            Block::numbered([
                "Launch Template",
                "Auto Scaling Group",
                "ALB setup",
                "RDS Multi-AZ",
                "Route 53 failover",
            ]),
        ]),
        services: RichText::of([
            Block::heading(2, "Services used 🛠"),
            Block::bullets(["EC2", "ALB", "RDS Multi-AZ", "Route 53", "EFS"]),
        ]),
        time_and_cost: RichText::of([
            Block::heading(2, "Estimated time & cost ⚙️"),
            Block::plain("3–4 hours • ~$3"),
        ]),
        architecture_image: Some("/images/projects/ha-architecture-diagram.png".to_string()),
        final_result_image: Some("/images/projects/ha-architecture.png".to_string()),
    }
}

fn aws_ops_from_slack() -> ProjectContent {
    ProjectContent {
        overview: RichText::of([
            Block::heading(2, "Overview of Project ☁️"),
            Block::plain("ChatOps pipeline integrating AWS → Slack for ops automation."),
        ]),
        about: RichText::of([
            Block::heading(2, "What this project covers"),
            Block::bullets([
                "AWS Chatbot",
                "CloudWatch Alarms",
                "EventBridge routing",
                "Lambda remediation",
                "IAM access control",
            ]),
        ]),
        steps: RichText::of([
            Block::heading(2, "Steps I followed 👩‍💻"),
            Block::numbered([
                "Connected Slack workspace",
                "Created Lambda/SSM actions",
                "Configured CloudWatch alarms",
                "Routed alarms to Slack",
                "IAM role configuration",
            ]),
        ]),
        services: RichText::of([
            Block::heading(2, "Services used 🛠"),
            Block::bullets(["AWS Chatbot", "CloudWatch", "EventBridge", "Lambda", "IAM"]),
        ]),
        time_and_cost: RichText::of([
            Block::heading(2, "Estimated time & cost ⚙️"),
            Block::plain("3–4 hours • Free tier"),
        ]),
        architecture_image: Some("/images/projects/slack-ops-architecture.png".to_string()),
        final_result_image: Some("/images/projects/slack-ops.gif".to_string()),
    }
}

fn serverless_inventory_management() -> ProjectContent {
    ProjectContent {
        overview: RichText::of([
            Block::heading(2, "Overview of Project ☁️"),
            Block::plain(
                "Serverless inventory backend using API Gateway + Lambda + DynamoDB + Amplify.",
            ),
        ]),
        about: RichText::of([
            Block::heading(2, "What this project covers"),
            Block::bullets([
                "REST API using API Gateway",
                "Lambda CRUD backend",
                "DynamoDB storage",
                "Amplify frontend",
            ]),
        ]),
        steps: RichText::of([
            Block::heading(2, "Steps I followed 👩‍💻"),
            Block::numbered([
                "React UI hosted on Amplify",
                "Designed API Gateway routes",
                "Lambda CRUD operations",
                "DynamoDB table modeling",
                "CloudWatch monitoring",
            ]),
        ]),
        services: RichText::of([
            Block::heading(2, "Services used 🛠"),
            Block::bullets(["DynamoDB", "Lambda", "API Gateway", "Amplify", "IAM"]),
        ]),
        time_and_cost: RichText::of([
            Block::heading(2, "Estimated time & cost ⚙️"),
            Block::plain("3–4 hours • Free tier"),
        ]),
        architecture_image: Some(
            "/images/projects/serverless-inventory-architecture.png".to_string(),
        ),
        final_result_image: Some("/images/projects/serverless-inventory.png".to_string()),
    }
}

fn sagemaker_subscriptions() -> ProjectContent {
    ProjectContent {
        overview: RichText::of([
            Block::heading(2, "Overview of Project ☁️"),
            Block::heading(3, "Scenario"),
            Block::plain("Build + train + deploy a subscription prediction model using SageMaker."),
        ]),
        about: RichText::of([
            Block::heading(2, "What this project covers"),
            Block::bullets([
                "S3 dataset ingestion",
                "SageMaker training",
                "XGBoost binary classification",
                "Real-time endpoint deployment",
            ]),
        ]),
        steps: RichText::of([
            Block::heading(2, "Steps I followed 👩‍💻"),
            Block::numbered([
                "Configured SageMaker + IAM roles",
                "Uploaded dataset to S3",
                "Prepared data in Notebook",
                "Trained XGBoost model",
                "Deployed endpoint",
                "Tested predictions",
                "Cleaned up resources",
            ]),
        ]),
        services: RichText::of([
            Block::heading(2, "Services used 🛠"),
            Block::bullets(["SageMaker", "S3", "IAM", "CloudWatch"]),
        ]),
        time_and_cost: RichText::of([
            Block::heading(2, "Estimated time & cost ⚙️"),
            Block::plain("1.5–2.5 hours • ~$1–2"),
        ]),
        architecture_image: Some(
            "/images/projects/sagemaker-subscriptions-architecture.png".to_string(),
        ),
        final_result_image: Some("/images/projects/sagemaker-subscriptions.png".to_string()),
    }
}

/// Detail content keyed by slug, in the same order as [`summaries`].
pub fn content_table() -> IndexMap<Slug, ProjectContent> {
    let mut table = IndexMap::new();
    table.insert(slug("image-emotion-detector"), image_emotion_detector());
    table.insert(slug("ai-cloud-tutor"), ai_cloud_tutor());
    table.insert(
        slug("highly-available-architecture"),
        highly_available_architecture(),
    );
    table.insert(slug("aws-ops-from-slack"), aws_ops_from_slack());
    table.insert(
        slug("serverless-inventory-management"),
        serverless_inventory_management(),
    );
    table.insert(slug("sagemaker-subscriptions"), sagemaker_subscriptions());
    table
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(summaries(), content_table()).expect("shipped catalog is well-formed")
});

/// The catalog compiled into the binary. Built once, shared for the life of
/// the process.
pub fn builtin_catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_no_gaps_or_orphans() {
        let catalog = builtin_catalog();

        assert!(catalog.content_gaps().is_empty());
        assert!(catalog.orphan_content().is_empty());
    }

    #[test]
    fn test_every_project_ships_all_five_sections() {
        let catalog = builtin_catalog();

        for summary in catalog.list_all() {
            let resolved = catalog.resolve(summary.slug.as_str()).unwrap();
            assert!(
                !resolved.content.overview.is_empty(),
                "{} overview is empty",
                summary.slug
            );
            assert!(!resolved.content.about.is_empty());
            assert!(!resolved.content.steps.is_empty());
            assert!(!resolved.content.services.is_empty());
            assert!(!resolved.content.time_and_cost.is_empty());
        }
    }

    #[test]
    fn test_every_project_ships_both_images() {
        let catalog = builtin_catalog();

        for summary in catalog.list_all() {
            let resolved = catalog.resolve(summary.slug.as_str()).unwrap();
            assert!(resolved.content.architecture_image.is_some());
            assert!(resolved.content.final_result_image.is_some());
        }
    }
}
