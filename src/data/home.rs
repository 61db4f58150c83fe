//! The shipped home page content: profile, certifications, experience,
//! education and skills.

use crate::domain::model::{
    Certification, Education, Experience, HomeContent, Profile, Skill, Stat,
};

pub fn home_content() -> HomeContent {
    HomeContent {
        profile: profile(),
        certifications: certifications(),
        experience: experience(),
        education: education(),
        skills: skills(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Snigdha".to_string(),
        headline: "Cloud Engineer".to_string(),
        intro: "I’m a lifelong learner who loves building real-world AWS projects \
                and turning complex cloud ideas into simple, practical solutions. \
                I share everything I learn to make the cloud accessible for everyone, \
                helping thousands grow through hands-on guidance. Cloud is my favourite \
                place to be, and I love creating, learning, and building alongside the community."
            .to_string(),
        portrait_image: "/images/home/banner/banner-img.png".to_string(),
        about: vec![
            "With 3.5+ years in tech, I’ve grown a deep passion for building real-world \
             AWS solutions. I started with cloud fundamentals and gradually moved into \
             designing full, end-to-end architectures across multiple AWS domains."
                .to_string(),
            "My journey hasn’t been linear, it’s been shaped by curiosity, consistency, \
             and a genuine love for cloud. I’ve learned by building, breaking, fixing, \
             and exploring architectures that mirror real production systems. Today, I \
             share those learnings through hands-on labs and practical tutorials that \
             show how AWS is used in the real world."
                .to_string(),
            "I care about making cloud accessible, simple, and meaningful, and I’m \
             driven by the joy of learning, creating, and helping others grow in their \
             cloud careers."
                .to_string(),
        ],
        stats: vec![
            Stat {
                count: "3.5+".to_string(),
                label: "Years of Cloud Experience".to_string(),
            },
            Stat {
                count: "35+".to_string(),
                label: "AWS Projects Built".to_string(),
            },
            Stat {
                count: "5000+".to_string(),
                label: "Learners Impacted".to_string(),
            },
        ],
    }
}

fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            id: "aws-saa".to_string(),
            icon: "/images/certs/aws-saa.jpeg".to_string(),
            name: "AWS Solutions Architect Associate".to_string(),
            code: "SAA-C03".to_string(),
        },
        Certification {
            id: "aws-aip".to_string(),
            icon: "/images/certs/aws-aip.jpeg".to_string(),
            name: "AWS Certified AI Practitioner".to_string(),
            code: "AIF-C01".to_string(),
        },
        Certification {
            id: "aws-ccp".to_string(),
            icon: "/images/certs/aws-ccp.jpeg".to_string(),
            name: "AWS Certified Cloud Practitioner".to_string(),
            code: "CLF-C02".to_string(),
        },
        Certification {
            id: "az-900".to_string(),
            icon: "/images/certs/azure-fundamentals.png".to_string(),
            name: "Azure Fundamentals".to_string(),
            code: "AZ-900".to_string(),
        },
        Certification {
            id: "dp-203".to_string(),
            icon: "/images/certs/azure-data-engineer.png".to_string(),
            name: "Azure Data Engineer Associate".to_string(),
            code: "DP-203".to_string(),
        },
    ]
}

fn experience() -> Vec<Experience> {
    vec![
        Experience {
            years: "2025 - Present".to_string(),
            title: "Cloud Engineer".to_string(),
            company: "Zero To Cloud".to_string(),
            mode: "Remote".to_string(),
            description: "Designing AWS architectures across networking, serverless, AI/ML, \
                          and HA/DR while creating hands-on projects and documentation used \
                          by 5000+ learners. Provide technical guidance and production-style \
                          best practices to the Zero To Cloud community."
                .to_string(),
        },
        Experience {
            years: "2022 - 2025".to_string(),
            title: "Cloud Engineer | Analyst III - Infrastructure Services".to_string(),
            company: "DXC Technology".to_string(),
            mode: "Remote".to_string(),
            description: "Resolved infra issues, improving reliability, analyzing logs, and \
                          producing clear technical documentation for smooth operations."
                .to_string(),
        },
    ]
}

fn education() -> Vec<Education> {
    vec![
        Education {
            title: "Diploma in Computer Engineering (2019–2022)".to_string(),
            description: "Solid foundation in programming, operating systems, computer \
                          networks, and software engineering fundamentals."
                .to_string(),
        },
        Education {
            title: "Bachelor of Computer Science (2022–2025)".to_string(),
            description: "Expanded knowledge in algorithms, data structures, cloud \
                          computing, and system design principles."
                .to_string(),
        },
        Education {
            title: "AWS Certifications & Cloud Learning Path".to_string(),
            description: "Developing expertise in AWS architecture, security, DevOps, \
                          serverless, networking, and AI/ML workloads through real-world \
                          projects."
                .to_string(),
        },
    ]
}

fn skills() -> Vec<Skill> {
    vec![
        Skill {
            name: "AWS".to_string(),
            icon: "/images/skills/aws.png".to_string(),
            rating: 5,
        },
        Skill {
            name: "VPC & Networking".to_string(),
            icon: "/images/skills/network.png".to_string(),
            rating: 5,
        },
        Skill {
            name: "Serverless (Lambda)".to_string(),
            icon: "/images/skills/lambda.jpeg".to_string(),
            rating: 5,
        },
        Skill {
            name: "DevOps / CI-CD".to_string(),
            icon: "/images/skills/GIT.png".to_string(),
            rating: 4,
        },
        Skill {
            name: "Cloud Security".to_string(),
            icon: "/images/skills/shield.png".to_string(),
            rating: 5,
        },
        Skill {
            name: "AI / ML on Cloud".to_string(),
            icon: "/images/skills/aiml.jpeg".to_string(),
            rating: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SKILL_MAX_RATING;

    #[test]
    fn test_home_content_sections_are_populated() {
        let home = home_content();

        assert_eq!(home.profile.name, "Snigdha");
        assert_eq!(home.profile.about.len(), 3);
        assert_eq!(home.profile.stats.len(), 3);
        assert_eq!(home.certifications.len(), 5);
        assert_eq!(home.experience.len(), 2);
        assert_eq!(home.education.len(), 3);
        assert_eq!(home.skills.len(), 6);
    }

    #[test]
    fn test_skill_ratings_stay_within_scale() {
        for skill in skills() {
            assert!(
                skill.rating <= SKILL_MAX_RATING,
                "{} rating out of range",
                skill.name
            );
        }
    }

    #[test]
    fn test_certification_ids_are_unique() {
        let certs = certifications();
        let mut ids: Vec<&str> = certs.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), certs.len());
    }
}
