//! Static community guidelines content.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GuidelineRule {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportingSection {
    pub title: &'static str,
    pub description: &'static str,
    pub reasons: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsequencesSection {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Guidelines {
    pub title: &'static str,
    pub introduction: &'static str,
    pub rules: &'static [GuidelineRule],
    pub reporting: ReportingSection,
    pub consequences: ConsequencesSection,
}

/// The community guidelines shown in the app.
pub fn community_guidelines() -> Guidelines {
    Guidelines {
        title: "Community Guidelines",
        introduction: "FixHub is a community of repair enthusiasts helping each other. \
            Please follow these guidelines to keep our community safe, helpful, and respectful.",
        rules: &[
            GuidelineRule {
                title: "Be Respectful",
                description: "Treat all community members with respect. No harassment, \
                    hate speech, or personal attacks.",
            },
            GuidelineRule {
                title: "Share Real Repairs",
                description: "Only post genuine repair experiences with actual before/after \
                    photos. No fake or misleading content.",
            },
            GuidelineRule {
                title: "Safety First",
                description: "Never post dangerous repair methods. If a repair involves \
                    electrical, gas, or structural work, recommend professional help.",
            },
            GuidelineRule {
                title: "No Spam",
                description: "Don't post advertisements, promotional content, or repetitive \
                    posts. Share to help, not to sell.",
            },
            GuidelineRule {
                title: "Appropriate Content",
                description: "Keep all content family-friendly. No inappropriate, offensive, \
                    or NSFW material.",
            },
            GuidelineRule {
                title: "Give Credit",
                description: "If you used someone else's repair guide or technique, give them \
                    credit.",
            },
        ],
        reporting: ReportingSection {
            title: "Report Violations",
            description: "If you see content that violates these guidelines, please report \
                it. We review all reports and take appropriate action.",
            reasons: &[
                "Inappropriate content",
                "Spam or advertisements",
                "Dangerous repair advice",
                "Misleading information",
                "Other violations",
            ],
        },
        consequences: ConsequencesSection {
            title: "Consequences",
            description: "Violations may result in content removal. Repeated violations may \
                lead to account restrictions.",
        },
    }
}
