use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Presentational marker attached to items and categories. Core logic never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Package,
    Truck,
    Clock,
    AlertTriangle,
    RotateCcw,
    Shield,
    CreditCard,
    Headphones,
    Globe,
    Timer,
}

impl Icon {
    /// Navigation icon for a category id, falling back to the products icon.
    pub fn for_category(category_id: &str) -> Self {
        match category_id {
            "products" => Icon::Package,
            "delivery" => Icon::Truck,
            "issues" => Icon::AlertTriangle,
            "warranty" => Icon::Shield,
            "payment" => Icon::CreditCard,
            "support" => Icon::Headphones,
            _ => Icon::Package,
        }
    }
}

/// One bullet of an answer list, e.g. "**Express Delivery:** Next-day delivery ...".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerBlock {
    /// Free text. May carry inline `**bold**` emphasis.
    Paragraph { text: String },
    Bullets { items: Vec<Bullet> },
    /// Highlighted box, optionally titled.
    Callout { title: Option<String>, body: String },
}

/// Rich answer content. Opaque to search and filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub blocks: Vec<AnswerBlock>,
}

impl Answer {
    pub fn new(blocks: Vec<AnswerBlock>) -> Self {
        Self { blocks }
    }

    pub fn to_markdown(&self) -> String {
        let mut parts = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            let rendered = match block {
                AnswerBlock::Paragraph { text } => text.clone(),
                AnswerBlock::Bullets { items } => items
                    .iter()
                    .map(|b| match &b.label {
                        Some(label) => format!("- **{label}:** {}", b.text),
                        None => format!("- {}", b.text),
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
                AnswerBlock::Callout { title, body } => match title {
                    Some(title) => format!("> **{title}**\n>\n> {body}"),
                    None => format!("> {body}"),
                },
            };
            parts.push(rendered);
        }
        parts.join("\n\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Unique across the whole catalog, e.g. "delivery-2".
    pub id: String,
    pub question: String,
    pub answer: Answer,
    pub icon: Option<Icon>,
    /// Lowercase search tokens.
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCategory {
    /// Unique short id, doubles as the navigation anchor.
    pub id: String,
    pub title: String,
    /// Display order.
    pub items: Vec<FaqItem>,
}

/// Navigation entry for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySummary {
    pub id: String,
    pub title: String,
    pub icon: Icon,
    pub count: usize,
}

/// Counters shown in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogStats {
    pub articles: usize,
    pub categories: usize,
}
