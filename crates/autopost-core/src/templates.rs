//! Fixed set of post templates handed to the rendering layer.

use serde::Serialize;

/// Layout identifier understood by the template renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateLayout {
    Centered,
    Minimal,
    Bold,
    Duo,
    Story,
    Sale,
}

impl TemplateLayout {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            TemplateLayout::Centered => "centered",
            TemplateLayout::Minimal => "minimal",
            TemplateLayout::Bold => "bold",
            TemplateLayout::Duo => "duo",
            TemplateLayout::Story => "story",
            TemplateLayout::Sale => "sale",
        }
    }
}

impl std::fmt::Display for TemplateLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub layout: TemplateLayout,
}

pub const POST_TEMPLATES: [PostTemplate; 6] = [
    PostTemplate {
        id: "product-hero",
        name: "Producto Hero",
        layout: TemplateLayout::Centered,
    },
    PostTemplate {
        id: "product-minimal",
        name: "Minimal Clean",
        layout: TemplateLayout::Minimal,
    },
    PostTemplate {
        id: "product-bold",
        name: "Bold Statement",
        layout: TemplateLayout::Bold,
    },
    PostTemplate {
        id: "product-duo",
        name: "Duo Showcase",
        layout: TemplateLayout::Duo,
    },
    PostTemplate {
        id: "product-story",
        name: "Story Format",
        layout: TemplateLayout::Story,
    },
    PostTemplate {
        id: "product-sale",
        name: "Flash Sale",
        layout: TemplateLayout::Sale,
    },
];

#[must_use]
pub fn find_template(id: &str) -> Option<&'static PostTemplate> {
    POST_TEMPLATES.iter().find(|t| t.id == id)
}

/// Looks up a template by id, falling back to the first (`product-hero`).
#[must_use]
pub fn template_or_default(id: &str) -> &'static PostTemplate {
    find_template(id).unwrap_or(&POST_TEMPLATES[0])
}
