//! The default intake question catalog.
//!
//! The ordered set of questions the wizard walks a new project through.
//! Exposed as configuration data so the UI, the audit, and the tests all
//! share one source; the resolution core itself works against any
//! catalog handed to it.

use crate::question::{ChoiceOption, InputKind, Placement, QuestionCatalog, QuestionDef};

/// Builds the default wizard catalog.
///
/// The catalog is statically valid; construction cannot fail.
#[must_use]
pub fn default_questions() -> QuestionCatalog {
    let questions = vec![
        QuestionDef::new("project_name", "Business Name", InputKind::FreeText)
            .required()
            .with_placement(Placement::TopLevel),
        QuestionDef::new("industry", "Industry", InputKind::SingleChoice)
            .required()
            .with_placement(Placement::TopLevel)
            .with_options(industry_options()),
        QuestionDef::new("design_style", "Design Style", InputKind::StyleGallery)
            .required()
            .with_placement(Placement::TopLevel)
            .with_options(style_options()),
        QuestionDef::new("brand_colors", "Brand Colors", InputKind::ColorSet)
            .required()
            .with_placement(Placement::TopLevel),
        QuestionDef::new("tone", "Tone of Voice", InputKind::SingleChoice)
            .with_placement(Placement::AdditionalContext)
            .with_options(tone_options()),
        QuestionDef::new("font_pair", "Font Pairing", InputKind::FontPairing)
            .with_placement(Placement::AdditionalContext)
            .with_options(font_options()),
        QuestionDef::new("draft_pages", "Pages", InputKind::PageSet)
            .with_placement(Placement::AdditionalContext)
            .with_options(page_options()),
    ];

    QuestionCatalog::new(questions).expect("default catalog is statically valid")
}

fn industry_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("technology", "Technology"),
        ChoiceOption::new("finance", "Finance"),
        ChoiceOption::new("health", "Health & Wellness"),
        ChoiceOption::new("food", "Food & Beverage"),
        ChoiceOption::new("legal", "Legal Services"),
        ChoiceOption::new("retail", "Retail"),
        ChoiceOption::new("creative", "Creative & Design"),
        ChoiceOption::new("education", "Education"),
    ]
}

fn style_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("minimalist", "Minimalist")
            .with_description("Whitespace, restraint, quiet typography"),
        ChoiceOption::new("modern", "Modern").with_description("Clean lines, bold type"),
        ChoiceOption::new("playful", "Playful")
            .with_description("Rounded shapes, bright accents"),
        ChoiceOption::new("corporate", "Corporate")
            .with_description("Structured, trustworthy, conservative"),
        ChoiceOption::new("cyberpunk", "Cyberpunk")
            .with_description("Dark backgrounds, neon highlights"),
    ]
}

fn tone_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("professional", "Professional"),
        ChoiceOption::new("friendly", "Friendly"),
        ChoiceOption::new("bold", "Bold"),
        ChoiceOption::new("warm", "Warm"),
    ]
}

fn font_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("inter-lora", "Inter + Lora"),
        ChoiceOption::new("poppins-source", "Poppins + Source Serif"),
        ChoiceOption::new("space-ibm", "Space Grotesk + IBM Plex"),
    ]
}

fn page_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("home", "Home"),
        ChoiceOption::new("about", "About"),
        ChoiceOption::new("services", "Services"),
        ChoiceOption::new("menu", "Menu"),
        ChoiceOption::new("contact", "Contact"),
        ChoiceOption::new("blog", "Blog"),
    ]
}
