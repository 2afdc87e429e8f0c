//! Prompt composition.
//!
//! Turns selections plus the catalogs into the single-line prompt and the
//! four alternate text formats. Composition is pure: it reads its inputs and
//! returns fresh strings.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{CatalogName, CatalogSet, Selections};

/// Shown instead of a prompt when nothing is selected.
pub const EMPTY_PROMPT_PLACEHOLDER: &str =
    "✨ Please make some selections first to generate your prompt! 🎨";

const NARRATIVE_TEMPLATE: &str = "In this captivating scene, we witness {{ opening }}. The composition reveals {{ middle }}. {{ closing }} brings this vision to life.";

const POETIC_TEMPLATE: &str = "A vision unfolds...\n\n{{ first }},\n{{ second }},\n{{ third }},\n{{ fourth }}\n\n...captured in timeless beauty.";

const BULLET_TEMPLATE: &str = "🎨 AI ART PROMPT - QUICK REFERENCE\n\n📊 Summary: {{ summary }} elements\n\n📋 Full Prompt Elements:\n{{ elements }}";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Errors from rendering a prompt format.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Failed to render {format} prompt: {details}")]
    Render { format: &'static str, details: String },
}

/// The four alternate renderings of one flattened selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiFormatPrompt {
    pub narrative: String,
    pub technical: String,
    pub poetic: String,
    pub bullet_point: String,
}

/// Result of composing a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// No usable selections; no formats were generated.
    Empty,
    Composed { single: String, formats: MultiFormatPrompt },
}

impl Composition {
    /// The single-line prompt, or the placeholder when empty.
    pub fn single(&self) -> &str {
        match self {
            Composition::Empty => EMPTY_PROMPT_PLACEHOLDER,
            Composition::Composed { single, .. } => single,
        }
    }

    pub fn formats(&self) -> Option<&MultiFormatPrompt> {
        match self {
            Composition::Empty => None,
            Composition::Composed { formats, .. } => Some(formats),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Composition::Empty)
    }
}

/// Selected `(category, value)` pairs of one catalog, in category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatGroup<'a> {
    pub catalog: CatalogName,
    pub pairs: Vec<(&'a str, &'a str)>,
}

/// Collect the selections that still resolve against the catalogs.
///
/// Catalogs are visited in `order`, categories in catalog order. A selection
/// whose category is gone, or whose value is no longer listed, is skipped.
pub fn flatten<'a>(
    selections: &'a Selections,
    catalogs: &'a CatalogSet,
    order: &[CatalogName],
) -> Vec<FlatGroup<'a>> {
    order
        .iter()
        .map(|&name| {
            let pairs = catalogs
                .get(name)
                .categories()
                .iter()
                .filter_map(|category| {
                    let value = selections.get(name, &category.name)?;
                    category.contains(value).then_some((category.name.as_str(), value))
                })
                .collect::<Vec<_>>();

            let stale = selections.count_in(name).saturating_sub(pairs.len());
            if stale > 0 {
                debug!(
                    catalog = %name,
                    stale,
                    "skipping selections that no longer match the catalog"
                );
            }

            FlatGroup { catalog: name, pairs }
        })
        .collect()
}

/// Compose using the default catalog order (Character, Scene, Camera).
pub fn compose(
    selections: &Selections,
    catalogs: &CatalogSet,
) -> Result<Composition, ComposeError> {
    compose_with_order(selections, catalogs, &CatalogName::ALL)
}

pub fn compose_with_order(
    selections: &Selections,
    catalogs: &CatalogSet,
    order: &[CatalogName],
) -> Result<Composition, ComposeError> {
    let groups = flatten(selections, catalogs, order);
    let parts: Vec<&str> =
        groups.iter().flat_map(|group| group.pairs.iter().map(|(_, value)| *value)).collect();

    if parts.is_empty() {
        return Ok(Composition::Empty);
    }

    let formats = MultiFormatPrompt {
        narrative: narrative(&parts)?,
        technical: technical(&groups),
        poetic: poetic(&parts)?,
        bullet_point: bullet_point(&groups, &parts)?,
    };

    Ok(Composition::Composed { single: parts.join(", "), formats })
}

fn narrative(parts: &[&str]) -> Result<String, ComposeError> {
    render(
        "narrative",
        NARRATIVE_TEMPLATE,
        context! {
            opening => slice(parts, 0, Some(3)).join(" featuring "),
            middle => slice(parts, 3, Some(6)).join(" with "),
            closing => slice(parts, 6, None).join(", creating "),
        },
    )
}

fn technical(groups: &[FlatGroup<'_>]) -> String {
    let mut lines = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{} {}:", icon(group.catalog), group.catalog));
        lines.extend(
            group.pairs.iter().map(|(category, value)| format!("  • {}: {}", category, value)),
        );
    }
    lines.join("\n")
}

fn poetic(parts: &[&str]) -> Result<String, ComposeError> {
    render(
        "poetic",
        POETIC_TEMPLATE,
        context! {
            first => slice(parts, 0, Some(2)).join(" dancing with "),
            second => slice(parts, 2, Some(4)).join(" embracing "),
            third => slice(parts, 4, Some(6)).join(" whispering "),
            fourth => slice(parts, 6, None).join(" illuminating "),
        },
    )
}

fn bullet_point(groups: &[FlatGroup<'_>], parts: &[&str]) -> Result<String, ComposeError> {
    let summary = groups
        .iter()
        .map(|group| format!("{} {}", group.pairs.len(), group.catalog.key()))
        .collect::<Vec<_>>()
        .join(", ");
    let elements = parts
        .iter()
        .enumerate()
        .map(|(i, part)| format!("  {}. {}", i + 1, part))
        .collect::<Vec<_>>()
        .join("\n");

    render("bullet point", BULLET_TEMPLATE, context! { summary, elements })
}

fn icon(name: CatalogName) -> &'static str {
    match name {
        CatalogName::Character => "👤",
        CatalogName::Scene => "🎬",
        CatalogName::Camera => "📸",
    }
}

/// `parts[start..end]`, clamped to the available values.
fn slice<'p, 'a>(parts: &'p [&'a str], start: usize, end: Option<usize>) -> &'p [&'a str] {
    let len = parts.len();
    let start = start.min(len);
    let end = end.map_or(len, |end| end.min(len));
    &parts[start..end]
}

fn render(
    format: &'static str,
    template: &str,
    ctx: minijinja::Value,
) -> Result<String, ComposeError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, ctx)
        .map_err(|err| ComposeError::Render { format, details: err.to_string() })
}
