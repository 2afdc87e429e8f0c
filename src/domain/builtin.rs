//! Built-in catalog, help text and fallback suggestions.

use crate::domain::{Catalog, CatalogName, CatalogSet, Category, SourceRef};

/// Suggestions imported when the generator fails or answers in the wrong shape.
pub const FALLBACK_SUGGESTIONS: [&str; 5] = [
    "Galactic Nebula Clouds",
    "Steampunk Automaton",
    "Art Deco Metropolis",
    "Iridescent Exoskeleton",
    "Whispering Shadow Forest",
];

type BuiltinCategory = (&'static str, usize, [&'static str; 4]);

const CHARACTER: [BuiltinCategory; 3] = [
    ("Art Style", 2, ["Studio Ghibli", "Cyberpunk Dystopia", "Art Nouveau", "Impressionistic"]),
    ("Hair Style", 6, ["Long Wavy Hair", "Silver Pixie Cut", "Braided Crown", "Fiery Mohawk"]),
    ("Eye Color", 10, ["Emerald Green", "Sapphire Blue", "Molten Gold", "Heterochromia"]),
];

const SCENE: [BuiltinCategory; 3] = [
    (
        "Setting",
        2,
        ["Floating Islands", "Ancient Library", "Neon-lit Megacity", "Enchanted Forest"],
    ),
    ("Time of Day", 6, ["Golden Hour", "Blue Hour", "Midnight", "Dawn"]),
    ("Weather", 10, ["Gentle Rain", "Rolling Fog", "Auroral Display", "Meteor Shower"]),
];

const CAMERA: [BuiltinCategory; 3] = [
    ("Shot Type", 2, ["Extreme Close-Up", "Medium Shot", "Long Shot", "Dutch Angle"]),
    ("Lens", 6, ["85mm f/1.4", "24mm Wide Angle", "Macro Lens", "Fisheye Lens"]),
    ("Lighting", 10, ["Rim Lighting", "Chiaroscuro", "Volumetric Lighting", "Neon Glow"]),
];

const CHARACTER_HELP: [(&str, &str); 3] = [
    ("art style", "The overall visual style of the character."),
    ("hair style", "The character's hairstyle."),
    ("eye color", "The color of the character's eyes."),
];

const SCENE_HELP: [(&str, &str); 3] = [
    ("setting", "The location or environment of the scene."),
    ("time of day", "The time of day, affecting light and mood."),
    ("weather", "The weather conditions in the scene."),
];

const CAMERA_HELP: [(&str, &str); 3] = [
    ("shot type", "The camera framing for the subject."),
    ("lens", "The type of camera lens used."),
    ("lighting", "The lighting setup for the scene."),
];

/// The catalog used when the remote source cannot be loaded.
pub fn builtin_catalogs() -> CatalogSet {
    let mut set = CatalogSet::default();
    for name in CatalogName::ALL {
        set.set(name, builtin_catalog(name));
    }
    set
}

fn builtin_catalog(name: CatalogName) -> Catalog {
    let entries = match name {
        CatalogName::Character => &CHARACTER,
        CatalogName::Scene => &SCENE,
        CatalogName::Camera => &CAMERA,
    };

    entries
        .iter()
        .map(|(category, row_start, values)| {
            let source =
                SourceRef { sheet: name.as_str().to_string(), col: 2, row_start: *row_start };
            Category::new(*category, *values, source)
        })
        .collect()
}

/// One-line description of a category, matched case-insensitively.
pub fn category_help(catalog: CatalogName, category: &str) -> Option<&'static str> {
    let entries = match catalog {
        CatalogName::Character => &CHARACTER_HELP,
        CatalogName::Scene => &SCENE_HELP,
        CatalogName::Camera => &CAMERA_HELP,
    };
    let key = category.trim().to_lowercase();
    entries.iter().find(|(name, _)| *name == key).map(|(_, text)| *text)
}
