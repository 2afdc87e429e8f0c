//! artprompt: assemble image-generation prompts from Character, Scene and
//! Camera catalogs, with AI-suggested catalog additions.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{AppContext, Session};
pub use app::api::{
    CategoryListing, FormatsOutcome, GenerateOutcome, ImportOutcome, PromptFormat, SelectOutcome,
    StatusReport,
};
pub use domain::{
    AppError, CatalogName, Composition, MultiFormatPrompt, Preferences, Selections, Status,
    Theme, compose,
};
