use std::fmt;

use crate::domain::CatalogName;

/// User-facing status line after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Generated,
    NeedSelections,
    Cleared,
    Importing(CatalogName),
    Imported { added: usize, skipped: usize },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Ready to create amazing art! 🎨✨"),
            Status::Generated => write!(f, "Prompt generated successfully! 🎉"),
            Status::NeedSelections => write!(f, "Please make selections first! ⚠️"),
            Status::Cleared => write!(f, "All selections cleared! 🗑️✅"),
            Status::Importing(name) => write!(f, "Importing new data for {}... 📥", name),
            Status::Imported { added, skipped } => write!(
                f,
                "Import complete! Added {} new entries, skipped {} duplicates 🎉",
                added, skipped
            ),
        }
    }
}
