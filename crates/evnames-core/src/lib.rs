// Evnames Core Library
// Scans linux/input.h style headers for event-code defines and renders
// code-to-name lookup tables

pub mod category;
pub mod extract;
pub mod render;

pub use category::{Category, DENYLIST, PREFIXES};
pub use extract::{extract, extract_from_path, ClassifiedConstants, ExtractError};
pub use render::{render, OutputFormat};
