// Evnames Renderers
// Two output modes over the same classified-constants traversal

pub mod c;
pub mod python;

use crate::extract::ClassifiedConstants;

/// Which artifact to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// C header with static lookup arrays.
    #[default]
    C,
    /// Python module with bidirectional dicts and accessor functions.
    Python,
}

/// Render the generated artifact for `constants` in the requested format.
pub fn render(constants: &ClassifiedConstants, format: OutputFormat) -> String {
    match format {
        OutputFormat::C => c::render(constants),
        OutputFormat::Python => python::render(constants),
    }
}
