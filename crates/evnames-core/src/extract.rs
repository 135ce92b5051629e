// Evnames Extractor
// One-pass scan of preprocessor defines into per-category code tables

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::category::{Category, DENYLIST, PREFIXES};

/// Code-to-name table for one category. Keyed by code so rendering order is
/// deterministic regardless of input line order.
pub type CategoryTable = BTreeMap<u32, String>;

/// Extraction errors. Malformed define lines are not errors; the only
/// failure mode is an unreadable input stream.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// All accepted defines, grouped by category.
///
/// Built in one pass over the input and not mutated afterwards. Categories
/// get their table lazily, on the first define that resolves to them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassifiedConstants {
    tables: IndexMap<Category, CategoryTable>,
}

impl ClassifiedConstants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted define. Later writes to the same code replace
    /// earlier ones (last-write-wins).
    fn record(&mut self, category: Category, code: u32, name: &str) {
        self.tables
            .entry(category)
            .or_default()
            .insert(code, name.to_string());
    }

    /// The recorded table for a category, if any define resolved to it.
    pub fn table(&self, category: Category) -> Option<&CategoryTable> {
        self.tables.get(&category)
    }

    /// Number of categories that received at least one entry.
    pub fn category_count(&self) -> usize {
        self.tables.len()
    }
}

fn define_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#define\s+(\w+)\s+(\w+)").unwrap())
}

/// Parse a bare integer token the way `int(tok, 0)` does: decimal, `0x` hex,
/// `0o` octal, or legacy leading-zero octal. Suffixed literals (`0x1ul`) and
/// anything else fail, which the caller treats as "skip this line".
fn parse_int_literal(token: &str) -> Option<u32> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(oct) = token.strip_prefix("0o").or_else(|| token.strip_prefix("0O")) {
        u32::from_str_radix(oct, 8).ok()
    } else if token.len() > 1 && token.starts_with('0') {
        u32::from_str_radix(&token[1..], 8).ok()
    } else {
        token.parse().ok()
    }
}

/// Classify one `#define` line into `constants`. Lines that are not a plain
/// `NAME <integer>` define are dropped silently; most header lines are.
fn parse_define(constants: &mut ClassifiedConstants, line: &str) {
    let Some(caps) = define_pattern().captures(line) else {
        return;
    };

    let name = &caps[1];
    if DENYLIST.contains(&name) {
        log::debug!("skipping denylisted define {}", name);
        return;
    }

    let Some(value) = parse_int_literal(&caps[2]) else {
        log::debug!("skipping non-literal define {} {}", name, &caps[2]);
        return;
    };

    for &(prefix, category) in PREFIXES {
        if name.starts_with(prefix) {
            constants.record(category, value, name);
        }
    }
}

/// Scan `lines` and build the classified constant tables.
///
/// Never fails: unparseable lines are expected (most of a real header) and
/// are skipped without note beyond a debug log.
pub fn extract<I, S>(lines: I) -> ClassifiedConstants
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut constants = ClassifiedConstants::new();
    for line in lines {
        let line = line.as_ref();
        if !line.starts_with("#define") {
            continue;
        }
        parse_define(&mut constants, line);
    }
    constants
}

/// Read a header file and extract its constants.
pub fn extract_from_path<P: AsRef<Path>>(path: P) -> Result<ClassifiedConstants, ExtractError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(extract(text.lines()))
}
