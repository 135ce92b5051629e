// Evnames Category Model
// Fixed set of event-code categories from Linux input-event-codes.h

use std::fmt;

use strum_macros::EnumIter;

/// Semantic grouping of an input-event code, derived from its define prefix.
///
/// Declaration order is the emission order of the generated tables. There is
/// no Button variant: `BTN_` codes share the key numeric space and are folded
/// into [`Category::Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Category {
    Event,
    Relative,
    Absolute,
    Key,
    Led,
    Sound,
    Misc,
    Switch,
    ForceFeedback,
    Sync,
    InputProp,
}

/// Identifier prefixes recognized by the extractor, in scan order.
///
/// Every prefix is tested against every identifier; `BTN_` intentionally
/// resolves to [`Category::Key`] rather than a category of its own.
pub const PREFIXES: &[(&str, Category)] = &[
    ("EV_", Category::Event),
    ("REL_", Category::Relative),
    ("ABS_", Category::Absolute),
    ("KEY_", Category::Key),
    ("BTN_", Category::Key),
    ("LED_", Category::Led),
    ("SND_", Category::Sound),
    ("MSC_", Category::Misc),
    ("SW_", Category::Switch),
    ("FF_", Category::ForceFeedback),
    ("SYN_", Category::Sync),
    ("INPUT_PROP_", Category::InputProp),
];

/// Symbolic names that never enter a table, regardless of prefix.
///
/// EV_VERSION is a protocol version marker, the BTN_ entries are umbrella
/// aliases for ranges rather than standalone codes.
pub const DENYLIST: &[&str] = &[
    "EV_VERSION",
    "BTN_MISC",
    "BTN_MOUSE",
    "BTN_JOYSTICK",
    "BTN_GAMEPAD",
    "BTN_DIGI",
    "BTN_WHEEL",
    "BTN_TRIGGER_HAPPY",
];

impl Category {
    /// Lowercase stem used to name the generated per-category table
    /// (`ev` becomes `ev_map`).
    pub fn ident(self) -> &'static str {
        match self {
            Category::Event => "ev",
            Category::Relative => "rel",
            Category::Absolute => "abs",
            Category::Key => "key",
            Category::Led => "led",
            Category::Sound => "snd",
            Category::Misc => "msc",
            Category::Switch => "sw",
            Category::ForceFeedback => "ff",
            Category::Sync => "syn",
            Category::InputProp => "input_prop",
        }
    }

    /// Uppercase macro stem (`EV` for `EV_MAX`, `INPUT_PROP` for
    /// `INPUT_PROP_MAX`).
    pub fn macro_stem(self) -> &'static str {
        match self {
            Category::Event => "EV",
            Category::Relative => "REL",
            Category::Absolute => "ABS",
            Category::Key => "KEY",
            Category::Led => "LED",
            Category::Sound => "SND",
            Category::Misc => "MSC",
            Category::Switch => "SW",
            Category::ForceFeedback => "FF",
            Category::Sync => "SYN",
            Category::InputProp => "INPUT_PROP",
        }
    }

    /// Whether this category is indexed through the event-type dispatch
    /// table. Event-type codes select a table rather than live in one, and
    /// input properties are not reported as events at all.
    pub fn dispatchable(self) -> bool {
        !matches!(self, Category::Event | Category::InputProp)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_prefix_table_covers_every_category() {
        for category in Category::iter() {
            assert!(
                PREFIXES.iter().any(|&(_, c)| c == category),
                "no prefix resolves to {:?}",
                category
            );
        }
    }

    #[test]
    fn test_btn_prefix_folds_into_key() {
        let cats: Vec<Category> = PREFIXES
            .iter()
            .filter(|(p, _)| *p == "BTN_")
            .map(|&(_, c)| c)
            .collect();
        assert_eq!(cats, vec![Category::Key]);
    }

    #[test]
    fn test_denylist_contains_version_marker() {
        assert!(DENYLIST.contains(&"EV_VERSION"));
    }

    #[test]
    fn test_dispatchable_exclusions() {
        assert!(!Category::Event.dispatchable());
        assert!(!Category::InputProp.dispatchable());
        assert!(Category::Key.dispatchable());
        assert!(Category::Sync.dispatchable());
    }

    #[test]
    fn test_emission_order_starts_with_event() {
        let order: Vec<Category> = Category::iter().collect();
        assert_eq!(order[0], Category::Event);
        assert_eq!(order.last(), Some(&Category::InputProp));
    }

    #[test]
    fn test_macro_stem_matches_ident() {
        for category in Category::iter() {
            assert_eq!(category.macro_stem().to_lowercase(), category.ident());
        }
    }
}
