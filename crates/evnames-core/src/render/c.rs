// Evnames C Renderer
// Emits a header of static code-to-name arrays plus dispatch and bounds
// tables, suitable for direct inclusion in a C library

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::category::Category;
use crate::extract::ClassifiedConstants;

/// Render the static-table header.
///
/// Category arrays are indexed by the define's own name and hold that name
/// as their string value; the identifier is the display name. The dispatch
/// and bounds tables are keyed by the `EV_*` macros themselves, so they do
/// not read the extracted data.
pub fn render(constants: &ClassifiedConstants) -> String {
    let mut out = String::new();
    out.push_str("/* THIS FILE IS GENERATED, DO NOT EDIT */\n\n");
    out.push_str("#ifndef EVENT_NAMES_H\n");
    out.push_str("#define EVENT_NAMES_H\n\n");
    // linux/input.h has no SYN_MAX of its own.
    out.push_str("#define SYN_MAX 3 /* linux/input.h doesn't define that */\n\n");

    for category in Category::iter() {
        push_category_table(&mut out, constants, category);
    }

    push_dispatch_table(&mut out);
    push_bounds_table(&mut out);

    out.push_str("#endif /* EVENT_NAMES_H */\n");
    out
}

fn push_category_table(out: &mut String, constants: &ClassifiedConstants, category: Category) {
    let ident = category.ident();
    let stem = category.macro_stem();
    let _ = writeln!(
        out,
        "static const char * const {}_map[{}_MAX + 1] = {{",
        ident, stem
    );
    let _ = writeln!(out, "\t[0 ... {}_MAX] = NULL,", stem);
    if let Some(table) = constants.table(category) {
        for name in table.values() {
            let _ = writeln!(out, "\t[{}] = \"{}\",", name, name);
        }
    }
    out.push_str("};\n\n");
}

fn push_dispatch_table(out: &mut String) {
    out.push_str("static const char * const * const event_type_map[EV_MAX + 1] = {\n");
    out.push_str("\t[0 ... EV_MAX] = NULL,\n");
    for category in Category::iter().filter(|c| c.dispatchable()) {
        let _ = writeln!(
            out,
            "\t[EV_{}] = {}_map,",
            category.macro_stem(),
            category.ident()
        );
    }
    out.push_str("};\n\n");
}

fn push_bounds_table(out: &mut String) {
    out.push_str("static const int ev_max[EV_MAX + 1] = {\n");
    for category in Category::iter().filter(|c| c.dispatchable()) {
        let stem = category.macro_stem();
        let _ = writeln!(out, "\t[EV_{}] = {}_MAX,", stem, stem);
    }
    out.push_str("};\n\n");
}
