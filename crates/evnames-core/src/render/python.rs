// Evnames Python Renderer
// Emits a module of bidirectional code/name dicts plus lookup helpers

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::category::Category;
use crate::extract::ClassifiedConstants;

/// Event-type names that do not select a per-code table: repeats and power
/// events carry no code namespace of their own, FF_STATUS shares the
/// force-feedback space, and MAX is the bound marker.
const NON_DISPATCH_TYPES: &[&str] = &["REP", "PWR", "FF_STATUS", "MAX"];

/// Render the dynamic-mapping module.
///
/// Each per-category dict is immediately merged with its own inverse, so the
/// final object maps both code to name and name to code. The aggregate `map`
/// is keyed by the recorded event-type codes.
pub fn render(constants: &ClassifiedConstants) -> String {
    let mut out = String::new();
    out.push_str("# THIS FILE IS GENERATED, DO NOT EDIT\n\n");

    for category in Category::iter() {
        push_category_dict(&mut out, constants, category);
    }

    push_dispatch_dict(&mut out, constants);
    push_accessors(&mut out);
    out
}

fn push_category_dict(out: &mut String, constants: &ClassifiedConstants, category: Category) {
    let ident = category.ident();
    let _ = writeln!(out, "{}_map = {{", ident);
    if let Some(table) = constants.table(category) {
        for (code, name) in table {
            let _ = writeln!(out, "\t{} : \"{}\",", code, name);
        }
    }
    out.push_str("}\n");
    let _ = writeln!(out, "for k, v in {}_map.items():", ident);
    let _ = writeln!(out, "\t{}_map[v] = k", ident);
    out.push('\n');
}

fn push_dispatch_dict(out: &mut String, constants: &ClassifiedConstants) {
    out.push_str("map = {\n");
    if let Some(events) = constants.table(Category::Event) {
        for (code, name) in events {
            let stem = name.strip_prefix("EV_").unwrap_or(name.as_str());
            if NON_DISPATCH_TYPES.contains(&stem) {
                continue;
            }
            let _ = writeln!(out, "\t{} : {}_map,", code, stem.to_lowercase());
        }
    }
    out.push_str("}\n\n");
}

fn push_accessors(out: &mut String) {
    out.push_str("def event_get_type_name(type):\n");
    out.push_str("\treturn ev_map[type]\n\n\n");
    out.push_str("def event_get_code_name(type, code):\n");
    out.push_str("\tif map.has_key(type) and map[type].has_key(code):\n");
    out.push_str("\t\treturn map[type][code]\n");
    out.push_str("\treturn 'UNKNOWN'\n\n");
}
