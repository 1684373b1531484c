//! Usage text rendering.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::schema::{ParamKind, ParameterSpec, Schema};

// Used when neither the settings nor the caller name the program.
const FALLBACK_PROGRAM: &str = "program";

fn format_arg_left(param: &ParameterSpec) -> String {
    match param.kind {
        ParamKind::RequiredPositional => format!("<{}>", param.name),
        ParamKind::OptionalPositional => format!("[{}]", param.name),
        ParamKind::VectorPositional => format!("[{}]...", param.name),
        ParamKind::Flag | ParamKind::OptionalScalar => {
            let mut out = match (param.short, &param.long) {
                (Some(short), Some(long)) => format!("-{short}, --{long}"),
                (Some(short), None) => format!("-{short}"),
                (None, Some(long)) => format!("    --{long}"),
                (None, None) => param.name.clone(),
            };

            if param.kind == ParamKind::OptionalScalar {
                out.push_str(&format!(" <{}>", param.value_type.placeholder()));
            }

            out
        }
    }
}

fn format_arg_help(param: &ParameterSpec) -> String {
    let mut out = String::from(param.help.trim());
    let mut append = |text: &str| {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(text);
    };

    if param.is_required() {
        append("(required)");
    }

    if param.kind != ParamKind::Flag {
        if let Some(default) = &param.default {
            append(&format!("[default: {default}]"));
        }
    }

    out
}

fn format_usage_item(param: &ParameterSpec) -> Option<String> {
    match param.kind {
        ParamKind::OptionalScalar if param.is_required() => {
            let left = format_arg_left(param);
            Some(String::from(left.trim_start()))
        }
        ParamKind::Flag | ParamKind::OptionalScalar => None,
        _ => Some(format_arg_left(param)),
    }
}

fn push_table(out: &mut String, title: &str, rows: &[(String, String)]) {
    if rows.is_empty() {
        return;
    }

    out.push_str(&format!("\n{title}:\n"));

    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {left}\n"));
        } else {
            out.push_str(&format!("  {left:width$}  {help}\n"));
        }
    }
}

/// Render the usage text of the schema.
///
/// The program name of the settings wins over `invoked_as`, the name the program was started
/// with.
pub fn render<const N: usize>(schema: &Schema<N>, invoked_as: &str) -> String {
    let settings = schema.settings();
    let program = [settings.program.as_str(), invoked_as]
        .into_iter()
        .find(|x| !x.trim().is_empty())
        .unwrap_or(FALLBACK_PROGRAM);

    let mut out = String::new();
    if settings.description.trim().is_empty() {
        out.push_str(&format!("{program}\n"));
    } else {
        out.push_str(&format!("{program} - {}\n", settings.description.trim()));
    }

    let has_options = schema
        .params()
        .iter()
        .any(|x| !x.kind.is_positional() && !x.is_required());

    let mut usage = format!("\nUsage: {program}");
    if has_options || settings.help_short.is_some() || settings.help_long.is_some() {
        usage.push_str(" [OPTIONS]");
    }
    for item in schema.params().iter().filter_map(format_usage_item) {
        usage.push(' ');
        usage.push_str(&item);
    }
    out.push_str(&usage);
    out.push('\n');

    let (positionals, options): (Vec<&ParameterSpec>, Vec<&ParameterSpec>) =
        schema.params().iter().partition(|x| x.kind.is_positional());

    let rows: Vec<(String, String)> = positionals
        .iter()
        .map(|x| (format_arg_left(x), format_arg_help(x)))
        .collect();
    push_table(&mut out, "Arguments", &rows);

    let mut rows: Vec<(String, String)> = options
        .iter()
        .map(|x| (format_arg_left(x), format_arg_help(x)))
        .collect();

    let help_left = match (settings.help_short, &settings.help_long) {
        (Some(short), Some(long)) => Some(format!("-{short}, --{long}")),
        (Some(short), None) => Some(format!("-{short}")),
        (None, Some(long)) => Some(format!("    --{long}")),
        (None, None) => None,
    };
    if let Some(left) = help_left {
        rows.push((left, String::from("Print help")));
    }
    push_table(&mut out, "Options", &rows);

    out
}
