//! Renderer for the document the external build tool actually reads.
//!
//! Emits the CommonJS `tailwind.config.js` module literal. Output is a pure
//! function of the config value: same input, same bytes. `theme.extend`
//! keys render in sorted order, content patterns and plugins in listed
//! order.

use std::fmt::Write;

use serde_json::Value;

use crate::config::ScanConfig;
use crate::errors::RenderError;

/// Render `config` as a `tailwind.config.js` module literal.
///
/// `pin` prepends the version line the updater reads back
/// (`const TAILWIND_VERSION = "x.y.z"`).
pub fn render_js(config: &ScanConfig, pin: Option<&str>) -> Result<String, RenderError> {
    let mut out = String::new();

    if let Some(version) = pin {
        let _ = writeln!(out, "const TAILWIND_VERSION = \"{}\"", escape_js(version));
        out.push('\n');
    }

    out.push_str("module.exports = {\n");

    let patterns = config.effective_content();
    if patterns.is_empty() {
        out.push_str("  content: [],\n");
    } else {
        out.push_str("  content: [\n");
        for pattern in &patterns {
            let _ = writeln!(out, "    \"{}\",", escape_js(pattern));
        }
        out.push_str("  ],\n");
    }

    out.push_str("  theme: {\n");
    if config.theme.is_empty() {
        out.push_str("    extend: {},\n");
    } else {
        out.push_str("    extend: {\n");
        for (key, value) in &config.theme.extend {
            let rendered = render_value(key, value, 3)?;
            let _ = writeln!(out, "      \"{}\": {},", escape_js(key), rendered);
        }
        out.push_str("    },\n");
    }
    out.push_str("  },\n");

    if config.plugins.is_empty() {
        out.push_str("  plugins: [],\n");
    } else {
        out.push_str("  plugins: [\n");
        for plugin in &config.plugins {
            let _ = writeln!(out, "    require(\"{}\"),", escape_js(plugin));
        }
        out.push_str("  ],\n");
    }

    out.push_str("}\n");

    tracing::debug!(
        patterns = patterns.len(),
        plugins = config.plugins.len(),
        pinned = pin.is_some(),
        "rendered scan document"
    );
    Ok(out)
}

/// Render an opaque theme value as a JS literal. Objects render multiline
/// with sorted keys at two-space indent steps; arrays render inline.
///
/// `key` is the `theme.extend` category the value sits under, carried for
/// error reporting only.
fn render_value(key: &str, value: &Value, indent: usize) -> Result<String, RenderError> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(format!("\"{}\"", escape_js(s))),
        Value::Array(items) => {
            let mut rendered = Vec::with_capacity(items.len());
            for item in items {
                rendered.push(render_value(key, item, indent)?);
            }
            Ok(format!("[{}]", rendered.join(", ")))
        }
        Value::Object(map) => {
            if map.is_empty() {
                return Ok("{}".to_string());
            }
            let pad = "  ".repeat(indent + 1);
            let close = "  ".repeat(indent);
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = String::from("{\n");
            for k in keys {
                // TOML datetimes arrive as a map with a private marker key
                // and have no sensible JS literal form.
                if k.starts_with("$__toml") {
                    return Err(RenderError::UnrepresentableValue {
                        key: key.to_string(),
                        message: "TOML datetime values cannot be rendered".to_string(),
                    });
                }
                let rendered = render_value(key, &map[k.as_str()], indent + 1)?;
                let _ = writeln!(out, "{pad}\"{}\": {},", escape_js(k), rendered);
            }
            let _ = write!(out, "{close}}}");
            Ok(out)
        }
    }
}

/// Escape a string for a double-quoted JS literal.
fn escape_js(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
