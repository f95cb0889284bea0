//! Template rendering for log records.
//!
//! Templates are plain strings with `{placeholder}` substitutions. Recognized
//! placeholders are `{timestamp}`, `{name}`, `{level}` and `{message}`, plus
//! `{module}`, `{file}` and `{line}` when the record carries call-site
//! metadata. Anything else, including unbalanced braces, passes through
//! literally.

use std::fmt::Write;

use crate::record::LogRecord;

/// Template used when the configuration does not supply one.
pub const DEFAULT_TEMPLATE: &str = "{timestamp} - {name} - {level} - {message}";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders a record into a line of text according to `template`.
#[must_use]
pub fn render(template: &str, record: &LogRecord<'_>) -> String {
    let mut out = String::with_capacity(template.len() + record.message.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        let Some(close) = rest.find('}') else {
            // No closing brace anywhere; emit the remainder as-is.
            break;
        };

        let key = &rest[1..close];
        if substitute(key, record, &mut out) {
            rest = &rest[close + 1..];
        } else {
            // Unrecognized placeholder passes through literally.
            out.push('{');
            rest = &rest[1..];
        }
    }

    out.push_str(rest);
    out
}

fn substitute(key: &str, record: &LogRecord<'_>, out: &mut String) -> bool {
    match key {
        "timestamp" => {
            let _ = write!(out, "{}", record.timestamp.format(TIMESTAMP_FORMAT));
        }
        "name" => out.push_str(record.name),
        "level" => out.push_str(record.severity.as_str()),
        "message" => out.push_str(record.message),
        "module" => match record.callsite {
            Some(callsite) => out.push_str(callsite.module),
            None => return false,
        },
        "file" => match record.callsite {
            Some(callsite) => out.push_str(callsite.file),
            None => return false,
        },
        "line" => match record.callsite {
            Some(callsite) => {
                let _ = write!(out, "{}", callsite.line);
            }
            None => return false,
        },
        _ => return false,
    }
    true
}
