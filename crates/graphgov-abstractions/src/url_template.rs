//! RFC 6570 URL template expansion.
//!
//! Only the expression forms that appear in Graph templates are supported:
//!
//! - `{var}` simple expansion, reserved characters percent-encoded
//! - `{+var}` reserved expansion, used for `{+baseurl}`
//! - `{?a,b}` and `{&a,b}` form-style query expansion
//!
//! Variable names are matched literally, so `{?%24select}` binds the
//! parameter named `%24select` and renders it as `%24select=...`.

use std::collections::BTreeMap;

use crate::error::{GraphError, GraphResult};
use crate::query::QueryValue;

const RESERVED: &[u8] = b":/?#[]@!$&'()*+,;=";

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn encode_simple(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Percent-encodes everything except unreserved and reserved characters.
/// Existing `%XX` triplets are kept.
fn encode_reserved(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        let is_triplet = byte == b'%'
            && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
        if is_triplet {
            out.push_str(&value[i..i + 3]);
            i += 3;
            continue;
        }
        if is_unreserved(byte) || RESERVED.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
        i += 1;
    }
    out
}

fn render_value(value: &QueryValue, encode: fn(&str) -> String) -> String {
    match value {
        QueryValue::List(items) => items
            .iter()
            .map(|item| encode(item))
            .collect::<Vec<_>>()
            .join(","),
        other => encode(&other.to_text()),
    }
}

fn expand_expression(
    expression: &str,
    parameters: &BTreeMap<String, QueryValue>,
) -> GraphResult<String> {
    let (operator, variables) = match expression.chars().next() {
        Some(op @ ('+' | '?' | '&')) => (Some(op), &expression[1..]),
        Some(op @ ('#' | '.' | '/' | ';' | '=' | ',' | '!' | '@' | '|')) => {
            return Err(GraphError::UrlTemplate(format!(
                "unsupported expression operator '{op}' in {{{expression}}}"
            )));
        }
        Some(_) => (None, expression),
        None => {
            return Err(GraphError::UrlTemplate(
                "empty template expression".to_string(),
            ));
        }
    };

    let mut out = String::new();
    let mut first = true;
    for raw_name in variables.split(',') {
        let (name, explode) = match raw_name.strip_suffix('*') {
            Some(name) => (name, true),
            None => (raw_name, false),
        };
        if name.is_empty() {
            return Err(GraphError::UrlTemplate(format!(
                "empty variable name in {{{expression}}}"
            )));
        }
        let Some(value) = parameters.get(name) else {
            continue;
        };
        if value.is_undefined() {
            continue;
        }

        match operator {
            Some('?') | Some('&') => {
                let items: Vec<String> = match (value, explode) {
                    (QueryValue::List(items), true) => items
                        .iter()
                        .map(|item| format!("{name}={}", encode_simple(item)))
                        .collect(),
                    _ => vec![format!("{name}={}", render_value(value, encode_simple))],
                };
                for item in items {
                    if first {
                        out.push(if operator == Some('?') { '?' } else { '&' });
                        first = false;
                    } else {
                        out.push('&');
                    }
                    out.push_str(&item);
                }
            }
            Some('+') => {
                if !first {
                    out.push(',');
                }
                out.push_str(&render_value(value, encode_reserved));
                first = false;
            }
            _ => {
                if !first {
                    out.push(',');
                }
                out.push_str(&render_value(value, encode_simple));
                first = false;
            }
        }
    }
    Ok(out)
}

/// Expands `template` with the given variables.
pub fn expand(template: &str, parameters: &BTreeMap<String, QueryValue>) -> GraphResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(GraphError::UrlTemplate(format!(
                "unterminated expression in template {template}"
            )));
        };
        out.push_str(&expand_expression(&after[..end], parameters)?);
        rest = &after[end + 1..];
    }
    if rest.contains('}') {
        return Err(GraphError::UrlTemplate(format!(
            "unmatched '}}' in template {template}"
        )));
    }
    out.push_str(rest);
    Ok(out)
}
