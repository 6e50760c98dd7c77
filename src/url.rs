use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use time::macros::format_description;
use time::UtcOffset;

use crate::param::{ParamValue, Params};
use crate::Error;

/// Everything except the characters left literal by standard URI-component
/// encoding, minus the characters allowed to appear unescaped in a query
/// string: `@`, `:`, `$`, `,`, `[` and `]`. Space is encoded here and turned
/// into `+` afterwards.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'@')
    .remove(b':')
    .remove(b'$')
    .remove(b',')
    .remove(b'[')
    .remove(b']');

pub(crate) trait Escape {
    fn escape(&self) -> String;
}

impl Escape for str {
    fn escape(&self) -> String {
        utf8_percent_encode(self, ENCODE_SET).to_string().replace("%20", "+")
    }
}

fn stringify(value: &ParamValue) -> Result<String, Error> {
    match value {
        ParamValue::String(v) => Ok(v.clone()),
        ParamValue::Integer(v) => Ok(v.to_string()),
        ParamValue::Float(v) => Ok(v.to_string()),
        ParamValue::Bool(v) => Ok(v.to_string()),
        ParamValue::Date(v) => Ok(v.to_offset(UtcOffset::UTC).format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))?),
        ParamValue::Object(v) => Ok(serde_json::to_string(v)?),
        // An array nested below the element level is not expanded; its
        // element forms are joined with commas.
        ParamValue::Array(values) => {
            let parts: Vec<String> = values.iter().map(stringify).collect::<Result<_, _>>()?;
            Ok(parts.join(","))
        }
    }
}

/// Appends `params` to `url` as a query string.
///
/// Keys are emitted in insertion order. Null-valued keys are skipped. An
/// array value gets a `[]` suffix on its key and one pair per element, in
/// array order. Dates become their UTC ISO-8601 form, objects their JSON
/// serialization, scalars their plain string form. Keys and values are
/// percent-encoded, except that `@`, `:`, `$`, `,`, `[` and `]` stay literal
/// and a space becomes `+`.
///
/// The URL's fragment is dropped when at least one pair is appended; if
/// nothing is appended the URL is returned untouched, fragment included.
/// Query parameters already present in `url` are preserved verbatim, and the
/// appended pairs join them with `&`.
pub fn build_url(url: &str, params: &Params) -> Result<String, Error> {
    if params.is_empty() {
        return Ok(url.to_string());
    }

    let mut parts = Vec::with_capacity(params.len());
    for (key, value) in params.iter() {
        let Some(value) = value else {
            continue;
        };
        match value {
            ParamValue::Array(values) => {
                let key = format!("{}[]", key);
                for element in values {
                    parts.push(format!("{}={}", key.escape(), stringify(element)?.escape()));
                }
            }
            _ => parts.push(format!("{}={}", key.escape(), stringify(value)?.escape())),
        }
    }

    if parts.is_empty() {
        return Ok(url.to_string());
    }
    let serialized = parts.join("&");
    tracing::trace!("serialized_params={}", serialized);

    let base = match url.find('#') {
        Some(mark) => &url[..mark],
        None => url,
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", base, separator, serialized))
}
