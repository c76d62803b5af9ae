use super::scorer::ScoreResult;

/// Escapes a string for interpolation into HTML body text or a quoted
/// attribute value. Caller-supplied URLs are never echoed verbatim.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub(crate) fn render_home(total_checks: u64) -> String {
    format!(
        "<h2>&#128269; CheckLink</h2>\n\
         <form action=\"/check\">\n\
           <input name=\"u\" placeholder=\"Paste a link here\">\n\
           <button>Check</button>\n\
         </form>\n\
         <p>Total checks: {total_checks}</p>\n"
    )
}

pub(crate) fn render_result(url: &str, result: &ScoreResult) -> String {
    let reasons: String = if result.reasons.is_empty() {
        "<li>no suspicious elements found</li>".to_string()
    } else {
        result
            .reasons
            .iter()
            .map(|reason| format!("<li>{}</li>", escape_html(reason)))
            .collect()
    };

    let escaped_url = escape_html(url);
    format!(
        "<h2 style=\"color: {color}\">{label} ({score}/100)</h2>\n\
         <ul>{reasons}</ul>\n\
         <p><a href=\"{escaped_url}\">Continue to {escaped_url}</a></p>\n\
         <p><a href=\"/\">New check</a></p>\n",
        color = result.verdict.color(),
        label = result.verdict.label(),
        score = result.score,
    )
}
