//! HTML views for the prediction front-end.
//!
//! One page serves the whole flow: the input form is always present, and a
//! result or error block renders under it when there is one. The markup is
//! small enough to build with plain string assembly; every interpolated
//! value goes through `escape`.

use crate::orchestrator::Recommendation;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>ReelOracle</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
    h1 { font-size: 1.6rem; }
    form { display: flex; gap: 0.5rem; margin: 1.5rem 0; }
    input[type="text"] { flex: 1; padding: 0.4rem; }
    .error { background: #fdecea; border: 1px solid #f5c6cb; padding: 0.75rem 1rem; border-radius: 4px; }
    .result { background: #f0f7f0; border: 1px solid #c6e2c6; padding: 0.75rem 1rem; border-radius: 4px; }
    dt { font-weight: 600; }
    dd { margin: 0 0 0.5rem 0; }
  </style>
</head>
<body>
  <h1>ReelOracle</h1>
  <p>Type a hero or a genre and get a predicted movie.</p>
  <form method="post" action="/recommend">
    <select name="choice">
      <option value="Hero">Hero</option>
      <option value="Genre">Genre</option>
    </select>
    <input type="text" name="query" placeholder="Iron Man or Action" autofocus>
    <button type="submit">Predict</button>
  </form>
"#;

const PAGE_FOOT: &str = r#"</body>
</html>
"#;

/// The landing page: just the form
pub fn index_page() -> String {
    render(None, None)
}

/// The form plus a populated result block
pub fn result_page(recommendation: &Recommendation) -> String {
    render(None, Some(recommendation))
}

/// The form plus an error block
pub fn error_page(message: &str) -> String {
    render(Some(message), None)
}

fn render(error: Option<&str>, result: Option<&Recommendation>) -> String {
    let mut page = String::with_capacity(PAGE_HEAD.len() + PAGE_FOOT.len() + 512);
    page.push_str(PAGE_HEAD);

    if let Some(message) = error {
        page.push_str("  <section class=\"error\"><p>");
        page.push_str(&escape(message));
        page.push_str("</p></section>\n");
    }
    if let Some(recommendation) = result {
        push_result(&mut page, recommendation);
    }

    page.push_str(PAGE_FOOT);
    page
}

fn push_result(page: &mut String, recommendation: &Recommendation) {
    page.push_str("  <section class=\"result\">\n    <h2>");
    page.push_str(&escape(&recommendation.movie));
    page.push_str("</h2>\n    <dl>\n");

    if let Some(budget) = recommendation.budget {
        page.push_str(&format!("      <dt>Budget</dt><dd>${:.0}</dd>\n", budget));
    }
    if let Some(revenue) = recommendation.revenue {
        page.push_str(&format!("      <dt>Revenue</dt><dd>${:.0}</dd>\n", revenue));
    }
    if let Some(vote_count) = recommendation.vote_count {
        page.push_str(&format!(
            "      <dt>Vote count</dt><dd>{:.0}</dd>\n",
            vote_count
        ));
    }
    if let Some(runtime) = recommendation.runtime {
        page.push_str(&format!(
            "      <dt>Runtime</dt><dd>{:.0} min</dd>\n",
            runtime
        ));
    }
    if let Some(actor) = &recommendation.actor {
        page.push_str("      <dt>Lead actor</dt><dd>");
        page.push_str(&escape(actor));
        page.push_str("</dd>\n");
    }

    page.push_str("    </dl>\n  </section>\n");
}

/// Escape text for interpolation into HTML
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
