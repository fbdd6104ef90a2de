use live_view_store::ViewState;

/// Seconds between browser reloads.
pub const REFRESH_SECONDS: u32 = 1;
pub const PLACEHOLDER: &str = "No data yet.";

pub fn render_page(state: &ViewState, result_label: &str) -> String {
    let body = state
        .pretty_text()
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>OCR Live JSON</title>
  <style>
    body {{ font-family: Arial, sans-serif; background: #0f172a; color: #e2e8f0; margin: 0; padding: 1.5rem; }}
    .card {{ background: #1e293b; border-radius: 12px; padding: 1rem 1.25rem; box-shadow: 0 10px 30px rgba(0,0,0,0.35); }}
    pre {{ background: #0b1221; border-radius: 8px; padding: 1rem; overflow-x: auto; color: #cbd5e1; }}
  </style>
  <meta http-equiv="refresh" content="{refresh}" />
</head>
<body>
  <h1>OCR Live Result</h1>
  <p>This page reloads every second. Make sure <code>{label}</code> exists.</p>
  <div class="card">
    <pre>{body}</pre>
  </div>
</body>
</html>
"#,
        refresh = REFRESH_SECONDS,
        label = html_escape(result_label),
        body = html_escape(&body),
    )
}

/// Escapes text placed in element content. Quotes are left alone so JSON
/// keeps reading as JSON in the page source.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
