//! Standalone HTML document wrapper for rendered fragments.

use std::fmt::Write;

use mdp_config::ExportConfig;
use mdp_engine::escape_html;

/// Stylesheet covering every element the engine emits.
const STYLESHEET: &str = r"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
        }
        h1, h2, h3, h4, h5, h6 { margin: 2rem 0 1rem 0; line-height: 1.3; }
        h1 { font-size: 2.5rem; border-bottom: 2px solid #eee; padding-bottom: 0.5rem; }
        h2 { font-size: 2rem; border-bottom: 1px solid #eee; padding-bottom: 0.25rem; }
        p { margin: 1rem 0; }
        a { color: #2563eb; text-decoration: none; }
        a:hover { text-decoration: underline; }
        ul, ol { margin: 1rem 0; padding-left: 2rem; }
        code {
            background-color: #f1f5f9;
            padding: 0.2rem 0.4rem;
            border-radius: 0.25rem;
            font-family: 'Consolas', 'Monaco', monospace;
            font-size: 0.9em;
        }
        pre {
            background-color: #f8fafc;
            border: 1px solid #e2e8f0;
            border-radius: 0.5rem;
            padding: 1rem;
            overflow-x: auto;
        }
        pre code { background: none; padding: 0; }
        blockquote { margin: 1rem 0; padding: 1rem; border-left: 4px solid #2563eb; background-color: #dbeafe; }
        hr { margin: 2rem 0; border: none; height: 1px; background-color: #e2e8f0; }
        table { width: 100%; border-collapse: collapse; border: 1px solid #e2e8f0; }
        th, td { padding: 0.75rem; text-align: left; border-bottom: 1px solid #e2e8f0; }
        th { background-color: #f8fafc; }
        img { max-width: 100%; height: auto; }
";

/// Wrap an HTML fragment in a complete HTML5 document.
///
/// Title and language come from the export configuration and are escaped.
pub(crate) fn standalone(fragment: &str, export: &ExportConfig) -> String {
    let mut out = String::with_capacity(fragment.len() + STYLESHEET.len() + 512);
    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, r#"<html lang="{}">"#, escape_html(&export.lang));
    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(out, "    <title>{}</title>", escape_html(&export.title));
    out.push_str("    <style>");
    out.push_str(STYLESHEET);
    out.push_str("    </style>\n");
    out.push_str("</head>\n<body>\n");
    out.push_str(fragment);
    out.push_str("\n</body>\n</html>\n");
    out
}
