//! Blockquote extraction.

/// Line prefix that opens or continues a quote.
const QUOTE_PREFIX: &str = "> ";

/// Collapse runs of `> ` lines into single `<blockquote>` elements.
///
/// Quoted lines are joined with `<br>`. Any other line, blank lines
/// included, ends the run and passes through unchanged. Quotes do not nest.
pub(crate) fn process(text: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut quote: Option<Vec<&str>> = None;

    for line in text.split('\n') {
        if let Some(content) = line.strip_prefix(QUOTE_PREFIX) {
            quote.get_or_insert_with(Vec::new).push(content);
        } else {
            if let Some(lines) = quote.take() {
                output.push(render(&lines));
            }
            output.push(line.to_owned());
        }
    }

    if let Some(lines) = quote.take() {
        output.push(render(&lines));
    }

    output.join("\n")
}

fn render(lines: &[&str]) -> String {
    format!("<blockquote>{}</blockquote>", lines.join("<br>"))
}
