//! Flat list extraction.
//!
//! Lines are classified after trimming, so indented items join the same
//! flat list. Item content is emitted as-is; inline markup inside it is
//! handled later by the inline rules.

/// Kind of list a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    /// `-`, `*` or `+` followed by a space.
    Unordered,
    /// One or more ASCII digits, `.` and a space.
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// List run being accumulated.
struct OpenList {
    kind: ListKind,
    items: String,
}

impl OpenList {
    fn new(kind: ListKind) -> Self {
        Self {
            kind,
            items: String::new(),
        }
    }

    fn push(&mut self, content: &str) {
        self.items.push_str("<li>");
        self.items.push_str(content);
        self.items.push_str("</li>");
    }

    fn render(self) -> String {
        let tag = self.kind.tag();
        format!("<{tag}>{}</{tag}>", self.items)
    }
}

/// Classify a trimmed line, returning its list kind and item content.
fn classify(line: &str) -> Option<(ListKind, &str)> {
    if let Some(rest) = line.strip_prefix(['-', '*', '+'])
        && let Some(content) = rest.strip_prefix(' ')
    {
        return Some((ListKind::Unordered, content));
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0
        && let Some(content) = line[digits..].strip_prefix(". ")
    {
        return Some((ListKind::Ordered, content));
    }

    None
}

/// Collapse runs of list item lines into `<ul>` / `<ol>` elements.
///
/// A change of list kind closes the open list and starts a new one.
/// Any non-item line closes the open list and passes through unchanged.
pub(crate) fn process(text: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut open: Option<OpenList> = None;

    for line in text.split('\n') {
        if let Some((kind, content)) = classify(line.trim()) {
            if let Some(list) = open.take_if(|list| list.kind != kind) {
                output.push(list.render());
            }
            let list = open.get_or_insert_with(|| OpenList::new(kind));
            list.push(content);
        } else {
            if let Some(list) = open.take() {
                output.push(list.render());
            }
            output.push(line.to_owned());
        }
    }

    if let Some(list) = open.take() {
        output.push(list.render());
    }

    output.join("\n")
}
