//! Markdown backend: renders the sink call script as GitHub-flavored
//! Markdown with `<a name>` anchors and pipe tables.

use oasdoc_core::DocumentSink;

/// Accumulates rendered Markdown. One sink per conversion.
#[derive(Debug, Default)]
pub struct MarkdownSink {
    out: String,
    error: Option<String>,
}

impl MarkdownSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered output accumulated so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    /// The error signal, if the conversion failed before emission.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Pipes inside a cell would break the table row.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl DocumentSink for MarkdownSink {
    fn document_start(&mut self) {}

    fn document_end(&mut self) {
        // Collapse the trailing blank line down to a single newline.
        while self.out.ends_with("\n\n") {
            self.out.pop();
        }
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn heading(&mut self, level: u8, text: &str) {
        self.out.push_str(&"#".repeat(level as usize));
        self.out.push(' ');
        self.out.push_str(text);
        self.out.push_str("\n\n");
    }

    fn text(&mut self, body: &str) {
        self.out.push_str(body);
        self.out.push_str("\n\n");
    }

    fn anchor(&mut self, id: &str) {
        self.out.push_str(&format!("<a name=\"{id}\"></a>\n\n"));
    }

    fn table_start(&mut self) {}

    fn table_header_row(&mut self, columns: &[&str]) {
        self.table_row(columns);
        self.out.push('|');
        for _ in columns {
            self.out.push_str("---|");
        }
        self.out.push('\n');
    }

    fn table_row(&mut self, cells: &[&str]) {
        self.out.push('|');
        for cell in cells {
            self.out.push(' ');
            self.out.push_str(&escape_cell(cell));
            self.out.push_str(" |");
        }
        self.out.push('\n');
    }

    fn table_end(&mut self) {
        self.out.push('\n');
    }

    fn link(&self, label: &str, target: &str) -> String {
        format!("[{label}]({target})")
    }

    fn error(&mut self, message: &str) {
        log::error!("conversion failed: {message}");
        self.error = Some(message.to_string());
    }

    fn into_output(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let mut sink = MarkdownSink::new();
        sink.heading(1, "Pet Store");
        sink.heading(4, "Parameters");
        insta::assert_snapshot!(sink.output(), @r"
        # Pet Store

        #### Parameters
        ");
    }

    #[test]
    fn test_link() {
        let sink = MarkdownSink::new();
        insta::assert_snapshot!(sink.link("Pet", "#Pet"), @"[Pet](#Pet)");
    }

    #[test]
    fn test_anchor() {
        let mut sink = MarkdownSink::new();
        sink.anchor("get-pets");
        insta::assert_snapshot!(sink.output(), @r#"<a name="get-pets"></a>"#);
    }

    #[test]
    fn test_table() {
        let mut sink = MarkdownSink::new();
        sink.table_start();
        sink.table_header_row(&["Specification", "Value"]);
        sink.table_row(&["API Version", "1.0"]);
        sink.table_end();
        assert_eq!(
            sink.output(),
            "| Specification | Value |\n|---|---|\n| API Version | 1.0 |\n\n"
        );
    }

    #[test]
    fn test_cell_pipes_are_escaped() {
        let mut sink = MarkdownSink::new();
        sink.table_row(&["a|b"]);
        assert_eq!(sink.output(), "| a\\|b |\n");
    }

    #[test]
    fn test_error_is_recorded() {
        let mut sink = MarkdownSink::new();
        sink.error("failed to parse YAML: boom");
        assert_eq!(sink.error_message(), Some("failed to parse YAML: boom"));
        assert!(sink.output().is_empty());
    }
}
