//! Confluence backend: renders the sink call script as Confluence wiki
//! markup (`hN.` headings, `{anchor}` macros, `||`-delimited table headers).

use oasdoc_core::DocumentSink;

/// Accumulates rendered wiki markup. One sink per conversion.
#[derive(Debug, Default)]
pub struct ConfluenceSink {
    out: String,
    error: Option<String>,
}

impl ConfluenceSink {
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

    fn push_row(&mut self, cells: &[&str], delimiter: &str) {
        self.out.push_str(delimiter);
        for cell in cells {
            self.out.push(' ');
            // An empty cell would otherwise collapse the column.
            if cell.is_empty() {
                self.out.push(' ');
            } else {
                self.out.push_str(cell);
            }
            self.out.push(' ');
            self.out.push_str(delimiter);
        }
        self.out.push('\n');
    }
}

impl DocumentSink for ConfluenceSink {
    fn document_start(&mut self) {}

    fn document_end(&mut self) {
        while self.out.ends_with("\n\n") {
            self.out.pop();
        }
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn heading(&mut self, level: u8, text: &str) {
        self.out.push_str(&format!("h{level}. {text}\n\n"));
    }

    fn text(&mut self, body: &str) {
        self.out.push_str(body);
        self.out.push_str("\n\n");
    }

    fn anchor(&mut self, id: &str) {
        self.out.push_str(&format!("{{anchor:{id}}}\n\n"));
    }

    fn table_start(&mut self) {}

    fn table_header_row(&mut self, columns: &[&str]) {
        self.push_row(columns, "||");
    }

    fn table_row(&mut self, cells: &[&str]) {
        self.push_row(cells, "|");
    }

    fn table_end(&mut self) {
        self.out.push('\n');
    }

    fn link(&self, label: &str, target: &str) -> String {
        format!("[{label}|{target}]")
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
    fn test_heading() {
        let mut sink = ConfluenceSink::new();
        sink.heading(2, "Operations");
        insta::assert_snapshot!(sink.output(), @"h2. Operations");
    }

    #[test]
    fn test_anchor() {
        let mut sink = ConfluenceSink::new();
        sink.anchor("get-pets");
        insta::assert_snapshot!(sink.output(), @"{anchor:get-pets}");
    }

    #[test]
    fn test_link() {
        let sink = ConfluenceSink::new();
        insta::assert_snapshot!(sink.link("Pet", "#Pet"), @"[Pet|#Pet]");
    }

    #[test]
    fn test_table() {
        let mut sink = ConfluenceSink::new();
        sink.table_start();
        sink.table_header_row(&["Specification", "Value"]);
        sink.table_row(&["API Version", "1.0"]);
        sink.table_end();
        assert_eq!(
            sink.output(),
            "|| Specification || Value ||\n| API Version | 1.0 |\n\n"
        );
    }

    #[test]
    fn test_empty_cells_keep_their_column() {
        let mut sink = ConfluenceSink::new();
        sink.table_row(&["200", "", "ok"]);
        assert_eq!(sink.output(), "| 200 |   | ok |\n");
    }

    #[test]
    fn test_error_is_recorded() {
        let mut sink = ConfluenceSink::new();
        sink.error("failed to parse JSON: boom");
        assert_eq!(sink.error_message(), Some("failed to parse JSON: boom"));
        assert!(sink.output().is_empty());
    }
}
