pub mod anchor;
pub mod assemble;
pub mod config;
pub mod error;
pub mod normalize;
pub mod parse;

/// Abstract destination for the rendered document.
///
/// The assembler issues one sequential script of calls against this trait;
/// concrete backends (Markdown, Confluence wiki markup) own the markup
/// syntax. A sink is also the error channel: a conversion that fails before
/// emission signals exactly one `error` call and nothing else.
pub trait DocumentSink {
    fn document_start(&mut self);

    /// Explicit end-of-document signal. Emitted exactly once per successful
    /// conversion, after all content calls.
    fn document_end(&mut self);

    fn heading(&mut self, level: u8, text: &str);

    /// Emit a paragraph of body text.
    fn text(&mut self, body: &str);

    /// Emit a named jump target for internal cross-references.
    fn anchor(&mut self, id: &str);

    fn table_start(&mut self);
    fn table_header_row(&mut self, columns: &[&str]);
    fn table_row(&mut self, cells: &[&str]);
    fn table_end(&mut self);

    /// Build an inline-renderable hyperlink. Returns markup text suitable
    /// for embedding in a table cell.
    fn link(&self, label: &str, target: &str) -> String;

    /// Signal that the source document could not be parsed. No content
    /// calls precede or follow this signal within one conversion.
    fn error(&mut self, message: &str);

    /// Consume the sink and return the accumulated rendered output.
    fn into_output(self) -> String
    where
        Self: Sized;
}
