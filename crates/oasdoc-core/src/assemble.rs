//! The document assembler: one deterministic, ordered script of sink calls
//! per normalized API document.

use crate::DocumentSink;
use crate::anchor;
use crate::config::{ConvertOptions, SourceFormat};
use crate::error::ParseError;
use crate::normalize;
use crate::parse;
use crate::parse::operation::{HttpMethod, Operation};
use crate::parse::schema::{SchemaDefinition, SchemaOrRef};
use crate::parse::spec::ApiDocument;

/// Parse, normalize, and emit a document through the sink.
///
/// On a parse failure the sink observes one error signal and no content
/// calls; partial documents are never produced.
pub fn convert_document<S: DocumentSink>(
    content: &str,
    format: SourceFormat,
    options: &ConvertOptions,
    sink: &mut S,
) -> Result<(), ParseError> {
    let parsed = match format {
        SourceFormat::Yaml => parse::from_yaml(content),
        SourceFormat::Json => parse::from_json(content),
    };
    let doc = match parsed {
        Ok(doc) => doc,
        Err(err) => {
            sink.error(&err.to_string());
            return Err(err);
        }
    };
    let doc = normalize::normalize(doc);
    assemble(&doc, options, sink);
    Ok(())
}

/// Walk a normalized document and emit the full sink call script: info
/// block, guides, operations (optionally preceded by a TOC table), and the
/// definitions appendix.
pub fn assemble<S: DocumentSink>(doc: &ApiDocument, options: &ConvertOptions, sink: &mut S) {
    log::debug!(
        "assembling document '{}' ({} path(s), {} definition(s))",
        doc.info.title,
        doc.paths.len(),
        doc.definitions.len()
    );

    sink.document_start();

    sink.heading(1, &doc.info.title);
    if let Some(ref description) = doc.info.description {
        sink.text(description);
    }

    sink.table_start();
    sink.table_header_row(&["Specification", "Value"]);
    sink.table_row(&["API Version", &doc.info.version]);
    sink.table_end();

    if !doc.documentation.is_empty() {
        sink.heading(2, "Guides");
        for guide in &doc.documentation {
            sink.anchor(&anchor::guide_anchor(&guide.title));
            sink.heading(3, &guide.title);
            sink.text(&guide.content);
        }
    }

    sink.heading(2, "Operations");

    if options.toc {
        emit_toc(doc, sink);
    }

    for (path, item) in &doc.paths {
        for (&method, operation) in &item.operations {
            emit_operation(sink, options, method, path, operation);
        }
    }

    sink.heading(2, "Definitions");
    for (name, definition) in &doc.definitions {
        emit_definition(sink, name, definition);
    }

    sink.document_end();
}

/// One TOC row per (method, path) pair, in document order, each linking to
/// the operation's detail anchor.
fn emit_toc<S: DocumentSink>(doc: &ApiDocument, sink: &mut S) {
    sink.table_start();
    sink.table_header_row(&["Resource Path", "Operation", "Description"]);
    for (path, item) in &doc.paths {
        for (&method, operation) in &item.operations {
            let label = format!("`{}`", method.as_upper());
            let target = format!("#{}", anchor::operation_anchor(method, path));
            let link = sink.link(&label, &target);
            sink.table_row(&[path, &link, operation.summary.as_deref().unwrap_or("")]);
        }
    }
    sink.table_end();
}

fn emit_operation<S: DocumentSink>(
    sink: &mut S,
    options: &ConvertOptions,
    method: HttpMethod,
    path: &str,
    operation: &Operation,
) {
    // Same sanitization as the TOC link target; this is the contract that
    // makes TOC links resolve.
    sink.anchor(&anchor::operation_anchor(method, path));

    let heading = match options.method_path {
        Some(ref render) => render(method, path),
        None => format!("`{} {}`", method.as_upper(), path),
    };
    sink.heading(3, &heading);

    if let Some(ref description) = operation.description {
        sink.text(description);
    }

    if !operation.parameters.is_empty() {
        sink.heading(4, "Parameters");
        sink.table_start();
        sink.table_header_row(&[
            "Param Name",
            "Param Type",
            "Data Type",
            "Description",
            "Required?",
        ]);
        for param in &operation.parameters {
            let data_type = type_cell(sink, param.schema.as_ref(), param.param_type.as_deref());
            sink.table_row(&[
                &param.name,
                param.location.as_str(),
                &data_type,
                param.description.as_deref().unwrap_or(""),
                anchor::yes(param.required),
            ]);
        }
        sink.table_end();
    }

    if !operation.responses.is_empty() {
        sink.heading(4, "Responses");
        sink.table_start();
        sink.table_header_row(&["Code", "Type", "Description"]);
        for (code, response) in &operation.responses {
            let response_type = type_cell(
                sink,
                response.schema.as_ref(),
                response.response_type.as_deref(),
            );
            sink.table_row(&[
                code,
                &response_type,
                response.description.as_deref().unwrap_or(""),
            ]);
        }
        sink.table_end();
    }
}

fn emit_definition<S: DocumentSink>(sink: &mut S, name: &str, definition: &SchemaDefinition) {
    sink.anchor(&anchor::anchor_id(name));
    sink.heading(3, name);

    sink.table_start();
    sink.table_header_row(&[
        "Field Name",
        "Field Type",
        "Description",
        "Required?",
        "Read Only?",
    ]);
    for (field_name, field) in &definition.properties {
        sink.table_row(&[
            field_name,
            field.field_type.as_deref().unwrap_or(""),
            field.description.as_deref().unwrap_or(""),
            anchor::yes(definition.required.iter().any(|r| r == field_name)),
            anchor::yes(field.read_only.unwrap_or(false)),
        ]);

        // Array fields referencing another definition get one extra row
        // linking to that definition.
        if let Some(ref_path) = field.items.as_ref().and_then(|i| i.ref_path.as_deref()) {
            let label = anchor::display_name(ref_path);
            let link = sink.link(label, &format!("#{}", anchor::anchor_id(label)));
            sink.table_row(&[" - Item", &link, "", "", ""]);
        }
    }
    sink.table_end();
}

/// Resolve a parameter or response to its type cell: an inline schema's
/// primitive type, a reference rendered as a link to the definition's
/// anchor, or the plain `type` field.
fn type_cell<S: DocumentSink>(
    sink: &S,
    schema: Option<&SchemaOrRef>,
    plain_type: Option<&str>,
) -> String {
    match schema {
        Some(SchemaOrRef::Inline(inline)) => match inline.schema_type {
            Some(ref schema_type) => schema_type.clone(),
            None => plain_type.unwrap_or("").to_string(),
        },
        Some(SchemaOrRef::Ref { ref_path }) => {
            let name = anchor::display_name(ref_path);
            sink.link(name, &format!("#{}", anchor::anchor_id(name)))
        }
        None => plain_type.unwrap_or("").to_string(),
    }
}
