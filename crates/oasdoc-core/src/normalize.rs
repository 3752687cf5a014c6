//! Distributes path-level shared parameters into each operation.

use crate::parse::parameter::Parameter;
use crate::parse::spec::ApiDocument;

/// Fold every path item's shared parameter list into its operations.
///
/// Takes the document by value and returns the normalized copy; after this
/// pass no path item retains shared parameters. Operation-declared
/// parameters override same-named shared entries in place; operation-only
/// parameters keep their own order after the shared ones. Paths without
/// shared parameters are untouched.
pub fn normalize(mut doc: ApiDocument) -> ApiDocument {
    for (path, item) in doc.paths.iter_mut() {
        if item.parameters.is_empty() {
            continue;
        }
        let shared = std::mem::take(&mut item.parameters);
        log::debug!(
            "distributing {} shared parameter(s) across {} operation(s) of {}",
            shared.len(),
            item.operations.len(),
            path
        );
        for operation in item.operations.values_mut() {
            let own = std::mem::take(&mut operation.parameters);
            operation.parameters = merge_parameters(&shared, own);
        }
    }
    doc
}

fn merge_parameters(shared: &[Parameter], own: Vec<Parameter>) -> Vec<Parameter> {
    if own.is_empty() {
        return shared.to_vec();
    }
    let mut merged: Vec<Parameter> = shared.to_vec();
    for param in own {
        match merged.iter_mut().find(|p| p.name == param.name) {
            Some(slot) => *slot = param,
            None => merged.push(param),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parameter::ParameterLocation;

    fn param(name: &str, required: bool) -> Parameter {
        Parameter {
            name: name.to_string(),
            location: ParameterLocation::Query,
            description: None,
            required,
            param_type: None,
            schema: None,
        }
    }

    #[test]
    fn test_own_overrides_shared_by_name() {
        let shared = vec![param("limit", false), param("offset", false)];
        let own = vec![param("limit", true)];
        let merged = merge_parameters(&shared, own);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "limit");
        assert!(merged[0].required);
        assert_eq!(merged[1].name, "offset");
    }

    #[test]
    fn test_own_extras_appended_in_order() {
        let shared = vec![param("limit", false)];
        let own = vec![param("filter", false), param("sort", false)];
        let merged = merge_parameters(&shared, own);
        let names: Vec<&str> = merged.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["limit", "filter", "sort"]);
    }

    #[test]
    fn test_empty_own_takes_shared_unchanged() {
        let shared = vec![param("limit", false)];
        let merged = merge_parameters(&shared, Vec::new());
        assert_eq!(merged, shared);
    }
}
