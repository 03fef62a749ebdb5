//! Drives analysis and collection across a document set

use crate::analyzer::SchemaAnalyzer;
use crate::collector::{emission_list, plain_struct_list, TypeGraphCollector, TypeRegistry};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::loader::SchemaDocument;
use crate::node::SchemaNode;
use crate::types::JsonValue;
use serde::Serialize;
use tracing::{debug, info};

// ============================================================================
// Type Model
// ============================================================================

/// Merged result of a document set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeModel {
    /// Every distinct object type, dependency-ordered
    pub registry: TypeRegistry,
    /// Per-document analyzed trees, in input order
    pub documents: Vec<AnalyzedDocument>,
    /// Non-empty operation-name hints, in document order
    pub function_names: Vec<String>,
}

impl TypeModel {
    pub fn document(&self, name: &str) -> Option<&AnalyzedDocument> {
        self.documents.iter().find(|doc| doc.name == name)
    }
}

/// One document's contribution to the model
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyzedDocument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
}

impl AnalyzedDocument {
    fn roots(&self) -> impl Iterator<Item = &SchemaNode> {
        self.request.iter().chain(self.response.iter())
    }

    /// Object types of request then response, children first, each type
    /// once
    pub fn emission_list(&self) -> Vec<&SchemaNode> {
        emission_list(self.roots())
    }

    /// Emission list entries that need a plain-data companion
    pub fn plain_struct_list(&self) -> Vec<&SchemaNode> {
        plain_struct_list(self.roots())
    }
}

// ============================================================================
// Aggregator
// ============================================================================

/// Runs the analyzer and collector over documents in order, sharing one
/// registry
#[derive(Debug, Clone)]
pub struct DocumentSetAggregator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DocumentSetAggregator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build the type model for a document set
    ///
    /// Each call starts from an empty registry, so repeated runs over the
    /// same documents give the same model. The first failing document
    /// aborts the run.
    pub fn run(&self, documents: &[SchemaDocument]) -> Result<TypeModel> {
        let mut model = TypeModel::default();
        for (index, document) in documents.iter().enumerate() {
            let analyzed = self
                .process(document, &mut model.registry)
                .map_err(|e| Error::document(index, display_name(document, index), e))?;
            if let Some(function_name) = &analyzed.function_name {
                model.function_names.push(function_name.clone());
            }
            model.documents.push(analyzed);
        }
        info!(
            "{} documents, {} types",
            model.documents.len(),
            model.registry.len()
        );
        for type_name in model.registry.unresolved_references() {
            debug!("{type_name} is referenced but defined elsewhere");
        }
        Ok(model)
    }

    fn process(
        &self,
        document: &SchemaDocument,
        registry: &mut TypeRegistry,
    ) -> Result<AnalyzedDocument> {
        let before = registry.len();
        let request = self.analyze_side(document.request(), registry)?;
        let response = self.analyze_side(document.response(), registry)?;

        let marker = &self.config.errors.marker;
        let function_name = request
            .iter()
            .chain(response.iter())
            .find_map(|root| root.function_name(marker));

        info!(
            "document '{}': {} new types",
            document.name,
            registry.len() - before
        );
        if let Some(function_name) = &function_name {
            debug!("document '{}': operation {function_name}", document.name);
        }

        Ok(AnalyzedDocument {
            name: document.name.clone(),
            request,
            response,
            function_name,
        })
    }

    fn analyze_side(
        &self,
        value: Option<&JsonValue>,
        registry: &mut TypeRegistry,
    ) -> Result<Option<SchemaNode>> {
        let Some(value) = value else {
            return Ok(None);
        };
        let root = SchemaAnalyzer::new(self.config).analyze_root(value)?;
        TypeGraphCollector::new(self.config, registry).collect(&root)?;
        Ok(Some(root))
    }
}

fn display_name(document: &SchemaDocument, index: usize) -> String {
    if document.name.is_empty() {
        format!("#{index}")
    } else {
        document.name.clone()
    }
}
