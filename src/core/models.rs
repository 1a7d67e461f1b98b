//! Core data models for the DeepL node

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::core::errors::{DeeplError, Result};

/// Resources exposed by the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Language,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Language => write!(f, "language"),
        }
    }
}

/// Operations available on the `language` resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageOperation {
    Translate,
}

impl fmt::Display for LanguageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageOperation::Translate => write!(f, "translate"),
        }
    }
}

/// Every resource/operation pair the node can execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOperation {
    Language(LanguageOperation),
}

impl NodeOperation {
    /// Resolve the host's `resource` and `operation` parameter values
    pub fn parse(resource: &str, operation: &str) -> Result<Self> {
        match (resource, operation) {
            ("language", "translate") => Ok(NodeOperation::Language(LanguageOperation::Translate)),
            _ => Err(DeeplError::UnsupportedOperation {
                resource: resource.to_string(),
                operation: operation.to_string(),
            }),
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            NodeOperation::Language(_) => Resource::Language,
        }
    }
}

impl fmt::Display for NodeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeOperation::Language(op) => write!(f, "{}.{}", self.resource(), op),
        }
    }
}

fn default_resource() -> String {
    Resource::Language.to_string()
}

fn default_operation() -> String {
    LanguageOperation::Translate.to_string()
}

/// Optional parameters grouped under "Additional Fields"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFields {
    #[serde(default, alias = "sourceLanguage", skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
}

/// Node parameters as resolved by the host for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemParameters {
    #[serde(default = "default_resource")]
    pub resource: String,
    #[serde(default = "default_operation")]
    pub operation: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, alias = "targetLanguage")]
    pub translate_to: String,
    #[serde(default)]
    pub additional_fields: AdditionalFields,
}

impl ItemParameters {
    /// Parameters for `language.translate`
    pub fn translate(text: impl Into<String>, translate_to: impl Into<String>) -> Self {
        Self {
            resource: default_resource(),
            operation: default_operation(),
            text: text.into(),
            translate_to: translate_to.into(),
            additional_fields: AdditionalFields::default(),
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.additional_fields.source_lang = Some(source_lang.into());
        self
    }

    /// Which resource/operation pair these parameters select
    pub fn operation(&self) -> Result<NodeOperation> {
        NodeOperation::parse(&self.resource, &self.operation)
    }
}

/// One pipeline item: its original JSON plus the parameters resolved for it
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInput {
    pub json: Value,
    pub parameters: ItemParameters,
}

impl NodeInput {
    pub fn new(json: Value, parameters: ItemParameters) -> Self {
        Self { json, parameters }
    }
}

/// Outbound `/translate` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.into(),
            source_lang: None,
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }

    /// Query string parameters in the order the API documents them
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("target_lang", self.target_lang.clone()),
            ("text", self.text.clone()),
        ];
        if let Some(source_lang) = &self.source_lang {
            query.push(("source_lang", source_lang.clone()));
        }
        query
    }
}

/// Body of a `/translate` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationResponse {
    /// `None` when the key is missing or `null`
    #[serde(default)]
    pub translations: Option<Vec<Value>>,
}

/// Host-side pairing of an output record with its input item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

fn serialize_paired_item<S: Serializer>(index: &usize, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    PairedItem { item: *index }.serialize(serializer)
}

/// Successful translation of one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    #[serde(rename = "json")]
    pub output_json: Value,
    #[serde(rename = "pairedItem", serialize_with = "serialize_paired_item")]
    pub source_item_index: usize,
}

/// Failed item captured in continue-on-fail mode.
///
/// Serialized with the original input under both `$json` and `json`, so
/// downstream stages still receive the item's data.
#[derive(Debug)]
pub struct FailureRecord {
    pub error: DeeplError,
    pub original_input: Value,
    pub source_item_index: usize,
}

impl Serialize for FailureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("$error", &self.error.to_string())?;
        map.serialize_entry("$json", &self.original_input)?;
        map.serialize_entry("json", &self.original_input)?;
        map.serialize_entry("pairedItem", &PairedItem { item: self.source_item_index })?;
        map.end()
    }
}

/// One record handed back to the host
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NodeOutput {
    Success(TranslationResult),
    Failure(FailureRecord),
}

impl NodeOutput {
    /// Index of the input item this record belongs to
    pub fn source_item_index(&self) -> usize {
        match self {
            NodeOutput::Success(result) => result.source_item_index,
            NodeOutput::Failure(record) => record.source_item_index,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, NodeOutput::Failure(_))
    }
}

/// Entry of the `/languages` catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    pub language: String,
    pub name: String,
}

/// Dropdown option for a language selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    #[serde(rename = "value")]
    pub code: String,
    #[serde(rename = "name")]
    pub display_name: String,
}

impl From<Language> for LanguageOption {
    fn from(language: Language) -> Self {
        Self {
            code: language.language,
            display_name: language.name,
        }
    }
}
