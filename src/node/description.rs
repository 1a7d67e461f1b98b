//! Static UI metadata describing the node to the host

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::core::models::{LanguageOperation, Resource};

/// Name of the option loader that fills language dropdowns
pub const LOAD_LANGUAGES_METHOD: &str = "getLanguages";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub group: Vec<&'static str>,
    pub version: u32,
    pub description: &'static str,
    pub subtitle: &'static str,
    pub defaults: NodeDefaults,
    pub inputs: Vec<&'static str>,
    pub outputs: Vec<&'static str>,
    pub credentials: Vec<CredentialRef>,
    pub properties: Vec<NodeProperty>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeDefaults {
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CredentialRef {
    pub name: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Options,
    String,
    Collection,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_data_expression: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_options: Option<TypeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PropertyOptions>,
}

impl NodeProperty {
    fn new(display_name: &'static str, name: &'static str, kind: PropertyType, default: Value) -> Self {
        Self {
            display_name,
            name,
            kind,
            default,
            description: None,
            placeholder: None,
            required: false,
            no_data_expression: false,
            type_options: None,
            display_options: None,
            options: None,
        }
    }

    fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn load_options(mut self, method: &'static str) -> Self {
        self.type_options = Some(TypeOptions {
            load_options_method: method,
        });
        self
    }

    /// Only show this property for the translate operation
    fn for_translate(mut self) -> Self {
        let mut show = BTreeMap::new();
        show.insert("resource", vec![Resource::Language.to_string()]);
        show.insert("operation", vec![LanguageOperation::Translate.to_string()]);
        self.display_options = Some(DisplayOptions { show });
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOptions {
    pub load_options_method: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisplayOptions {
    pub show: BTreeMap<&'static str, Vec<String>>,
}

/// Dropdown choices, or the nested fields of a collection
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PropertyOptions {
    Choices(Vec<PropertyOption>),
    Fields(Vec<NodeProperty>),
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyOption {
    pub name: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// The node's full description
pub fn node_description() -> NodeDescription {
    NodeDescription {
        display_name: "DeepL",
        name: "deepL",
        icon: "file:deepl.svg",
        group: vec!["input", "output"],
        version: 1,
        description: "Translate data using DeepL",
        subtitle: "={{$parameter[\"operation\"] + \": \" + $parameter[\"resource\"]}}",
        defaults: NodeDefaults { name: "DeepL" },
        inputs: vec!["main"],
        outputs: vec!["main"],
        credentials: vec![CredentialRef {
            name: "deepLApi",
            required: true,
        }],
        properties: properties(),
    }
}

fn properties() -> Vec<NodeProperty> {
    let mut resource = NodeProperty::new(
        "Resource",
        "resource",
        PropertyType::Options,
        json!(Resource::Language.to_string()),
    );
    resource.no_data_expression = true;
    resource.options = Some(PropertyOptions::Choices(vec![PropertyOption {
        name: "Language",
        value: Resource::Language.to_string(),
        description: None,
    }]));

    let mut operation = NodeProperty::new(
        "Operation",
        "operation",
        PropertyType::Options,
        json!(LanguageOperation::Translate.to_string()),
    );
    operation.no_data_expression = true;
    let mut show = BTreeMap::new();
    show.insert("resource", vec![Resource::Language.to_string()]);
    operation.display_options = Some(DisplayOptions { show });
    operation.options = Some(PropertyOptions::Choices(vec![PropertyOption {
        name: "Translate",
        value: LanguageOperation::Translate.to_string(),
        description: Some("Translate data"),
    }]));

    let mut text = NodeProperty::new("Text", "text", PropertyType::String, json!(""))
        .describe("Input text to translate")
        .required()
        .for_translate();
    text.placeholder = Some("Text to translate");

    let translate_to = NodeProperty::new("Target Language", "translateTo", PropertyType::Options, json!(""))
        .describe("Language to translate to")
        .required()
        .load_options(LOAD_LANGUAGES_METHOD)
        .for_translate();

    let source_lang = NodeProperty::new("Source Language", "sourceLang", PropertyType::Options, json!(""))
        .describe("Language to translate from")
        .load_options(LOAD_LANGUAGES_METHOD);

    let mut additional_fields = NodeProperty::new(
        "Additional Fields",
        "additionalFields",
        PropertyType::Collection,
        json!({}),
    )
    .for_translate();
    additional_fields.placeholder = Some("Add Field");
    additional_fields.options = Some(PropertyOptions::Fields(vec![source_lang]));

    vec![resource, operation, text, translate_to, additional_fields]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_order() {
        let names: Vec<&str> = node_description().properties.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["resource", "operation", "text", "translateTo", "additionalFields"]);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(node_description()).unwrap();

        assert_eq!(value["displayName"], "DeepL");
        assert_eq!(value["credentials"][0]["name"], "deepLApi");

        let resource = &value["properties"][0];
        assert_eq!(resource["type"], "options");
        assert_eq!(resource["noDataExpression"], true);
        assert_eq!(resource["options"][0]["value"], "language");

        let translate_to = &value["properties"][3];
        assert_eq!(translate_to["required"], true);
        assert_eq!(translate_to["typeOptions"]["loadOptionsMethod"], "getLanguages");
        assert_eq!(translate_to["displayOptions"]["show"]["operation"][0], "translate");

        let source_lang = &value["properties"][4]["options"][0];
        assert_eq!(source_lang["name"], "sourceLang");
        assert!(source_lang.get("required").is_none());
    }

    #[test]
    fn test_defaults_select_supported_operation() {
        use crate::core::models::NodeOperation;

        let description = node_description();
        let default_of = |name: &str| {
            description
                .properties
                .iter()
                .find(|p| p.name == name)
                .and_then(|p| p.default.as_str())
                .unwrap()
                .to_string()
        };
        assert!(NodeOperation::parse(&default_of("resource"), &default_of("operation")).is_ok());
    }
}
