//! CLI command definitions and handlers

use clap::Subcommand;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::client::ApiRequester;
use crate::core::models::{ItemParameters, NodeInput};
use crate::node::description::node_description;
use crate::node::DeeplNode;

/// Commands for the DeepL node
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single text or a JSON array of items
    Translate {
        /// Target language code, e.g. DE or EN-GB
        #[arg(short, long)]
        to: String,

        /// Source language code (auto-detect if not specified)
        #[arg(long)]
        from: Option<String>,

        /// Text to translate
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        text: Option<String>,

        /// JSON file holding an array of items
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Item field holding the text to translate
        #[arg(long, default_value = "text")]
        text_field: String,

        /// Emit an error record for failed items instead of aborting
        #[arg(long)]
        continue_on_fail: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported target languages
    Languages,

    /// Print the node description
    Describe,
}

/// Options for the translate command
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub to: String,
    pub from: Option<String>,
    pub text: Option<String>,
    pub input: Option<PathBuf>,
    pub text_field: String,
    pub continue_on_fail: bool,
    pub output: Option<PathBuf>,
}

/// Resolve node parameters for each item, reading the text from `text_field`.
///
/// Items without a string at `text_field` get an empty text and fail at execution.
pub fn items_from_json(
    values: Vec<Value>,
    text_field: &str,
    to: &str,
    from: Option<&str>,
) -> Vec<NodeInput> {
    values
        .into_iter()
        .map(|json| {
            let text = json
                .get(text_field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let mut parameters = ItemParameters::translate(text, to);
            if let Some(from) = from {
                parameters = parameters.with_source_lang(from);
            }
            NodeInput::new(json, parameters)
        })
        .collect()
}

fn read_items(path: &Path) -> anyhow::Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    match value {
        Value::Array(items) => Ok(items),
        other => Ok(vec![other]),
    }
}

fn write_json(value: &impl serde::Serialize, output: Option<&Path>) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("Output written to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Handle translate command
pub async fn handle_translate<R: ApiRequester>(
    node: &DeeplNode<R>,
    options: TranslateOptions,
) -> anyhow::Result<()> {
    let values = match (&options.text, &options.input) {
        (Some(text), _) => {
            let mut item = serde_json::Map::new();
            item.insert(options.text_field.clone(), Value::String(text.clone()));
            vec![Value::Object(item)]
        }
        (None, Some(path)) => read_items(path)?,
        (None, None) => anyhow::bail!("Either --text or --input is required"),
    };

    let items = items_from_json(values, &options.text_field, &options.to, options.from.as_deref());

    info!("Translating {} item(s) to {}", items.len(), options.to);
    let outputs = node.execute(&items, options.continue_on_fail).await?;

    write_json(&outputs, options.output.as_deref())
}

/// Handle languages command
pub async fn handle_languages<R: ApiRequester>(node: &DeeplNode<R>) -> anyhow::Result<()> {
    let languages = node.get_languages().await?;

    for language in &languages {
        println!("{:<8} {}", language.code, language.display_name);
    }

    Ok(())
}

/// Handle describe command
pub fn handle_describe() -> anyhow::Result<()> {
    write_json(&node_description(), None)
}
