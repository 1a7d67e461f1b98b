//! The DeepL node: description, language lookup and item execution

pub mod batch;
pub mod description;
pub mod languages;
pub mod translator;

use crate::core::client::ApiRequester;
use crate::core::errors::Result;
use crate::core::models::{LanguageOption, NodeInput, NodeOutput};

use batch::FailureMode;

/// DeepL node bound to a request executor
#[derive(Debug, Clone)]
pub struct DeeplNode<R> {
    requester: R,
}

impl<R: ApiRequester> DeeplNode<R> {
    pub fn new(requester: R) -> Self {
        Self { requester }
    }

    /// Options for the language dropdowns
    pub async fn get_languages(&self) -> Result<Vec<LanguageOption>> {
        languages::get_supported_languages(&self.requester).await
    }

    /// Execute one pipeline run over `items`
    pub async fn execute(&self, items: &[NodeInput], continue_on_fail: bool) -> Result<Vec<NodeOutput>> {
        let mode = FailureMode::from_continue_on_fail(continue_on_fail);
        batch::execute_items(&self.requester, items, mode).await
    }
}
