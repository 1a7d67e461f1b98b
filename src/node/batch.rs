//! Sequential execution of a pipeline run

use tracing::{info, warn};

use crate::core::client::ApiRequester;
use crate::core::errors::Result;
use crate::core::models::{FailureRecord, NodeInput, NodeOutput};
use crate::node::translator::execute_item;

/// What to do when an item fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Abort the run and return the item's error
    #[default]
    FailFast,
    /// Record the error as an output item and keep going
    ContinueOnFail,
}

impl FailureMode {
    pub fn from_continue_on_fail(continue_on_fail: bool) -> Self {
        if continue_on_fail {
            FailureMode::ContinueOnFail
        } else {
            FailureMode::FailFast
        }
    }
}

/// Process `items` one at a time in index order.
///
/// Returns one output per item, in input order. In fail-fast mode the first
/// error is returned alone; outputs of earlier items are discarded.
pub async fn execute_items<R>(
    requester: &R,
    items: &[NodeInput],
    mode: FailureMode,
) -> Result<Vec<NodeOutput>>
where
    R: ApiRequester + ?Sized,
{
    let mut outputs = Vec::with_capacity(items.len());
    let mut failed = 0;

    for (index, item) in items.iter().enumerate() {
        match execute_item(requester, index, item).await {
            Ok(result) => outputs.push(NodeOutput::Success(result)),
            Err(error) => match mode {
                FailureMode::FailFast => {
                    warn!("Item {} failed, aborting run: {}", index, error);
                    return Err(error);
                }
                FailureMode::ContinueOnFail => {
                    warn!("Item {} failed, continuing: {}", index, error);
                    failed += 1;
                    outputs.push(NodeOutput::Failure(FailureRecord {
                        error,
                        original_input: item.json.clone(),
                        source_item_index: index,
                    }));
                }
            },
        }
    }

    info!("Completed: {} processed, {} failed", outputs.len() - failed, failed);
    Ok(outputs)
}
