use crate::enums::generation_model::GenerationModel;
use serde::{Deserialize, Serialize};

/// Downstream screens reachable from the entry page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Builder,
    Chat,
}

impl Destination {
    /// Route path the navigation service resolves this destination to
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Builder => "/builder",
            Destination::Chat => "/chatmode",
        }
    }
}

/// Payload carried into the builder flow.
///
/// Serialized with camelCase keys, matching what the builder screen reads
/// back out of history state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderHandoff {
    pub input_value: String,
    pub selected_model: GenerationModel,
}

/// Payload carried into the chat flow.
///
/// Carries no model field: the conversational screen does not consume one,
/// so the selection stays behind on the entry page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHandoff {
    pub input_value: String,
}

/// One accepted submission, bound for a single downstream screen
#[derive(Debug, Clone, PartialEq)]
pub enum Handoff {
    Builder(BuilderHandoff),
    Chat(ChatHandoff),
}

impl Handoff {
    pub fn destination(&self) -> Destination {
        match self {
            Handoff::Builder(_) => Destination::Builder,
            Handoff::Chat(_) => Destination::Chat,
        }
    }
}
