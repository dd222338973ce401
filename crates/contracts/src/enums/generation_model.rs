use serde::{Deserialize, Serialize};

/// Backend generation models offered on the entry screen.
///
/// The catalog is static: entries are never fetched or mutated, and the
/// wire code of each entry is what crosses route boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationModel {
    #[serde(rename = "qwen3")]
    Qwen3,
    #[serde(rename = "llama")]
    Llama3,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "mistral")]
    Mistral,
}

impl GenerationModel {
    /// Wire code of the model
    pub fn code(&self) -> &'static str {
        match self {
            GenerationModel::Qwen3 => "qwen3",
            GenerationModel::Llama3 => "llama",
            GenerationModel::Gemini => "gemini",
            GenerationModel::Mistral => "mistral",
        }
    }

    /// Human-readable name shown on the model buttons
    pub fn display_name(&self) -> &'static str {
        match self {
            GenerationModel::Qwen3 => "Qwen 3",
            GenerationModel::Llama3 => "Llama 3",
            GenerationModel::Gemini => "Gemini Pro",
            GenerationModel::Mistral => "Mistral",
        }
    }

    /// Full catalog, in the order the UI presents it
    pub fn all() -> Vec<GenerationModel> {
        vec![
            GenerationModel::Qwen3,
            GenerationModel::Llama3,
            GenerationModel::Gemini,
            GenerationModel::Mistral,
        ]
    }

    /// Parse from a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "qwen3" => Some(GenerationModel::Qwen3),
            "llama" => Some(GenerationModel::Llama3),
            "gemini" => Some(GenerationModel::Gemini),
            "mistral" => Some(GenerationModel::Mistral),
            _ => None,
        }
    }
}

impl Default for GenerationModel {
    fn default() -> Self {
        GenerationModel::Qwen3
    }
}
