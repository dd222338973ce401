//! Prompt Composer - View Model
//!
//! Everything the markup shows is derived here as a pure function of the
//! composer state, so the derivation can be tested without rendering.

use super::state::ComposerState;

const PLACEHOLDER_DIRECT: &str = "Describe your website... (e.g., 'Create a personal portfolio \
     site with a dark theme, project showcase, and contact form')";
const PLACEHOLDER_CHAT: &str = "Enter your code or technical query... (e.g., 'Explain me about \
     linked list with its popular problems on leetcode')";

/// Derived presentation of the composer. No state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerPresentation {
    /// Placeholder shown in the request textarea
    pub placeholder: &'static str,
    /// Caption on the submit button
    pub submit_label: &'static str,
    /// Whether the submit control is enabled
    pub submit_enabled: bool,
    /// Caption next to the mode switch
    pub mode_label: &'static str,
    /// Indicator chip rendered over the textarea
    pub mode_caption: &'static str,
    /// Hint next to the model section header
    pub model_hint: &'static str,
}

pub fn present(state: &ComposerState) -> ComposerPresentation {
    if state.direct_mode {
        ComposerPresentation {
            placeholder: PLACEHOLDER_DIRECT,
            submit_label: "Generate Code",
            submit_enabled: state.can_submit(),
            mode_label: "Developer Mode",
            mode_caption: "Website Description Mode",
            model_hint: "Driving your code",
        }
    } else {
        ComposerPresentation {
            placeholder: PLACEHOLDER_CHAT,
            submit_label: "Send Message",
            submit_enabled: state.can_submit(),
            mode_label: "Chat Mode",
            mode_caption: "Chat & Query Mode",
            model_hint: "Driving your query",
        }
    }
}
