use contracts::enums::generation_model::GenerationModel;
use contracts::navigation::{BuilderHandoff, ChatHandoff, Handoff};
use leptos::prelude::*;

/// Transient state behind the prompt composer.
///
/// One immutable value: the request text, the chosen model and the mode
/// switch. Transitions return a fresh value and never touch the other two
/// fields. Lives only while the entry page is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerState {
    /// Free-text request, replaced on every keystroke
    pub input: String,
    /// Selected generation model; only consumed by the builder flow,
    /// but retained regardless of mode
    pub model: GenerationModel,
    /// `true` = direct code generation, `false` = conversational
    pub direct_mode: bool,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            input: String::new(),
            model: GenerationModel::default(),
            direct_mode: false,
        }
    }
}

impl ComposerState {
    pub fn with_input(&self, input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..self.clone()
        }
    }

    pub fn with_model(&self, model: GenerationModel) -> Self {
        Self {
            model,
            ..self.clone()
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            direct_mode: !self.direct_mode,
            ..self.clone()
        }
    }

    /// Whether a submission would be accepted. Drives the disabled state
    /// of the submit control.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// The submission decision. Blank input yields `None`: submission is
    /// silently rejected, with no error surfaced anywhere.
    pub fn decide_submission(&self) -> Option<Handoff> {
        if !self.can_submit() {
            return None;
        }
        let handoff = if self.direct_mode {
            Handoff::Builder(BuilderHandoff {
                input_value: self.input.clone(),
                selected_model: self.model,
            })
        } else {
            Handoff::Chat(ChatHandoff {
                input_value: self.input.clone(),
            })
        };
        Some(handoff)
    }
}

pub fn create_state() -> RwSignal<ComposerState> {
    RwSignal::new(ComposerState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::navigation::Destination;

    #[test]
    fn test_defaults() {
        let state = ComposerState::default();
        assert_eq!(state.input, "");
        assert_eq!(state.model, GenerationModel::Qwen3);
        assert!(!state.direct_mode);
    }

    #[test]
    fn test_transitions_leave_other_fields_alone() {
        let state = ComposerState::default()
            .with_input("Build me a blog")
            .with_model(GenerationModel::Mistral);

        let toggled = state.toggled();
        assert!(toggled.direct_mode);
        assert_eq!(toggled.input, "Build me a blog");
        assert_eq!(toggled.model, GenerationModel::Mistral);

        let retyped = toggled.with_input("Something else");
        assert!(retyped.direct_mode);
        assert_eq!(retyped.model, GenerationModel::Mistral);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let state = ComposerState::default().with_input("hello");
        assert_eq!(state.toggled().toggled(), state);
    }

    #[test]
    fn test_blank_input_rejects_submission() {
        for input in ["", "  ", "\t", " \n "] {
            for direct_mode in [false, true] {
                for model in GenerationModel::all() {
                    let state = ComposerState {
                        input: input.to_string(),
                        model,
                        direct_mode,
                    };
                    assert!(!state.can_submit());
                    assert_eq!(state.decide_submission(), None);
                }
            }
        }
    }

    #[test]
    fn test_direct_mode_submits_to_builder() {
        let state = ComposerState::default()
            .with_input("Build me a blog")
            .with_model(GenerationModel::Gemini)
            .toggled();

        let handoff = state.decide_submission().unwrap();
        assert_eq!(handoff.destination(), Destination::Builder);
        assert_eq!(
            handoff,
            Handoff::Builder(BuilderHandoff {
                input_value: "Build me a blog".to_string(),
                selected_model: GenerationModel::Gemini,
            })
        );
    }

    #[test]
    fn test_conversational_mode_submits_to_chat() {
        let state = ComposerState::default().with_input("What is a linked list?");

        let handoff = state.decide_submission().unwrap();
        assert_eq!(handoff.destination(), Destination::Chat);
        assert_eq!(
            handoff,
            Handoff::Chat(ChatHandoff {
                input_value: "What is a linked list?".to_string(),
            })
        );
    }

    #[test]
    fn test_latest_model_selection_wins() {
        let state = ComposerState::default()
            .with_input("Create a portfolio")
            .toggled()
            .with_model(GenerationModel::Llama3)
            .with_model(GenerationModel::Mistral);

        match state.decide_submission().unwrap() {
            Handoff::Builder(payload) => {
                assert_eq!(payload.selected_model, GenerationModel::Mistral)
            }
            other => panic!("expected builder handoff, got {other:?}"),
        }
    }

    #[test]
    fn test_model_survives_but_is_not_sent_in_chat_mode() {
        let state = ComposerState::default()
            .with_model(GenerationModel::Gemini)
            .with_input("explain closures");

        assert_eq!(state.model, GenerationModel::Gemini);
        match state.decide_submission().unwrap() {
            Handoff::Chat(payload) => assert_eq!(payload.input_value, "explain closures"),
            other => panic!("expected chat handoff, got {other:?}"),
        }
    }

    #[test]
    fn test_input_kept_verbatim() {
        // Leading and trailing whitespace passes the trim check but the
        // payload still carries the text exactly as typed.
        let state = ComposerState::default().with_input("  spaced out  ");
        match state.decide_submission().unwrap() {
            Handoff::Chat(payload) => assert_eq!(payload.input_value, "  spaced out  "),
            other => panic!("expected chat handoff, got {other:?}"),
        }
    }
}
