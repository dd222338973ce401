use super::state::ComposerState;
use contracts::navigation::Handoff;
use leptos_router::{hooks::use_navigate, location::State, NavigateOptions};

/// Capability seam for the navigation side effect.
///
/// The submission decision itself is pure; this trait is the only thing
/// standing between it and the router, so tests can swap in a recorder.
pub trait HandoffNavigator {
    fn navigate_to(&self, handoff: Handoff);
}

/// Production navigator backed by the router history. The payload rides
/// along as history state and is read back by the destination page.
pub struct RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    navigate: F,
}

/// Must be called under a `<Router>`, like any router hook.
pub fn use_handoff_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions)> {
    RouterNavigator {
        navigate: use_navigate(),
    }
}

impl<F> HandoffNavigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate_to(&self, handoff: Handoff) {
        let encoded = match &handoff {
            Handoff::Builder(payload) => serde_wasm_bindgen::to_value(payload),
            Handoff::Chat(payload) => serde_wasm_bindgen::to_value(payload),
        };
        let state = match encoded {
            Ok(value) => State::new(Some(value)),
            Err(err) => {
                log::error!("handoff payload did not encode: {err}");
                State::new(None)
            }
        };

        let path = handoff.destination().path();
        leptos::logging::log!("navigate: {}", path);
        (self.navigate)(
            path,
            NavigateOptions {
                state,
                ..Default::default()
            },
        );
    }
}

/// The submission flow: decide, then navigate once. Blank input means no
/// navigation and no feedback. The disabled submit button already guards
/// this path; the check here stays regardless.
pub fn submit(state: &ComposerState, navigator: &dyn HandoffNavigator) {
    if let Some(handoff) = state.decide_submission() {
        navigator.navigate_to(handoff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::generation_model::GenerationModel;
    use contracts::navigation::Destination;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        sent: RefCell<Vec<Handoff>>,
    }

    impl HandoffNavigator for RecordingNavigator {
        fn navigate_to(&self, handoff: Handoff) {
            self.sent.borrow_mut().push(handoff);
        }
    }

    #[test]
    fn test_blank_input_never_navigates() {
        let navigator = RecordingNavigator::default();
        for direct_mode in [false, true] {
            for model in GenerationModel::all() {
                let state = ComposerState {
                    input: "  ".to_string(),
                    model,
                    direct_mode,
                };
                submit(&state, &navigator);
            }
        }
        assert!(navigator.sent.borrow().is_empty());
    }

    #[test]
    fn test_submit_navigates_exactly_once() {
        let navigator = RecordingNavigator::default();
        let state = ComposerState::default().with_input("Build me a blog").toggled();

        submit(&state, &navigator);

        let sent = navigator.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].destination(), Destination::Builder);
    }

    #[test]
    fn test_submit_carries_current_selection() {
        let navigator = RecordingNavigator::default();
        let state = ComposerState::default()
            .with_input("Create a landing page")
            .with_model(GenerationModel::Gemini)
            .toggled();

        submit(&state, &navigator);

        let sent = navigator.sent.borrow();
        match sent.first() {
            Some(Handoff::Builder(payload)) => {
                assert_eq!(payload.input_value, "Create a landing page");
                assert_eq!(payload.selected_model, GenerationModel::Gemini);
            }
            other => panic!("expected builder handoff, got {other:?}"),
        }
    }

    #[test]
    fn test_conversational_submit_goes_to_chat() {
        let navigator = RecordingNavigator::default();
        let state = ComposerState::default().with_input("What is a linked list?");

        submit(&state, &navigator);

        let sent = navigator.sent.borrow();
        match sent.first() {
            Some(Handoff::Chat(payload)) => {
                assert_eq!(payload.input_value, "What is a linked list?");
            }
            other => panic!("expected chat handoff, got {other:?}"),
        }
    }
}
