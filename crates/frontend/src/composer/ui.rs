use super::navigator::{submit, use_handoff_navigator};
use super::state::create_state;
use super::view_model::present;
use crate::shared::components::ui::{Button, Textarea, Toggle};
use contracts::enums::generation_model::GenerationModel;
use leptos::prelude::*;

/// The mode-aware input form of the entry screen: request text, model
/// selection and the mode switch, with one submit action that hands off
/// to the matching downstream screen.
#[component]
pub fn PromptComposer() -> impl IntoView {
    let composer = create_state();
    let navigator = use_handoff_navigator();

    let vm = Signal::derive(move || present(&composer.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(&composer.get_untracked(), &navigator);
    };

    view! {
        <section class="composer">
            <form class="composer__form" on:submit=on_submit>
                <div class="composer__mode-row">
                    <h3 class="composer__section-title">"Mode Selection"</h3>
                    <div class="composer__mode-controls">
                        <Toggle
                            label=Signal::derive(move || vm.get().mode_label.to_string())
                            checked=Signal::derive(move || composer.get().direct_mode)
                            on_toggle=Callback::new(move |_| composer.update(|s| *s = s.toggled()))
                        />
                        <ModeInfo />
                    </div>
                </div>

                <div class="composer__models">
                    <div class="composer__models-header">
                        <p class="composer__models-title">"Select AI Model"</p>
                        <span class="composer__models-hint">{move || vm.get().model_hint}</span>
                    </div>
                    <div class="composer__model-grid">
                        {GenerationModel::all()
                            .into_iter()
                            .map(|model| {
                                let model_class = move || {
                                    if composer.get().model == model {
                                        "composer__model composer__model--selected"
                                    } else {
                                        "composer__model"
                                    }
                                };
                                view! {
                                    <button
                                        type="button"
                                        class=model_class
                                        on:click=move |_| {
                                            composer.update(|s| *s = s.with_model(model))
                                        }
                                    >
                                        {model.display_name()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="composer__input">
                    <span class="composer__mode-chip">{move || vm.get().mode_caption}</span>
                    <Textarea
                        value=Signal::derive(move || composer.get().input)
                        on_input=Callback::new(move |text: String| {
                            composer.update(|s| *s = s.with_input(text))
                        })
                        placeholder=Signal::derive(move || vm.get().placeholder.to_string())
                        class="composer__textarea"
                        id="composer-input"
                    />
                </div>

                <div class="composer__actions">
                    <Button
                        button_type="submit"
                        class="composer__submit"
                        disabled=Signal::derive(move || !vm.get().submit_enabled)
                    >
                        {move || vm.get().submit_label}
                    </Button>
                </div>
            </form>
        </section>
    }
}

/// Hover tooltip explaining the two modes. Static copy, no state.
#[component]
fn ModeInfo() -> impl IntoView {
    view! {
        <div class="mode-info">
            <span class="mode-info__icon">"i"</span>
            <div class="mode-info__tooltip">
                <strong class="mode-info__heading">"Mode Information:"</strong>
                <p>
                    <span class="mode-info__term mode-info__term--developer">
                        "Developer Mode:"
                    </span>
                    " Create websites directly from your description."
                </p>
                <p>
                    <span class="mode-info__term mode-info__term--chat">"Chat Mode:"</span>
                    " Ask questions and get AI assistance."
                </p>
            </div>
        </div>
    }
}
