use super::HandoffMissing;
use crate::layout::Shell;
use crate::shared::document::set_document_title;
use crate::shared::history_state::decode_handoff;
use contracts::navigation::BuilderHandoff;
use leptos::prelude::*;

/// Destination of a direct-generation submission. The builder flow itself
/// lives elsewhere; this screen receives the handoff and confirms what it
/// is about to generate.
#[component]
pub fn BuilderPage() -> impl IntoView {
    set_document_title("SiteWeaver | Builder");

    let handoff: Option<BuilderHandoff> = decode_handoff();

    view! {
        <Shell>
            <section class="handoff">
                {match handoff {
                    Some(request) => {
                        view! {
                            <div class="handoff__card">
                                <h1 class="handoff__title">"Generating your website"</h1>
                                <p class="handoff__meta">
                                    "Model: "
                                    <strong>{request.selected_model.display_name()}</strong>
                                </p>
                                <blockquote class="handoff__request">
                                    {request.input_value}
                                </blockquote>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <HandoffMissing /> }.into_any(),
                }}
            </section>
        </Shell>
    }
}
