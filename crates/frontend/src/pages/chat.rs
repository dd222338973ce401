use super::HandoffMissing;
use crate::layout::Shell;
use crate::shared::document::set_document_title;
use crate::shared::history_state::decode_handoff;
use contracts::navigation::ChatHandoff;
use leptos::prelude::*;

/// Destination of a conversational submission. Shows the opening question
/// the chat flow will pick up; no model rides along on this route.
#[component]
pub fn ChatPage() -> impl IntoView {
    set_document_title("SiteWeaver | Chat");

    let handoff: Option<ChatHandoff> = decode_handoff();

    view! {
        <Shell>
            <section class="handoff">
                {match handoff {
                    Some(request) => {
                        view! {
                            <div class="handoff__card">
                                <h1 class="handoff__title">"Starting your conversation"</h1>
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
