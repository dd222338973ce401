use leptos::prelude::*;

/// Toggle switch component. The whole control is one click target; the
/// label text reflects the current position.
#[component]
pub fn Toggle(
    /// Label text shown next to the switch (reactive)
    #[prop(into)]
    label: Signal<String>,
    /// Switch position
    #[prop(into)]
    checked: Signal<bool>,
    /// Toggle event handler
    #[prop(optional)]
    on_toggle: Option<Callback<()>>,
) -> impl IntoView {
    let label_class = move || {
        if checked.get() {
            "toggle__label toggle__label--active"
        } else {
            "toggle__label"
        }
    };
    let track_class = move || {
        if checked.get() {
            "toggle__track toggle__track--on"
        } else {
            "toggle__track"
        }
    };
    let thumb_class = move || {
        if checked.get() {
            "toggle__thumb toggle__thumb--on"
        } else {
            "toggle__thumb"
        }
    };

    view! {
        <div
            class="toggle"
            role="switch"
            aria-checked=move || checked.get().to_string()
            on:click=move |_| {
                if let Some(handler) = on_toggle {
                    handler.run(());
                }
            }
        >
            <span class=label_class>{label}</span>
            <span class=track_class>
                <span class=thumb_class></span>
            </span>
        </div>
    }
}
