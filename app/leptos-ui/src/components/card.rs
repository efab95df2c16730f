use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use uk_core::card::{self, CardStyle};

/// Bordered container with optional title and footer regions.
///
/// `hover` adds the elevation affordance; `on_click` makes the whole card
/// activatable by click, Enter or Space. The two are independent.
#[component]
pub fn Card(
    #[prop(optional)] children: Option<Children>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] footer: Option<String>,
    #[prop(optional)] hover: bool,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let activatable = on_click.is_some();
    let container_class = card::container_class(&CardStyle {
        hover,
        activatable,
        class: &class,
    });
    let header = card::region(title.as_ref()).into_option().cloned();
    let footer = card::region(footer.as_ref()).into_option().cloned();

    let activate = move || {
        if let Some(cb) = on_click {
            cb.run(());
        }
    };
    // Keys pressed inside focusable children bubble here; leave those alone.
    let on_keydown = move |ev: KeyboardEvent| {
        if !activatable || ev.target() != ev.current_target() {
            return;
        }
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            activate();
        }
    };

    view! {
        <div
            class=container_class
            role=activatable.then_some("button")
            tabindex=activatable.then_some("0")
            on:click=move |_| activate()
            on:keydown=on_keydown
        >
            {header.map(|title| view! { <div class=card::HEADER data-region="header">{title}</div> })}
            <div class=card::BODY data-region="body">{children.map(|children| children())}</div>
            {footer.map(|footer| view! { <div class=card::FOOTER data-region="footer">{footer}</div> })}
        </div>
    }
}
