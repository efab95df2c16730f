use leptos::prelude::*;
use uk_core::skeleton::{self, SkeletonConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Skeleton loading placeholder: `count` pulsing blocks in a spaced column.
///
/// Each block is keyed by its index so re-renders with a different `count`
/// only add or drop the tail.
#[component]
pub fn Skeleton(
    #[prop(into, default = DEFAULT_WIDTH.to_string())] width: String,
    #[prop(into, default = DEFAULT_HEIGHT.to_string())] height: String,
    #[prop(default = 1)] count: usize,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let config = SkeletonConfig::new()
        .width(width)
        .height(height)
        .count(count)
        .class(class);
    let blocks = skeleton::blocks(&config);

    view! {
        <div class=skeleton::container_class(&config) role="status" aria-busy="true">
            <For
                each=move || blocks.clone()
                key=|block| block.key
                children=move |block| {
                    view! {
                        <div class=block.class data-key=block.key.to_string() aria-hidden="true"></div>
                    }
                }
            />
        </div>
    }
}
