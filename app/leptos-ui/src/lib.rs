use leptos::prelude::*;

pub mod components;

use components::{Card, Skeleton};
use wasm_bindgen::prelude::*;

/// Component gallery shown when the crate is mounted as an app.
#[component]
pub fn App() -> impl IntoView {
    let (clicks, set_clicks) = signal(0u32);

    view! {
        <main class="p-8 space-y-8 bg-gray-100">
            <section class="space-y-2">
                <h2 class="text-sm text-gray-500">"Skeleton"</h2>
                <Skeleton count=3 />
                <Skeleton width="w-1/2" height="h-8" count=2 class="mt-4" />
            </section>
            <section class="space-y-2">
                <h2 class="text-sm text-gray-500">"Card"</h2>
                <Card>"Plain body"</Card>
                <Card title="Profile" footer="Saved">"Name, avatar and bio"</Card>
                <Card hover=true class="max-w-sm">"Hover me"</Card>
                <Card hover=true on_click=move || set_clicks.update(|n| *n += 1)>
                    "Clicked " {clicks} " times"
                </Card>
            </section>
        </main>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
