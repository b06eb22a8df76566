use leptos::prelude::*;

use crate::chat::Mode;

#[component]
pub fn ModeSelector(mode: RwSignal<Mode>) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <label class="text-sm font-medium text-gray-700 dark:text-gray-300">"Mode:"</label>
            <select
                class="px-2 py-1 text-sm rounded border border-gray-300 dark:border-gray-600
                bg-white dark:bg-gray-800 text-gray-900 dark:text-gray-100"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    mode.set(Mode::from_str(&value));
                }
                prop:value=move || mode.get().as_str()
            >
                {Mode::ALL
                    .into_iter()
                    .map(|option| {
                        view! { <option value=option.as_str()>{option.display_name()}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
