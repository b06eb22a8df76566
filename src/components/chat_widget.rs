use std::rc::Rc;

use leptos::prelude::*;

use crate::browser::{BrowserSpeech, FetchAskClient, SignalView};
use crate::chat::{ChatController, Message, SubmitOutcome, Transcript};
use crate::components::mode_selector::ModeSelector;
use crate::config::ChatConfig;

type WidgetController = ChatController<FetchAskClient, SignalView, BrowserSpeech>;

#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<ChatConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let handles = SignalView::new();
    let user_name = config.user_name.clone();
    let assistant_name = config.assistant_name.clone();
    let typing_name = assistant_name.clone();
    let title = format!("Ask {}", assistant_name);

    let client = FetchAskClient::new(config.endpoint.clone());
    let controller: StoredValue<Rc<WidgetController>, LocalStorage> = StoredValue::new_local(
        Rc::new(ChatController::new(config, client, handles, BrowserSpeech)),
    );

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // keep the newest entry in view
    Effect::new(move |_| {
        handles.transcript.track();
        if let Some(container) = messages_ref.get() {
            container.set_scroll_top(container.scroll_height());
        }
    });

    let send_message = move || {
        let query = handles.input.get_untracked();
        if query.trim().is_empty() || handles.listening.get_untracked() {
            return;
        }

        let controller = controller.get_value();
        if controller.is_pending() {
            return;
        }

        handles.input.set(String::new());
        let mode = handles.mode.get_untracked();

        wasm_bindgen_futures::spawn_local(async move {
            if let SubmitOutcome::Failed(e) = controller.submit(&query, mode.as_str()).await {
                log::debug!("Submission failed: {}", e);
            }
        });
    };

    let start_voice_input = move |_| {
        let controller = controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = controller.start_voice_input().await;
            log::debug!("Voice input finished: {:?}", outcome);
        });
    };

    view! {
        <div class="flex flex-col h-[700px] max-w-4xl mx-auto bg-white dark:bg-teal-800 rounded-lg shadow-lg">
            // Header
            <div class="flex items-center justify-between p-4 border-b border-gray-200 dark:border-teal-700">
                <h2 class="text-xl font-semibold text-gray-800 dark:text-gray-200">
                    {title}
                </h2>
                <div class="flex items-center space-x-3">
                    <ModeSelector mode=handles.mode />
                    <label class="flex items-center space-x-1 text-sm text-gray-700 dark:text-gray-300">
                        <input
                            type="checkbox"
                            prop:checked=move || handles.speak_answers.get()
                            on:change=move |ev| handles.speak_answers.set(event_target_checked(&ev))
                        />
                        <span>"Speak answers"</span>
                    </label>
                </div>
            </div>

            // Messages area
            <div node_ref=messages_ref class="flex-1 overflow-y-auto p-4 space-y-4">
                <Show when=move || handles.transcript.with(Transcript::is_empty)>
                    <p class="text-center text-gray-500 dark:text-gray-400">
                        "Type a question or press Speak."
                    </p>
                </Show>
                <For
                    each=move || handles.transcript.with(Transcript::entries)
                    key=|(index, _)| *index
                    children=move |(_, message)| {
                        let label = if message.is_user() {
                            user_name.clone()
                        } else {
                            assistant_name.clone()
                        };
                        view! { <MessageBubble message=message label=label /> }
                    }
                />
                <Show when=move || handles.is_waiting()>
                    <TypingBubble label=typing_name.clone() />
                </Show>
            </div>

            // Input area
            <form
                class="p-4 border-t border-gray-200 dark:border-teal-700 flex space-x-3"
                on:submit=move |ev| {
                    ev.prevent_default();
                    send_message();
                }
            >
                <input
                    type="text"
                    class="flex-1 p-3 border border-gray-300 dark:border-teal-600 rounded-lg
                    bg-white dark:bg-teal-700 text-gray-800 dark:text-gray-200
                    focus:outline-none focus:ring-2 focus:ring-seafoam-500 dark:focus:ring-aqua-400
                    placeholder-gray-400 dark:placeholder-gray-500"
                    placeholder="Type your question..."
                    prop:value=move || handles.input.get()
                    on:input=move |ev| handles.input.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="px-4 py-2 bg-gray-500 hover:bg-gray-600 text-white rounded-lg transition-colors
                    disabled:bg-gray-400 disabled:cursor-not-allowed"
                    on:click=start_voice_input
                    prop:disabled=move || handles.listening.get() || handles.is_waiting()
                >
                    {move || if handles.listening.get() { "Listening..." } else { "Speak" }}
                </button>
                <button
                    type="submit"
                    class="px-6 py-2 bg-seafoam-600 dark:bg-seafoam-500 text-white rounded-lg
                    hover:bg-seafoam-700 dark:hover:bg-seafoam-600 transition-colors
                    disabled:bg-gray-400 dark:disabled:bg-gray-600 disabled:cursor-not-allowed
                    flex items-center justify-center min-w-[80px]"
                    prop:disabled=move || {
                        handles.is_waiting() || handles.listening.get()
                            || handles.input.get().trim().is_empty()
                    }
                >
                    {move || {
                        if handles.is_waiting() {
                            view! {
                                <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-white"></div>
                            }
                                .into_any()
                        } else {
                            view! { <span>"Send"</span> }.into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn MessageBubble(message: Message, label: String) -> impl IntoView {
    let is_user = message.is_user();
    let lines: Vec<String> = message.lines().into_iter().map(str::to_string).collect();

    view! {
        <div class=if is_user { "flex justify-end" } else { "flex justify-start" }>
            <div class=format!(
                "max-w-3xl rounded-lg p-3 {}",
                if is_user {
                    "bg-seafoam-600 dark:bg-seafoam-500 text-white"
                } else {
                    "bg-gray-100 dark:bg-teal-700 text-gray-800 dark:text-gray-200"
                },
            )>
                <span class="block text-xs font-semibold opacity-70 mb-1">{label}</span>
                // text nodes only; server text never becomes markup
                <p class="text-left">
                    {lines
                        .into_iter()
                        .enumerate()
                        .map(|(index, line)| {
                            view! {
                                {(index > 0).then(|| view! { <br /> })}
                                {line}
                            }
                        })
                        .collect_view()}
                </p>
            </div>
        </div>
    }
}

#[component]
fn TypingBubble(label: String) -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="rounded-lg p-3 bg-gray-100 dark:bg-teal-700 text-gray-800 dark:text-gray-200">
                <span class="block text-xs font-semibold opacity-70 mb-1">{label}</span>
                <p class="animate-pulse">"..."</p>
            </div>
        </div>
    }
}
