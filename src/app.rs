use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::chat_widget::ChatWidget;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/gyan.css" />

        <Title text="GYAN" />

        <Router>
            <main>
                <Routes fallback=|| view! { <p class="p-4">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="w-full mx-auto p-4 bg-gray-50 dark:bg-teal-900 min-h-screen">
            <h1 class="text-3xl text-left text-teal-700 dark:text-gray-100 pb-4 font-bold">
                "GYAN - Guided Youth Assistance Network"
            </h1>
            <ChatWidget />
        </div>
    }
}
