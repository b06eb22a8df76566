use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::extract::FromRef;
        use leptos::prelude::LeptosOptions;

        use crate::config::ServerConfig;

        #[derive(FromRef, Clone)]
        pub struct AppState {
            pub leptos_options: LeptosOptions,
            pub server_config: ServerConfig,
            pub http: reqwest::Client,
        }

        impl AppState {
            pub fn new(leptos_options: LeptosOptions, server_config: ServerConfig) -> Self {
                Self {
                    leptos_options,
                    server_config,
                    http: reqwest::Client::new(),
                }
            }
        }
    }
}
