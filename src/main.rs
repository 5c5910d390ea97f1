use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;

mod components;
mod config;
mod error;
mod i18n;
mod markup;
mod models;
mod routing;
mod services;

use components::{
    AdminGate, AdminScreen, CabinetScreen, NavigationBar, StatusCheckScreen, SubmitFormScreen,
};
use config::AppConfig;
use services::ApiClient;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus::launch(App);
}

/// Screens of the app; each one has its own URL
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Submit,
    Status,
    Admin,
    Cabinet(Option<String>), // normalised e-mail from /user/{email}
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);

    let config = use_context_provider(AppConfig::load);
    use_context_provider(|| ApiClient::new(&config.api_base));

    let mut current_screen = use_signal(routing::initial_screen);
    let mut admin_gate = use_signal(|| AdminGate::Checking);

    // One session check per page load
    let session_base = config.api_base.clone();
    use_hook(move || {
        spawn(async move {
            let service = admin_auth::AdminAuthService::new(session_base);
            let result = service.check_session().await;
            let next = admin_gate.peek().after_session_check(result);
            admin_gate.set(next);
        });
    });

    // Back/Forward re-derive the screen from the address bar
    use_hook(move || {
        routing::install_popstate_listener(move |pathname| {
            let next = routing::screen_change(&current_screen.peek(), &pathname);
            if let Some(screen) = next {
                current_screen.set(screen);
            }
        });
    });

    let navigate = move |screen: Screen| {
        routing::push_history(&screen);
        current_screen.set(screen);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; min-height: 100vh; font-family: sans-serif;",

            NavigationBar {
                current_screen: current_screen(),
                show_admin: admin_gate() == AdminGate::Unlocked,
                on_navigate: navigate,
            }

            // Main Content
            main { style: "flex: 1; padding: 16px; max-width: 900px; width: 100%; margin: 0 auto; box-sizing: border-box;",
                match current_screen() {
                    Screen::Submit => rsx! {
                        SubmitFormScreen { on_navigate: navigate }
                    },
                    Screen::Status => rsx! {
                        StatusCheckScreen { on_navigate: navigate }
                    },
                    Screen::Admin => rsx! {
                        AdminScreen { gate: admin_gate, on_navigate: navigate }
                    },
                    // keyed by e-mail so switching users reloads the cabinet
                    Screen::Cabinet(email) => rsx! {
                        {std::iter::once(email).map(|email| {
                            let key = email.clone().unwrap_or_default();
                            rsx! {
                                CabinetScreen { key: "{key}", email, on_navigate: navigate }
                            }
                        })}
                    },
                }
            }
        }
    }
}
