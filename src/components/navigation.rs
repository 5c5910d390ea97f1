use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

fn tab_style(active: bool) -> &'static str {
    if active {
        "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #0066cc; color: #ffffff;"
    } else {
        "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #ffffff; color: #333;"
    }
}

/// Top tabs. The admin tab only appears once the admin gate is open.
#[component]
pub fn NavigationBar(
    current_screen: Screen,
    show_admin: bool,
    on_navigate: EventHandler<Screen>,
) -> Element {
    let nav_style = "display: flex; justify-content: space-around; padding: 10px; background: #f0f0f0; border-bottom: 1px solid #ddd;";

    rsx! {
        nav { style: "{nav_style}",
            button {
                style: tab_style(matches!(current_screen, Screen::Submit)),
                onclick: move |_| on_navigate.call(Screen::Submit),
                {t!("nav-submit")}
            }
            button {
                style: tab_style(matches!(current_screen, Screen::Status)),
                onclick: move |_| on_navigate.call(Screen::Status),
                {t!("nav-status")}
            }
            button {
                style: tab_style(matches!(current_screen, Screen::Cabinet(_))),
                onclick: move |_| on_navigate.call(Screen::Cabinet(None)),
                {t!("nav-cabinet")}
            }
            if show_admin {
                button {
                    style: tab_style(matches!(current_screen, Screen::Admin)),
                    onclick: move |_| on_navigate.call(Screen::Admin),
                    {t!("nav-admin")}
                }
            }
        }
    }
}
