use crate::Screen;

impl Screen {
    /// Maps a browser path onto a screen; unknown paths land on the submit form
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Screen::Submit,
            ["status"] => Screen::Status,
            ["admin"] => Screen::Admin,
            // `/email` is the old name of the cabinet
            ["user"] | ["email"] => Screen::Cabinet(None),
            ["user", email] | ["email", email] => Screen::Cabinet(decode_email(email)),
            _ => Screen::Submit,
        }
    }

    /// Inverse of [`Screen::from_path`]
    pub fn path(&self) -> String {
        match self {
            Screen::Submit => "/".to_string(),
            Screen::Status => "/status".to_string(),
            Screen::Admin => "/admin".to_string(),
            Screen::Cabinet(None) => "/user".to_string(),
            Screen::Cabinet(Some(email)) => format!("/user/{}", urlencoding::encode(email)),
        }
    }
}

/// Normalised e-mail used in cabinet URLs and lookups
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn decode_email(segment: &str) -> Option<String> {
    let decoded = match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::warn!("Undecodable e-mail in path {:?}: {}", segment, e);
            segment.to_string()
        }
    };
    let email = normalize_email(&decoded);
    if email.is_empty() {
        None
    } else {
        Some(email)
    }
}

/// Screen for the page the app was loaded on
pub fn initial_screen() -> Screen {
    Screen::from_path(&current_path())
}

#[cfg(target_arch = "wasm32")]
fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_path() -> String {
    "/".to_string()
}

/// Records the screen in the browser history so reloads and links keep working
#[cfg(target_arch = "wasm32")]
pub fn push_history(screen: &Screen) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let path = screen.path();
    if current_path() == path {
        return;
    }
    if let Err(e) =
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
    {
        log::warn!("pushState failed for {}: {:?}", path, e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn push_history(screen: &Screen) {
    log::debug!("Navigate to {}", screen.path());
}

/// Screen to show after the browser moved to `pathname`, if it differs
pub fn screen_change(current: &Screen, pathname: &str) -> Option<Screen> {
    let next = Screen::from_path(pathname);
    if &next == current {
        None
    } else {
        Some(next)
    }
}

#[cfg(target_arch = "wasm32")]
type PopstateCallback = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static POPSTATE_HANDLER: std::cell::RefCell<Option<PopstateCallback>> =
        std::cell::RefCell::new(None);
}

/// Reports the new pathname after browser Back/Forward; installed once per page
#[cfg(target_arch = "wasm32")]
pub fn install_popstate_listener(mut on_path: impl FnMut(String) + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };

    POPSTATE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            on_path(current_path());
        }));
        if let Err(e) =
            window.add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())
        {
            log::warn!("popstate listener not installed: {:?}", e);
            return;
        }
        *slot.borrow_mut() = Some(callback);
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_popstate_listener(_on_path: impl FnMut(String) + 'static) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Screen::from_path("/"), Screen::Submit);
        assert_eq!(Screen::from_path(""), Screen::Submit);
        assert_eq!(Screen::from_path("/status"), Screen::Status);
        assert_eq!(Screen::from_path("/admin/"), Screen::Admin);
        assert_eq!(Screen::from_path("/admin?admin=true"), Screen::Admin);
        assert_eq!(Screen::from_path("/user"), Screen::Cabinet(None));
    }

    #[test]
    fn test_cabinet_email_is_decoded_and_lowercased() {
        assert_eq!(
            Screen::from_path("/user/%20Anna%40Example.RU"),
            Screen::Cabinet(Some("anna@example.ru".to_string()))
        );
    }

    #[test]
    fn test_legacy_email_alias() {
        assert_eq!(Screen::from_path("/email"), Screen::Cabinet(None));
        assert_eq!(
            Screen::from_path("/email/a@b.ru"),
            Screen::Cabinet(Some("a@b.ru".to_string()))
        );
    }

    #[test]
    fn test_unknown_paths_fall_back_to_submit() {
        assert_eq!(Screen::from_path("/nope"), Screen::Submit);
        assert_eq!(Screen::from_path("/user/a@b.ru/extra"), Screen::Submit);
    }

    #[test]
    fn test_back_and_forward_switch_screens() {
        let cabinet = Screen::Cabinet(Some("anna@example.ru".to_string()));
        assert_eq!(screen_change(&Screen::Admin, "/"), Some(Screen::Submit));
        assert_eq!(
            screen_change(&Screen::Submit, "/user/anna%40example.ru"),
            Some(cabinet.clone())
        );
        assert_eq!(screen_change(&Screen::Status, "/status"), None);
        // the legacy alias names the same cabinet, no remount
        assert_eq!(screen_change(&cabinet, "/email/Anna@Example.ru"), None);
    }

    #[test]
    fn test_path_is_inverse() {
        for screen in [
            Screen::Submit,
            Screen::Status,
            Screen::Admin,
            Screen::Cabinet(None),
            Screen::Cabinet(Some("a+b@example.com".to_string())),
        ] {
            assert_eq!(Screen::from_path(&screen.path()), screen);
        }
    }
}
