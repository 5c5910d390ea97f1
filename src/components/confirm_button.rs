use dioxus::prelude::*;
use dioxus_i18n::t;

/// Two-step trigger behind [`ConfirmButton`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmStep {
    #[default]
    Idle,
    Armed,
}

impl ConfirmStep {
    /// Advances one click; true when this click confirms
    pub fn press(&mut self) -> bool {
        match self {
            ConfirmStep::Idle => {
                *self = ConfirmStep::Armed;
                false
            }
            ConfirmStep::Armed => {
                *self = ConfirmStep::Idle;
                true
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = ConfirmStep::Idle;
    }

    pub fn is_armed(&self) -> bool {
        *self == ConfirmStep::Armed
    }
}

/// Button that asks for a second click before it fires
#[component]
pub fn ConfirmButton(
    label: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut step = use_signal(ConfirmStep::default);

    rsx! {
        if step().is_armed() {
            button {
                class: "btn-danger",
                disabled: disabled,
                onclick: move |_| {
                    if step.write().press() {
                        on_confirm.call(());
                    }
                },
                "{confirm_label}"
            }
            button {
                class: "btn-secondary",
                onclick: move |_| step.write().cancel(),
                {t!("action-cancel")}
            }
        } else {
            button {
                class: "btn-secondary",
                disabled: disabled,
                onclick: move |_| {
                    step.write().press();
                },
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_press_confirms() {
        let mut step = ConfirmStep::default();
        assert!(!step.press());
        assert!(step.is_armed());
        assert!(step.press());
        assert!(!step.is_armed());
    }

    #[test]
    fn test_cancel_disarms() {
        let mut step = ConfirmStep::default();
        step.press();
        step.cancel();
        assert!(!step.press());
        assert!(step.press());
    }
}
