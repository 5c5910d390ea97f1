use dioxus_i18n::prelude::*;

/// Initialize i18n configuration with Russian as the only language
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(unic_langid::langid!("ru-RU")).with_locale(Locale::new_static(
        unic_langid::langid!("ru-RU"),
        include_str!("../locales/ru-RU.ftl"),
    ))
}
