use leptos::prelude::*;
use leptos_fluent::{expect_i18n, leptos_fluent};

#[component]
pub fn I18n(children: Children) -> impl IntoView {
    // See all options in the reference at
    // https://mondeja.github.io/leptos-fluent/leptos_fluent.html

    #[allow(unused_variables)]
    let max_age = 60 * 60 * 24 * 365;
    leptos_fluent! {
        children: children(),
        locales: "./locales",
        default_language: "en",
        set_language_to_cookie: true,
        initial_language_from_cookie: true,
        initial_language_from_navigator: true,
        initial_language_from_navigator_to_cookie: true,
        initial_language_from_url_param: true,
        initial_language_from_url_param_to_cookie: true,
        initial_language_from_accept_language_header: true,
        cookie_name: "lang",
        cookie_attrs: format!("samesite=strict; path=/; max-age={max_age}"),
    }
}

#[component]
pub(crate) fn LanguageSelector() -> impl IntoView {
    let i18n = expect_i18n();

    view! {
        <select
            class="select select-sm select-neutral"
            prop:value=move || i18n.language.get().id.to_string()
        >
            {move || {
                i18n.languages
                    .iter()
                    .map(|lang| {
                        view! {
                            <option
                                value=lang.id.to_string()
                                on:click=move |_| i18n.language.set(lang)
                            >
                                {lang.name}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    const EN: &str = include_str!("../../../locales/en/main.ftl");
    const HI: &str = include_str!("../../../locales/hi/main.ftl");

    /// Every message id the views resolve with `tr!`
    const REQUIRED_KEYS: &[&str] = &[
        "site-name",
        "nav-about",
        "nav-resources",
        "theme-light",
        "theme-dark",
        "about-title",
        "about-subtitle",
        "about-overview-title",
        "about-overview-text",
        "about-feature-realtime-title",
        "about-feature-realtime-desc",
        "about-feature-irrigation-title",
        "about-feature-irrigation-desc",
        "about-feature-pest-title",
        "about-feature-pest-desc",
        "about-feature-resources-title",
        "about-feature-resources-desc",
        "about-team-title",
        "about-technologies-title",
        "frontend",
        "backend",
        "database",
        "react-js",
        "bootstrap",
        "chart-js",
        "react-icons",
        "java",
        "spring-boot",
        "restful-apis",
        "jwt-authentication",
        "mysql",
        "about-footer-line1",
        "about-footer-line2",
        "agricultural-resources",
        "farming-tips",
        "government-schemes",
        "agricultural-news",
        "expert-consultation",
        "upcoming-events",
        "farming-tips-best-practices",
        "government-agricultural-schemes",
        "agricultural-news-updates",
        "upcoming-agricultural-events",
        "connect-with-experts",
        "eligibility",
        "learn-more-apply",
        "source",
        "specialty",
        "experience",
        "availability",
        "contact",
        "schedule-consultation",
        "location",
        "add-to-calendar",
        "have-question-suggestion",
        "contact-us-text",
        "contact-us",
    ];

    fn message_ids(ftl: &str) -> Vec<&str> {
        ftl.lines()
            .filter(|line| !line.starts_with('#') && !line.starts_with(' '))
            .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
            .collect()
    }

    #[test]
    fn test_required_keys_in_both_locales() {
        for ids in [message_ids(EN), message_ids(HI)] {
            for key in REQUIRED_KEYS {
                assert!(ids.contains(key), "missing translation for {key}");
            }
        }
    }

    #[test]
    fn test_locales_define_same_keys() {
        assert_eq!(message_ids(EN), message_ids(HI));
    }
}
