use crate::frontend::{components::i18n::LanguageSelector, utils::theme::Theme};
use leptos::prelude::*;
use leptos_fluent::tr;
use phosphor_leptos::{INFO, Icon, PLANT, SQUARES_FOUR};

#[component]
pub fn Nav() -> impl IntoView {
    let mut theme = expect_context::<Theme>();
    view! {
        <nav class="shadow navbar bg-base-100">
            <div class="navbar-start">
                <a href="/" class="text-xl btn btn-ghost">
                    <Icon icon=PLANT size="24px" />
                    {move || tr!("site-name")}
                </a>
            </div>
            <div class="navbar-center">
                <ul class="px-1 menu menu-horizontal">
                    <li>
                        <a href="/about">
                            <Icon icon=INFO />
                            {move || tr!("nav-about")}
                        </a>
                    </li>
                    <li>
                        <a href="/resources">
                            <Icon icon=SQUARES_FOUR />
                            {move || tr!("nav-resources")}
                        </a>
                    </li>
                </ul>
            </div>
            <div class="gap-2 navbar-end">
                <LanguageSelector />
                <label class="flex gap-2 cursor-pointer">
                    <span class="label-text">{move || tr!("theme-light")}</span>
                    <input
                        type="checkbox"
                        class="toggle"
                        prop:checked=theme.is_dark
                        on:click=move |_| { theme.toggle() }
                    />
                    <span class="label-text">{move || tr!("theme-dark")}</span>
                </label>
            </div>
        </nav>
    }
}
