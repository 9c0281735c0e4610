use crate::frontend::{
    components::{i18n::I18n, nav::Nav},
    pages::{about::About, info_hub::InfoHub},
    utils::theme::Theme,
};
use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

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
    provide_meta_context();
    let theme = Theme::init();
    provide_context(theme.clone());

    view! {
        <I18n>
            <Stylesheet id="leptos" href="/pkg/smart_kisan.css" />
            <Link rel="icon" href="/favicon.svg" />
            <Title text="Smart Kisan" />
            <div data-theme=theme.name class="flex flex-col min-h-screen bg-base-200">
                <Router>
                    <Nav />
                    <main class="container grow px-4 my-4 mx-auto max-w-5xl">
                        <Routes fallback=|| "Page not found.">
                            <Route path=path!("/") view=About />
                            <Route path=path!("/about") view=About />
                            <Route path=path!("/resources") view=InfoHub />
                        </Routes>
                    </main>
                </Router>
            </div>
        </I18n>
    }
}
