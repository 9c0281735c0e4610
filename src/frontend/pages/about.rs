use crate::common::{
    content::{CONTENT, ContentProvider},
    team::TeamMember,
};
use leptos::prelude::*;
use leptos_fluent::tr;
use leptos_meta::Title;
use phosphor_leptos::{
    BOOKS,
    BUG,
    CHART_LINE,
    DROP,
    ENVELOPE,
    GITHUB_LOGO,
    GRADUATION_CAP,
    Icon,
    LINKEDIN_LOGO,
};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text=move || tr!("about-title") />
        <header class="my-6 text-center">
            <div class="flex justify-center">
                <Icon icon=GRADUATION_CAP size="48px" />
            </div>
            <h1 class="my-2 font-serif text-4xl font-bold">{move || tr!("about-title")}</h1>
            <p class="text-lg">{move || tr!("about-subtitle")}</p>
        </header>

        <section>
            <h2 class="my-4 font-serif text-2xl font-bold">{move || tr!("about-overview-title")}</h2>
            <p class="my-2">{move || tr!("about-overview-text")}</p>
            <div class="grid gap-4 my-4 md:grid-cols-2">
                <div class="shadow card bg-base-100">
                    <div class="p-4 card-body">
                        <Icon icon=CHART_LINE size="32px" />
                        <h3 class="card-title">{move || tr!("about-feature-realtime-title")}</h3>
                        <p>{move || tr!("about-feature-realtime-desc")}</p>
                    </div>
                </div>
                <div class="shadow card bg-base-100">
                    <div class="p-4 card-body">
                        <Icon icon=DROP size="32px" />
                        <h3 class="card-title">{move || tr!("about-feature-irrigation-title")}</h3>
                        <p>{move || tr!("about-feature-irrigation-desc")}</p>
                    </div>
                </div>
                <div class="shadow card bg-base-100">
                    <div class="p-4 card-body">
                        <Icon icon=BUG size="32px" />
                        <h3 class="card-title">{move || tr!("about-feature-pest-title")}</h3>
                        <p>{move || tr!("about-feature-pest-desc")}</p>
                    </div>
                </div>
                <div class="shadow card bg-base-100">
                    <div class="p-4 card-body">
                        <Icon icon=BOOKS size="32px" />
                        <h3 class="card-title">{move || tr!("about-feature-resources-title")}</h3>
                        <p>{move || tr!("about-feature-resources-desc")}</p>
                    </div>
                </div>
            </div>
        </section>

        <section>
            <h2 class="my-4 font-serif text-2xl font-bold">{move || tr!("about-team-title")}</h2>
            <div class="grid gap-4 my-4 md:grid-cols-3">
                <For
                    each=move || CONTENT.team_members()
                    key=|member| member.id
                    children=move |member: &'static TeamMember| member_card(member)
                />
            </div>
        </section>

        <section>
            <h2 class="my-4 font-serif text-2xl font-bold">
                {move || tr!("about-technologies-title")}
            </h2>
            <div class="grid gap-4 my-4 md:grid-cols-3">
                <div>
                    <h3 class="text-xl font-bold">{move || tr!("frontend")}</h3>
                    <ul class="my-2 list-disc list-inside">
                        <li>{move || tr!("react-js")}</li>
                        <li>{move || tr!("bootstrap")}</li>
                        <li>{move || tr!("chart-js")}</li>
                        <li>{move || tr!("react-icons")}</li>
                    </ul>
                </div>
                <div>
                    <h3 class="text-xl font-bold">{move || tr!("backend")}</h3>
                    <ul class="my-2 list-disc list-inside">
                        <li>{move || tr!("java")}</li>
                        <li>{move || tr!("spring-boot")}</li>
                        <li>{move || tr!("restful-apis")}</li>
                        <li>{move || tr!("jwt-authentication")}</li>
                    </ul>
                </div>
                <div>
                    <h3 class="text-xl font-bold">{move || tr!("database")}</h3>
                    <ul class="my-2 list-disc list-inside">
                        <li>{move || tr!("mysql")}</li>
                    </ul>
                </div>
            </div>
        </section>

        <footer class="my-6 text-center">
            <p>{move || tr!("about-footer-line1")}</p>
            <p>{move || tr!("about-footer-line2")}</p>
        </footer>
    }
}

fn member_card(member: &'static TeamMember) -> impl IntoView {
    view! {
        <div class="shadow card bg-base-100">
            <div class="p-4 card-body">
                <h3 class="card-title">{member.name}</h3>
                <p class="font-bold">{member.role}</p>
                <p>{member.bio}</p>
                <div class="card-actions">
                    <a class="link" href=format!("mailto:{}", member.social.email) title="Email">
                        <Icon icon=ENVELOPE size="24px" />
                    </a>
                    <a class="link" href=member.social.linkedin title="LinkedIn">
                        <Icon icon=LINKEDIN_LOGO size="24px" />
                    </a>
                    <a class="link" href=member.social.github title="GitHub">
                        <Icon icon=GITHUB_LOGO size="24px" />
                    </a>
                </div>
            </div>
        </div>
    }
}
