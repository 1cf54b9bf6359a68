use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::layout::NAV_SECTIONS;
use crate::hooks::use_title;

#[function_component]
pub fn HomePage() -> Html {
    use_title("Home");

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900">{"Fieldbook"}</h1>
                <p class="text-neutral-600">
                    {"Customers, jobs and settings for the field team. \
                      Everything is saved in this browser."}
                </p>
            </div>
            <div class="grid gap-6 sm:grid-cols-3">
                {for NAV_SECTIONS.iter().map(|section| html! {
                    <div class="border border-neutral-200 rounded-lg p-4">
                        <h2 class="text-sm font-semibold uppercase tracking-wider \
                                   text-neutral-500 mb-2">
                            {section.heading}
                        </h2>
                        <ul class="space-y-1">
                            {for section.items.iter().map(|item| html! {
                                <li>
                                    <Link<Route> to={item.route.clone()}
                                        classes="text-neutral-900 hover:underline">
                                        {item.title}
                                    </Link<Route>>
                                </li>
                            })}
                        </ul>
                    </div>
                })}
            </div>
        </div>
    }
}
