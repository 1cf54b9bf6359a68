use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white border-b border-neutral-200">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex items-center h-16">
                    <Link<Route> to={Route::Home}
                        classes="text-xl font-semibold text-neutral-900">
                        {"Fieldbook"}
                    </Link<Route>>
                </div>
            </div>
        </header>
    }
}
