use super::{Header, Sidebar};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);

    html! {
        <div class="min-h-screen bg-white text-neutral-900">
            <Header />
            <div class="flex min-h-0">
                <aside class="hidden md:block w-64 flex-shrink-0 border-r \
                              border-neutral-200">
                    <Sidebar active_route={route} />
                </aside>
                <main class="flex-1 min-w-0 px-4 sm:px-6 lg:px-8 py-8">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}
