use records::{
    Currency, Customer, InspectionPointCategory, InspectionPointType,
    InventoryItem, Invoice, Lead, ProposalTemplate, Prospect, Route as
    ServiceRoute, ServiceType, TreatmentType, Vehicle, VehicleType, Zone,
};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod contexts;
pub mod entities;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;
pub mod storage;

use components::{MainLayout, NoticeList};
use config::ConsoleConfig;
use contexts::notices::NoticeProvider;
use pages::{EntityPage, HomePage, NotFoundPage};

#[function_component]
pub fn App() -> Html {
    use_memo((), |_| {
        logs::init_logging(&ConsoleConfig::from_build_env().log_filter);
    });

    html! {
        <NoticeProvider>
            <BrowserRouter>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
                <NoticeList />
            </BrowserRouter>
        </NoticeProvider>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/customers")]
    Customers,
    #[at("/leads")]
    Leads,
    #[at("/prospects")]
    Prospects,
    #[at("/invoices")]
    Invoices,
    #[at("/inventory")]
    Inventory,
    #[at("/vehicles")]
    Vehicles,
    #[at("/routes")]
    Routes,
    #[at("/settings/service-types")]
    ServiceTypes,
    #[at("/settings/treatment-types")]
    TreatmentTypes,
    #[at("/settings/zones")]
    Zones,
    #[at("/settings/inspection-point-categories")]
    InspectionPointCategories,
    #[at("/settings/inspection-point-types")]
    InspectionPointTypes,
    #[at("/settings/vehicle-types")]
    VehicleTypes,
    #[at("/settings/currencies")]
    Currencies,
    #[at("/settings/proposal-templates")]
    ProposalTemplates,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Customers => html! { <EntityPage<Customer> /> },
        Route::Leads => html! { <EntityPage<Lead> /> },
        Route::Prospects => html! { <EntityPage<Prospect> /> },
        Route::Invoices => html! { <EntityPage<Invoice> /> },
        Route::Inventory => html! { <EntityPage<InventoryItem> /> },
        Route::Vehicles => html! { <EntityPage<Vehicle> /> },
        Route::Routes => html! { <EntityPage<ServiceRoute> /> },
        Route::ServiceTypes => html! { <EntityPage<ServiceType> /> },
        Route::TreatmentTypes => html! { <EntityPage<TreatmentType> /> },
        Route::Zones => html! { <EntityPage<Zone> /> },
        Route::InspectionPointCategories => {
            html! { <EntityPage<InspectionPointCategory> /> }
        }
        Route::InspectionPointTypes => {
            html! { <EntityPage<InspectionPointType> /> }
        }
        Route::VehicleTypes => html! { <EntityPage<VehicleType> /> },
        Route::Currencies => html! { <EntityPage<Currency> /> },
        Route::ProposalTemplates => html! { <EntityPage<ProposalTemplate> /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
