use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// A navigation item in the sidebar.
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
}

pub struct NavSection {
    pub heading: &'static str,
    pub items: &'static [NavItem],
}

const fn item(title: &'static str, route: Route) -> NavItem {
    NavItem { title, route }
}

/// Sidebar navigation. Add new entity pages here.
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        heading: "Contacts",
        items: &[
            item("Customers", Route::Customers),
            item("Leads", Route::Leads),
            item("Prospects", Route::Prospects),
        ],
    },
    NavSection {
        heading: "Operations",
        items: &[
            item("Invoices", Route::Invoices),
            item("Inventory", Route::Inventory),
            item("Vehicles", Route::Vehicles),
            item("Routes", Route::Routes),
        ],
    },
    NavSection {
        heading: "Settings",
        items: &[
            item("Service types", Route::ServiceTypes),
            item("Treatment types", Route::TreatmentTypes),
            item("Zones", Route::Zones),
            item("Inspection point categories", Route::InspectionPointCategories),
            item("Inspection point types", Route::InspectionPointTypes),
            item("Vehicle types", Route::VehicleTypes),
            item("Currencies", Route::Currencies),
            item("Proposal templates", Route::ProposalTemplates),
        ],
    },
];

const LINK_BASE_CLASSES: &str = "block px-4 py-2 text-sm transition-colors";
const LINK_INACTIVE_CLASSES: &str =
    "text-neutral-600 hover:text-neutral-900 hover:bg-neutral-100";
const LINK_ACTIVE_CLASSES: &str = "text-neutral-900 bg-neutral-100 font-medium";

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Current active route for highlighting.
    pub active_route: Route,
}

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="py-4 space-y-4">
            {for NAV_SECTIONS.iter().map(|section| html! {
                <div>
                    <div class="px-4 pb-2 text-xs font-semibold uppercase \
                                tracking-wider text-neutral-500">
                        {section.heading}
                    </div>
                    <ul>
                        {for section.items.iter().map(|item| {
                            let is_active = props.active_route == item.route;
                            let classes = format!(
                                "{} {}",
                                LINK_BASE_CLASSES,
                                if is_active { LINK_ACTIVE_CLASSES } else { LINK_INACTIVE_CLASSES }
                            );
                            html! {
                                <li>
                                    <Link<Route> to={item.route.clone()} classes={classes!(classes)}>
                                        {item.title}
                                    </Link<Route>>
                                </li>
                            }
                        })}
                    </ul>
                </div>
            })}
        </nav>
    }
}
