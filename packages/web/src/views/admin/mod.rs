//! The admin panel: everything under `/admin`.
//!
//! [`AdminShell`] guards every admin route, the login page included, so a
//! signed-in admin landing on the login page is sent on to the dashboard.

use dioxus::prelude::*;
use state::Section;
use store::StoreError;
use ui::{AdminSidebar, AuthGuard, LoginForm, SectionGate};

use crate::Route;

mod admins;
pub use admins::AdminAdmins;

mod blogs;
pub use blogs::AdminBlogs;

mod comments;
pub use comments::AdminComments;

mod dashboard;
pub use dashboard::Dashboard;

mod messages;
pub use messages::AdminMessages;

mod projects;
pub use projects::AdminProjects;

fn section_route(section: Section) -> Route {
    match section {
        Section::Dashboard => Route::Dashboard {},
        Section::Admins => Route::AdminAdmins {},
        Section::Blogs => Route::AdminBlogs {},
        Section::Projects => Route::AdminProjects {},
        Section::Messages => Route::AdminMessages {},
        Section::Comments => Route::AdminComments {},
    }
}

fn route_section(route: &Route) -> Option<Section> {
    match route {
        Route::Dashboard {} => Some(Section::Dashboard),
        Route::AdminAdmins {} => Some(Section::Admins),
        Route::AdminBlogs {} => Some(Section::Blogs),
        Route::AdminProjects {} => Some(Section::Projects),
        Route::AdminMessages {} => Some(Section::Messages),
        Route::AdminComments {} => Some(Section::Comments),
        _ => None,
    }
}

/// Records of a list resource as `(records, loading, load error)`.
pub(crate) fn loaded<T: Clone + 'static>(
    resource: &Resource<Result<Vec<T>, StoreError>>,
) -> (Vec<T>, bool, Option<String>) {
    match &*resource.read() {
        None => (Vec::new(), true, None),
        Some(Ok(records)) => (records.clone(), false, None),
        Some(Err(e)) => (Vec::new(), false, Some(e.to_string())),
    }
}

#[component]
pub fn AdminShell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        AuthGuard {
            path: route.to_string(),
            on_redirect: move |target: String| match target.parse::<Route>() {
                Ok(route) => {
                    nav.replace(route);
                }
                Err(e) => tracing::error!("redirect target {target} is not a route: {e}"),
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn AdminLogin() -> Element {
    rsx! {
        LoginForm {}
    }
}

#[component]
pub fn AdminLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let active = route_section(&route);

    rsx! {
        div {
            class: "flex min-h-screen",
            AdminSidebar {
                active,
                on_select: move |section: Section| {
                    nav.push(section_route(section));
                },
            }
            main {
                class: "flex-1 overflow-y-auto",
                if let Some(section) = active {
                    SectionGate {
                        section,
                        Outlet::<Route> {}
                    }
                } else {
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_a_route() {
        for section in Section::ALL {
            assert_eq!(route_section(&section_route(section)), Some(section));
        }
    }

    #[test]
    fn test_configured_paths_parse_to_routes() {
        let config = store::SiteConfig::from_toml(crate::SITE_TOML).unwrap();
        assert_eq!(
            config.auth.login_path.parse::<Route>().ok(),
            Some(Route::AdminLogin {})
        );
        assert_eq!(
            config.auth.landing_path.parse::<Route>().ok(),
            Some(Route::Dashboard {})
        );
    }
}
