use dioxus::prelude::*;

use ui::{AuthProvider, BackendProvider, SiteConfigProvider};
use views::admin::{
    AdminAdmins, AdminBlogs, AdminComments, AdminLayout, AdminLogin, AdminMessages,
    AdminProjects, AdminShell, Dashboard,
};
use views::{
    Blog, BlogDetail, Contact, Galleries, Home, NotFound, ProjectDetail, Projects, PublicLayout,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/projects")]
        Projects {},
        #[route("/projects/:id")]
        ProjectDetail { id: String },
        #[route("/blog")]
        Blog {},
        #[route("/blog/:slug")]
        BlogDetail { slug: String },
        #[route("/galleries")]
        Galleries {},
        #[route("/contact")]
        Contact {},
    #[end_layout]
    #[layout(AdminShell)]
        #[route("/admin/login")]
        AdminLogin {},
        #[layout(AdminLayout)]
            #[route("/admin")]
            Dashboard {},
            #[route("/admin/admins")]
            AdminAdmins {},
            #[route("/admin/blogs")]
            AdminBlogs {},
            #[route("/admin/projects")]
            AdminProjects {},
            #[route("/admin/messages")]
            AdminMessages {},
            #[route("/admin/comments")]
            AdminComments {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Deployment settings, see `store::SiteConfig`.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    #[cfg(feature = "server")]
    {
        init_tracing();
        match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime.block_on(launch_server()),
            Err(e) => tracing::error!("Failed to start runtime: {e}"),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,web=debug,ui=debug,state=debug,api=debug"));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        eprintln!("tracing subscriber already installed");
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            return;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server error: {e}");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        SiteConfigProvider {
            source: SITE_TOML.to_string(),
            BackendProvider {
                AuthProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
