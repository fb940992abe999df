//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod timer;

mod backend;
pub use backend::{use_backend, BackendProvider};

mod config;
pub use config::{use_site_config, SiteConfigProvider};

mod auth;
pub use auth::{use_session, AuthGuard, AuthProvider, LogoutButton, SessionHandle};

mod login;
pub use login::LoginForm;

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::{AdminSidebar, SectionGate};

mod visibility;

mod gallery;
pub use gallery::Gallery;

mod viewer;
pub use viewer::ImageViewer;

mod carousel;
pub use carousel::{HeroCarousel, Slide};

mod admin;
pub use admin::{AdminRow, AdminTable, RowAction};

mod markdown;
pub use markdown::Markdown;
