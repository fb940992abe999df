//! Client-side state machines shared by every view.
//!
//! Nothing here touches the UI framework or the network: each type is a plain
//! value that the `ui` crate stores in a signal and drives from events.

pub mod gallery;
pub mod roles;
pub mod routing;
pub mod session;
pub mod slideshow;

pub use gallery::{GalleryImage, GalleryLoader, LoadState, PreloadPlan, PreloadRequest, Viewer, ViewerKey};
pub use roles::{CapabilityTable, Section};
pub use routing::{GuardView, NavigationIntent, RouteGuard, RoutePolicy};
pub use session::{ListenerId, SessionEvent, SessionState, SessionStore};
pub use slideshow::Slideshow;
