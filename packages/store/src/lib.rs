pub mod config;
pub mod models;
pub mod service;

mod memory;
pub use memory::MemoryStore;

pub use config::SiteConfig;
pub use models::{Admin, AdminInfo, BlogPost, Comment, Message, Project, Role};
pub use service::{DataService, Filter, Order, Record, StoreError};
