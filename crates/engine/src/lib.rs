//! V20 Builder Engine library.
//!
//! Hosts builder sessions over HTTP. Every rule lives in the domain crate;
//! this crate owns sessions, storage, and transport.
//!
//! ## Structure
//!
//! - `stores/` - In-memory session state
//! - `use_cases/` - User story orchestration over sessions
//! - `infrastructure/` - Ports and their implementations (clock, random, sheet files)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
