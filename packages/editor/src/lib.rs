//! # Covlet Editor
//!
//! Core of the cover-letter template editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ caller: UI / preview / export               │
//! └─────────────────────────────────────────────┘
//!          ↓ edit, undo, redo     ↓ render
//! ┌─────────────────────────────────────────────┐
//! │ EditSession (one per open document)         │
//! │  - EditHistory: bounded undo/redo snapshots │
//! │  - scan(): fields referenced by the text    │
//! │  - OverrideStore: sidebar values            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ RenderPipeline: parse → merge → execute     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use covlet_editor::{Config, EditSession, RenderPipeline};
//!
//! let config = Config::load("config.yml")?;
//! let mut session = EditSession::new(&config.editor);
//!
//! session.edit("Dear {{ .CompanyToApplyTo }} team");
//! assert_eq!(session.fields(), ["CompanyToApplyTo"]);
//!
//! session.overrides_mut().set("CompanyToApplyTo", "Acme");
//! let letter = session.render(&RenderPipeline::new(), &config.profile)?;
//! ```

mod config;
mod engine;
mod errors;
mod find;
mod overrides;
mod pipeline;
mod scanner;
mod session;
mod store;
mod undo_stack;

pub use config::{Config, EditorOptions, DEFAULT_CONFIG_NAME, TEMPLATES_DIR_NAME};
pub use engine::{profile_value, GoTemplateEngine, TemplateEngine};
pub use errors::{EditorError, EditorResult};
pub use find::{find, TextMatch};
pub use overrides::{FieldEntry, OverrideStore};
pub use pipeline::RenderPipeline;
pub use scanner::{is_field_name, scan};
pub use session::EditSession;
pub use store::{has_template_extension, sanitize_file_name, TemplateStore, TEMPLATE_EXTENSIONS};
pub use undo_stack::{EditHistory, RedoPolicy, DEFAULT_CAPACITY};

// Re-export profile types for convenience
pub use covlet_profile::{merge, OverrideMap, Profile, ScalarField};
