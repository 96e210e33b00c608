//! # Covlet Profile
//!
//! The structured record a cover letter is rendered from, plus the
//! override layer applied on top of it for a single render.
//!
//! ```rust,ignore
//! use covlet_profile::{merge, OverrideMap, Profile};
//!
//! let base = Profile { name: "Alice".into(), ..Default::default() };
//! let mut overrides = OverrideMap::new();
//! overrides.insert("CompanyToApplyTo".into(), "Acme".into());
//!
//! let merged = merge(&base, &overrides);
//! assert_eq!(merged.company_to_apply_to, "Acme");
//! assert_eq!(base.company_to_apply_to, "");
//! ```

mod field;
mod merge;
mod profile;

pub use field::ScalarField;
pub use merge::{merge, OverrideMap};
pub use profile::{Education, Experience, Profile, Project};
