//! Template catalog — merging, grouping, filtering, and eligibility.
//!
//! Everything here is a pure function of its inputs. The catalog is rebuilt
//! whenever the user's templates or the built-in visibility setting change,
//! and narrowed per query and selection state on every render.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌────────────────┐
//! │ built-in set │──▶│ build_catalog │──▶│ group_by_      │
//! │ + user tmpls │   │ (users first) │   │ category       │
//! └──────────────┘   └───────────────┘   └───────┬────────┘
//!                                                │
//!                         ┌──────────────────────┴─────┐
//!                         │ matches_query / is_eligible │
//!                         │ build_sections (sidebar)    │
//!                         └─────────────────────────────┘
//! ```

mod builder;
mod catalog;
mod filter;
pub mod sections;

pub use builder::{build_catalog, group_by_category};
pub use catalog::Catalog;
pub use filter::{filter_templates, is_eligible, matches_query};
pub use sections::{Section, SectionItem, SectionKind, SectionOptions, build_sections};
