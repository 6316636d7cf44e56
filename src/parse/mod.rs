//! Markup parsing and metadata extraction.
//!
//! This module provides:
//! - `Document`, a permissive parse of the page markup with tag and attribute queries
//! - The field rule catalog and its "first non-empty wins" evaluator
//! - `MetaProfile` extraction (SEO, Open Graph, Twitter card, technical fields)
//! - Bulk collection of every `<meta>` and `<link>` element
//!
//! Nothing here fails once a `Document` exists: lookups that miss yield `""`.

mod collect;
mod document;
mod profile;
mod rules;

// Re-export public API
pub use collect::{collect_links, collect_meta_tags, LinkEntry, RawMetaEntry};
pub use document::Document;
pub use profile::{extract_profile, MetaProfile};
pub use rules::{first_non_empty, Field, FieldRule, Filter, Lookup, Read, FIELD_RULES};
