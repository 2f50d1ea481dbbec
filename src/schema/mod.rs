//! Content schema: type declarations and document records.
//!
//! - [`registry`]: static [`ContentTypeDecl`] literal and [`LinkableTypeSet`]
//! - [`document`]: routing-relevant view of exported CMS documents

mod document;
mod registry;

pub use document::Document;
pub use registry::{
    CONTENT_TYPES, ContentTypeDecl, LinkableTypeSet, compute_linkable_types, find_content_type,
};
