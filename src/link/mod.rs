//! Link fields and their resolution to hrefs.
//!
//! - [`reference`]: [`LinkReference`] sum type and [`ResolvedLink`]
//! - [`raw`]: flat studio records validated into [`LinkReference`]
//! - [`resolve`]: [`LinkResolver`] dispatch over the three link kinds

mod raw;
mod reference;
mod resolve;

pub use raw::{LinkShapeError, RawLink};
pub use reference::{DocumentRef, DownloadLink, InternalLink, LinkReference, ResolvedLink};
pub use resolve::{LinkResolver, ResolveMode};
