//! Small pure helpers shared by the command and generator layers.

pub mod plural;
pub mod slug;
pub mod url;

pub use plural::{plural_count, plural_s};
pub use slug::slugify;
pub use url::{encode_path, is_web_url};
