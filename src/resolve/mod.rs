//! URL resolution: extension classification, gallery metadata, and
//! site-specific domain resolvers.

pub mod classify;
pub mod gallery;
pub mod imgur;
pub mod redgifs;
pub mod registry;

pub use classify::{classify, MediaUrl, Resolution};
pub use gallery::{is_gallery_url, resolve_gallery};
pub use registry::{registrable_domain, DomainResolver, ResolverRegistry};
