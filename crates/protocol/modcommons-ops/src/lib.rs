//! Metadata gateway over the module SDK.
//!
//! Every read and write of module metadata flows through
//! [`MetadataGateway`], the single choke point that applies the three
//! cross-cutting concerns the raw SDK does not know about:
//!
//! 1. **Link encoding** - incoming identifiers are normalized from their
//!    `mod://KEY+V` presentation form, outgoing ones re-encoded.
//! 2. **Title renaming** - a profile's display field is exposed as
//!    `name`, a content module's as `title`; storage only knows `title`.
//! 3. **Update policy** - a `set` payload may only change allow-listed
//!    keys, and changed values must pass their field validators. Both
//!    checks run before the SDK is asked to mutate anything.
//!
//! The concerns are implemented as an ordered pipeline of pure
//! functions (see [`transform`]) applied around the SDK call, so each
//! stage is testable in isolation.

pub mod gateway;
pub mod transform;

pub use gateway::{MetadataGateway, ModuleUpdate};
pub use transform::{export_field, export_record, import_key};
