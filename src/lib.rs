//! Devfile v1 schema: a declarative description of a cloud development
//! workspace and the projects, components and commands it is made of.
//!
//! The crate is a data contract only. [`DevfileSpec`] and the types it owns
//! mirror the devfile wire format field for field; loading a document is a
//! plain deserialization, and no execution or provisioning semantics live
//! here. Cross-references inside a devfile (a command action naming a
//! component alias, a volume name shared between components) are conventions
//! for the consumer, not enforced invariants.
//!
//! ```
//! use devfile_model::DevfileSpec;
//!
//! let devfile = DevfileSpec::from_yaml(
//!     "components:\n  - type: dockerimage\n    image: node:14\n",
//! )
//! .unwrap();
//! assert_eq!(devfile.components[0].image.as_deref(), Some("node:14"));
//! ```

pub mod error;
pub mod types;

pub use error::DevfileError;
pub use types::*;
