//! dotstub domain layer: call shapes, resolver defaults and argument
//! normalization for one-shot DNS-over-TLS queries.
pub mod args;
pub mod defaults;
pub mod errors;
pub mod params;

pub use args::{QueryArgs, QueryOptions};
pub use defaults::ResolverDefaults;
pub use errors::ArgumentError;
pub use params::QueryParams;
