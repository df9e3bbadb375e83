//! Hostname resolution backed by the operating system resolver.

mod system_resolver;

pub use system_resolver::SystemResolver;
