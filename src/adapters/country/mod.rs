//! Country directory adapters.
//!
//! Implement the `CountryDirectory` enrichment used when rendering the
//! country line of a notification.

mod static_directory;

pub use static_directory::StaticCountryDirectory;
