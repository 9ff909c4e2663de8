pub mod csv_rewriter;
pub mod reporter;
pub mod severity_source;
pub mod snyk_api;
