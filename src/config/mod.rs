//! Configuration for a scaffolding run.
//!
//! - Value types ([`Transport`], [`PackageManager`], [`ResolvedConfig`]) in [`schema`]
//! - Argument/prompt reconciliation in [`resolver`]
//!
//! # Example
//!
//! ```
//! use create_smithery::config::{ConfigResolver, ResolveArgs, Transport};
//! use create_smithery::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let resolver = ConfigResolver::new(temp.path());
//! let mut ui = MockUI::new();
//!
//! let args = ResolveArgs {
//!     project_name: Some("my-app".to_string()),
//!     gpt: true,
//!     ..Default::default()
//! };
//! let config = resolver.resolve(&args, &mut ui).unwrap();
//! assert_eq!(config.transport, Transport::Http);
//! ```

pub mod resolver;
pub mod schema;

pub use resolver::{
    ConfigResolver, ResolveArgs, DEFAULT_PROJECT_NAME, PACKAGE_MANAGER_KEY, PROJECT_NAME_KEY,
    TRANSPORT_KEY,
};
pub use schema::{PackageManager, ResolvedConfig, Transport};
