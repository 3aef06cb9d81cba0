//! Configuration loading for the staff payroll binary.
//!
//! Settings live in an optional YAML file; command line flags override them.
//!
//! # Example
//!
//! ```no_run
//! use staff_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Staff file: {}", config.data_file.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DEFAULT_DATA_FILE, DEFAULT_LOG_LEVEL};
