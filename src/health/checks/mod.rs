//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod input;
pub mod system_info;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use input::InputCheck;
pub use system_info::SystemInfoCheck;
