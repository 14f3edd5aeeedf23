pub mod ad_block;
pub mod api;
pub mod config;
pub mod error;
pub mod tool;
pub mod view;

pub use ad_block::*;
pub use api::*;
pub use config::*;
pub use error::*;
pub use tool::*;
pub use view::*;
