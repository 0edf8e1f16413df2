mod command_result;
pub mod diff;
pub mod helper;
pub mod init;
pub mod minify;
pub mod scan;

pub use command_result::*;
