pub mod import;
pub mod init;
pub mod lists;
pub mod profile;
pub mod quiz;
pub mod stats;
pub mod validate;
pub mod words;
