pub mod config;
pub mod files;
pub mod guess;
pub mod manifest;
pub mod plates;
pub mod run;
