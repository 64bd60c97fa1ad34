pub mod consts;
pub mod error;
pub mod filelist;
pub mod job;
pub mod manifest;
pub mod metadata;
pub mod split;
