pub mod catalog;
pub mod clear;
pub mod formats;
pub mod generate;
pub mod import;
pub mod preferences;
pub mod select;
pub mod status;
