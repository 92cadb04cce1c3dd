pub mod a001_project;
pub mod common;
