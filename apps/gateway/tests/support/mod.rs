#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod upstream;

pub use app_builder::create_test_app;
