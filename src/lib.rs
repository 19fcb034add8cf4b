pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod models;
pub mod profile;
pub mod ui;
