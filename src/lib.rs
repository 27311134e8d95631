pub mod audit;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod models;
pub mod money;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
