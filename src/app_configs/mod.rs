pub mod errors;
pub mod models;
pub mod registry;
pub mod repo;
pub mod resolver;
pub mod rest;
