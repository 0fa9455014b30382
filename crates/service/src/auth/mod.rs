pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
