//! HTTP request handlers

pub mod enrich;
pub mod health;
pub mod pages;
