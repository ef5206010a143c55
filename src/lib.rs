pub mod config;
pub mod error;
pub mod schedule;
pub mod startup;
pub mod web;
