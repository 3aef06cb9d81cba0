//! Staff payroll records with all-or-nothing persistence.
//!
//! This crate tracks staff in three employment categories (hourly, salaried
//! and intern), computes each category's compensation, and keeps the
//! records in a line-oriented storage backend. Every store operation either
//! completes in memory and in storage, or leaves memory exactly as it was.

#![warn(missing_docs)]

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
