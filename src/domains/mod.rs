//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain covers one area of the catalog app: the selection catalog,
//! the tools exposed to the host, and the HTML views it embeds.

pub mod selections;
pub mod tools;
pub mod views;
