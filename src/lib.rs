//! Perth property sales explorer: a server-rendered page with searchable
//! multi-select filters and a clustered sales map.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod filters;
pub mod map;
pub mod page;
pub mod responses;
pub mod router;
pub mod templates;

#[cfg(test)]
mod tests;
