pub mod accordion;
pub mod catalog;
pub mod coordinator;
pub mod error;
pub mod feedback;
pub mod mcp_api;
pub mod model;
pub mod page;
pub mod repository;
pub mod search;
