pub mod api;
pub mod coordinator;
pub mod entities;
pub mod error;
pub mod external;
pub mod server;
