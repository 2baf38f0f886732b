// Interface adapters: wire protocol, HTTP handlers and the route table.

pub mod catalog;
pub mod handlers;
pub mod http;
pub mod protocol;
pub mod routes;
pub mod state;
