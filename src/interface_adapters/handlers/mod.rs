pub mod files;
pub mod multiplayer;
pub mod scenarios;
pub mod system;
