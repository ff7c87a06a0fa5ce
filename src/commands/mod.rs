// Command handlers behind the CLI surface
pub mod list;
pub mod seed;
pub mod serve;
