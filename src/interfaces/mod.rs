pub mod http;
pub mod state;
pub mod view;
