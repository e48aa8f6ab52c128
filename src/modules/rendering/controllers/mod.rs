pub mod render_controller;

pub use render_controller::configure;
