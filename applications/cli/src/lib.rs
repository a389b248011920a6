/// Quaver command-line front end
pub mod render;
pub mod store;
