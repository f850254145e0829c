pub mod json;

pub use json::ValidJson;
