// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every route here sits behind `middleware::require_bearer`, which verifies the
// token once and injects `AuthUser` into request extensions.
pub mod algorithms;
pub mod session;

pub use algorithms::{
    average, binary_search, bubble_sort, filter_even, max_value, median, min_value, sum_elements,
};
pub use session::protected;
