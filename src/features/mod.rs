pub mod blocked;
pub mod hosts;
pub mod hours;
pub mod resources;

pub use blocked::blocked_indices;
pub use hosts::top_hosts;
pub use hours::busiest_windows;
pub use resources::top_resources;
