pub mod compute;
pub mod render;

pub use compute::summarize;
pub use render::render_summary;
