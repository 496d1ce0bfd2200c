pub mod logger;
pub mod mask;
pub mod time;

pub use mask::{mask_key, mask_url};
pub use time::format_duration;
