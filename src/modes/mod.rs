pub mod autoplay;

pub use autoplay::AutoplayMode;
