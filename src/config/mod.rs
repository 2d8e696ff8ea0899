pub mod bitmap;

pub use self::bitmap::{load_config, parse_config, BitmapOutputConfig, BitmapToolConfig};
