pub mod io;
pub mod source;
pub mod traits;
pub mod u8;

pub use self::io::GrayImageU8;
pub use self::source::SourceImage;
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
