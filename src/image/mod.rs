pub mod frame;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::frame::Frame;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::ImageU8;
