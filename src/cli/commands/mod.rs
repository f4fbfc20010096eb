pub mod formats;
pub mod probe;
pub mod resize;

pub use formats::*;
pub use probe::*;
pub use resize::*;
