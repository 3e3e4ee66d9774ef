mod status;
mod title;
mod visibility;

pub use status::*;
pub use title::*;
pub use visibility::*;
