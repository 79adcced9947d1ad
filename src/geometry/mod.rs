mod box3;
mod extent;
mod oriented_bounding_box;
mod plane;

pub use box3::*;
pub use extent::*;
pub use oriented_bounding_box::*;
pub use plane::*;
