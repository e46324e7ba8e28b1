pub mod pointer;
pub mod tilt;

pub use pointer::wire_follower;
pub use tilt::wire_cards;
