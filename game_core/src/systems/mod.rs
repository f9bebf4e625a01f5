pub mod bullets;
pub mod collision;
pub mod effects;
pub mod firing;
pub mod movement;

pub use bullets::*;
pub use collision::*;
pub use effects::*;
pub use firing::*;
pub use movement::*;
