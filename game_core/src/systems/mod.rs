pub mod collision;
pub mod input;
pub mod movement;
pub mod pickups;
pub mod respawn;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use pickups::*;
pub use respawn::*;
