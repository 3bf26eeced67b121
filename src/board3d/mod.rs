pub mod meshes;
pub mod picking;
pub mod rules;
pub mod systems;
pub mod textures;
pub mod types;

pub use meshes::*;
pub use picking::*;
pub use rules::*;
pub use systems::*;
pub use textures::*;
pub use types::*;
