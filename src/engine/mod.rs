pub mod components;
pub mod error;
pub mod managers;
pub mod modules;
pub mod systems;

// Re-export all commonly used items for easy access
pub use components::*;
pub use error::{ TranslateError, TranslateResult };
pub use managers::*;
pub use modules::*;
pub use systems::*;
