// Core models
pub mod tournament;
pub mod team;
pub mod player;
pub mod match_models;
pub mod goal_event;

// Re-export commonly used types
pub use tournament::*;
pub use team::*;
pub use player::*;
pub use match_models::*;
pub use goal_event::*;
