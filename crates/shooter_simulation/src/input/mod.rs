//! Player input module
//!
//! ```text
//! Keyboard/mouse (client bindings) или scripted input (headless, tests)
//!     ↓
//! MoveInput / LookInput / FireInput / JumpInput (ECS events) - events.rs
//!     ↓
//! CharacterController systems (controller/)
//! ```

pub mod events;

pub use events::*;
