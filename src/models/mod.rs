//! Data models for key pairs, layouts, and the edit target.
//!
//! Models are independent of the terminal front-end and hold no UI state.

pub mod key_pair;
pub mod layout;
pub mod target;

pub use key_pair::{ControlKey, KeyPair};
pub use layout::{KeyPosition, Layout, Slot};
pub use target::TargetField;
