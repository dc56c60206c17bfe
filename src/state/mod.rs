//! Shared widget state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `messages`, `theme`) so individual
//! components can depend on small focused models. Each widget instance owns
//! its own copies; nothing here is shared across instances.

pub mod messages;
pub mod session;
pub mod theme;
