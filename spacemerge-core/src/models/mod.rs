pub mod space;

// re-export for cleaner imports
pub use self::space::{Space, can_merge, merge};
