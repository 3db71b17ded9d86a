//! Overlap and merge of numeric spaces.
//!
//! A [`Space`] is a range given by a start offset and a size. Two spaces can
//! be tested for overlap with [`can_merge`] (touching endpoints count) and
//! combined with [`merge`], which always returns their bounding space.
//!
//! ```rust
//! use spacemerge_core::{Space, can_merge, merge};
//!
//! let a = Space::new(0u32, 5);
//! let b = Space::new(5, 3);
//!
//! assert!(can_merge(&a, &b));
//! assert_eq!(merge(&a, &b), Space::new(0, 8));
//! ```
//!
//! `merge` does not look at overlap. Disjoint spaces are bridged:
//!
//! ```rust
//! use spacemerge_core::Space;
//!
//! let a = Space::new(0, 2);
//! let b = Space::new(10, 2);
//!
//! assert!(!a.can_merge(&b));
//! assert_eq!(a.merge(&b), Space::new(0, 12));
//! assert_eq!(a.try_merge(&b), None);
//! ```

pub mod errors;
pub mod models;

// re-exports
pub use self::errors::SpaceParseError;
pub use self::models::{Space, can_merge, merge};
