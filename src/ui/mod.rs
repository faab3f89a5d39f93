//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled text through composable
//! rendering components. It provides theme support, query match highlighting
//! and avatar badges.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! SelectState → compute_viewmodel → SelectViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable control state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//! - [`avatar`], [`avatar_group`]: User badges
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::{SelectMode, SelectState};
//! use selectkit::ui::{render, Theme};
//!
//! let state = SelectState::new(SelectMode::Single, Theme::default());
//! let frame = render(&state);
//! assert!(frame.ends_with('\n'));
//! ```

pub mod avatar;
pub mod avatar_group;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use avatar::{Avatar, AvatarColor, AvatarSize, AvatarStyle};
pub use avatar_group::AvatarGroup;
pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, ThemeColors};
pub use viewmodel::{EmptyState, OptionRow, SearchBarInfo, SelectAllInfo, SelectViewModel};
