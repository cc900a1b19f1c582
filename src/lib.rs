//! Measurement rulers and guide lines for artboard canvases.
//!
//! The crate lays out a ruler overlay (bars, ticks, labels, guide lines and a
//! move marker) on a host canvas reached through the [`canvas::Canvas`]
//! trait, and keeps each artboard's guide lines in a key/value store. The
//! command-line tool built from `main.rs` inspects that store.

pub mod canvas;
pub mod config;
pub mod ruler;
pub mod storage;
pub mod util;

pub use canvas::{Canvas, CanvasObject, PointerEvent, Scene};
pub use config::Config;
pub use ruler::{CanvasEvent, ColorScheme, GuideAxis, GuideLine, Ruler, RulerAction, RulerStyle};
pub use storage::{FileStore, GuideStore, KeyValueStore, MemoryStore, StoreError};
