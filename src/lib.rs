//! Studio layout planner: place equipment and people tokens on a canvas,
//! drag them around, and keep every camera and light cone aimed at the
//! canvas center.
//!
//! This crate compiles to WebAssembly for the browser and natively for
//! tests. It owns all planner state and logic. The host page wires DOM
//! events into [`engine::Engine`], draws the palette and background
//! selector from [`catalog::palette`] and [`background::Background::ALL`],
//! and reacts to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`placement`] | Add / commit / reset operations and spawn jitter |
//! | [`doc`] | Canvas model: placed tokens, id issuance, background selection |
//! | [`catalog`] | Token types, field-of-view cones, palette layout |
//! | [`background`] | Cosmetic background themes |
//! | [`geometry`] | Points, rectangles, and bearing math |
//! | [`camera`] | Screen ↔ canvas coordinate mapping |
//! | [`input`] | Pointer buttons, cursor, and the drag state machine |
//! | [`hit`] | Hit-testing against placed tokens |
//! | [`render`] | Canvas2D rendering |
//! | [`config`] | Planner configuration |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric constants |

pub mod background;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod placement;
pub mod render;

pub use config::PlannerConfig;
pub use error::PlannerError;
