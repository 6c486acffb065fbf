// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! A decorative, procedurally morphing 3D blob that periodically breaks
//! into satellites and rejoins, rendered with wgpu.
//!
//! # Key entry points
//!
//! - [`engine::BlobAnimator`] - owns the scene and advances it once per
//!   frame
//! - [`scene::Scene`] - camera, lights, the main blob and its satellites
//! - [`animation`] - the break/rejoin phase machine, the opacity table and
//!   the vertex morph
//! - [`options::Options`] - tuning constants, loadable from TOML
//!
//! # Architecture
//!
//! The animator talks to its environment through three traits: a
//! [`engine::SurfaceHost`] container, a [`engine::RenderBackend`] and a
//! [`engine::FrameScheduler`]. Every frame it advances the
//! [`animation::AnimationClock`], re-derives the main blob's live vertices
//! from its immutable reference shape, moves the satellites, applies the
//! phase's visibility/opacity table, sways the camera and hands the scene
//! to the backend. [`renderer::WgpuBackend`] is the bundled backend and
//! the `viewer` feature wraps everything in a winit window.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod lighting;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::BlobAnimator;
pub use error::MorphError;
pub use input::InputEvent;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
