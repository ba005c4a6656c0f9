//! Smog - force-based 2D graph layout.
//!
//! Graph nodes become charged particles that repel each other, edges become
//! springs that pull their endpoints together, and the system is integrated
//! one time step at a time until its kinetic energy settles.
//!
//! - [`ForceLayout`]: the engine, driven through [`GraphLayout`]
//! - [`force`]: the [`Force`](force::Force) trait with [`Repulsion`](force::Repulsion)
//!   and [`SpringForce`](force::SpringForce)
//! - [`bounds`]: optional rectangle particles are clamped into
//! - [`config`]: deserializable engine parameters
//!
//! Deciding when to stop stepping is left to the caller:
//!
//! ```
//! use smog::{ForceLayout, GraphLayout, config::LayoutConfig};
//!
//! fn run<L: GraphLayout<u32, (u32, u32)>>(layout: &mut L, max_iterations: usize) -> usize {
//!     let mut iterations = 0;
//!     while iterations < max_iterations && layout.step(1.0) {
//!         iterations += 1;
//!     }
//!     layout.terminate();
//!     iterations
//! }
//!
//! let mut layout = ForceLayout::from_config(&LayoutConfig::default().with_seed(1));
//! layout.init(0..4, [(0, 1), (1, 2), (2, 3)]).unwrap();
//! run(&mut layout, 500);
//! assert_eq!(layout.positions().count(), 4);
//! ```

pub mod bounds;
pub mod config;
pub mod force;

mod error;
mod layout;

pub use smog_core::{geometry, graph, identifier, particle, spring};

pub use error::{Endpoint, SmogError};
pub use layout::{ForceLayout, GraphLayout, LayoutState, PhysicalLayout};
