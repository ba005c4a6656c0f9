//! Smog Core Types and Definitions
//!
//! This crate provides the data model shared by the Smog layout engine and its
//! callers. It includes:
//!
//! - **Geometry**: The [`geometry::Vector`] value type used for positions,
//!   velocities and forces
//! - **Identifiers**: String-interned node names ([`identifier::NodeId`])
//! - **Graph**: The [`graph::Node`] and [`graph::Edge`] capabilities callers
//!   implement to hand a graph to a layout
//! - **Physics**: Simulated bodies ([`particle::Particle`]) and the elastic
//!   constraints between them ([`spring::Spring`])

pub mod geometry;
pub mod graph;
pub mod identifier;
pub mod particle;
pub mod spring;
