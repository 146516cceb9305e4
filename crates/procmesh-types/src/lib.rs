//! Core types for procedural mesh building.
//!
//! This crate provides the foundational types shared by the procmesh
//! operation crates:
//!
//! - [`Vertex`] - A 32-byte interleaved vertex record (position, normal, uv)
//! - [`ColorVertex`] - A 48-byte record with an additional RGBA color
//! - [`Triangle`] - An ordered triple of indices into a vertex array
//! - [`VertexAttribute`] / [`VertexLayout`] - Attribute layout description
//!
//! # Layout
//!
//! The vertex records are `#[repr(C)]` and [`bytemuck::Pod`], so a
//! `&[Vertex]` can be viewed as raw bytes and handed to whatever buffer
//! uploader the surrounding application uses. This crate itself performs no
//! GPU work.
//!
//! # Coordinate System
//!
//! All coordinates are `f32`. Face winding is **counter-clockwise when
//! viewed from outside**; normals follow the right-hand rule.
//!
//! # Example
//!
//! ```
//! use procmesh_types::{Triangle, Vertex};
//!
//! let quad = [
//!     Vertex::from_position([0.0, 0.0, 0.0]),
//!     Vertex::from_position([1.0, 0.0, 0.0]),
//!     Vertex::from_position([1.0, 1.0, 0.0]),
//!     Vertex::from_position([0.0, 1.0, 0.0]),
//! ];
//! let tris = [Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
//!
//! assert_eq!(quad.len(), 4);
//! assert_eq!(tris[1][2], 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod layout;
mod triangle;
mod vertex;

pub use layout::{VertexAttribute, VertexLayout, VertexSemantic};
pub use triangle::Triangle;
pub use vertex::{ColorVertex, Vertex};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector2, Vector3, Vector4};
