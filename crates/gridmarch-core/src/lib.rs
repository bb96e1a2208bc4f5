//! Core tile-map primitives for turn-based tactics games.
//!
//! This crate provides the small value types everything else builds on:
//!
//! - [`Coord`] — integer cell coordinate
//! - [`Bounds`] — half-open map rectangle
//! - [`Biome`] — terrain category
//! - [`Tile`] — per-cell terrain attributes
//! - [`TileMap`] — dense grid of tiles

pub mod geom;
pub mod tiles;

pub use geom::{Bounds, Coord};
pub use tiles::{Biome, Tile, TileMap};
