//! A library for reading twisty puzzle move notation and simulating NxNxN cubes.
//!
//! ```rust
//! use cubic::cube::Cube;
//! use cubic::notation::parse_notation;
//!
//! let moves = parse_notation("[R U R', D]").unwrap().expand().unwrap();
//! assert_eq!(moves.to_string(), "R U R' D R U' R' D'");
//!
//! let mut cube = Cube::new(4);
//! cube.execute_moves(&moves).execute_moves(&moves.inverse());
//! assert!(cube.is_solved());
//! ```

#![deny(missing_docs)]

pub mod cube;
pub mod error;
pub mod moves;
pub mod notation;
