//! RayPath ray tracer foundations
//!
//! Implements the homogeneous-coordinate tuple algebra from the opening
//! chapter of The Ray Tracer Challenge, plus the text parser the command
//! line front end uses to read points and vectors.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod parser;
pub mod tuple;
