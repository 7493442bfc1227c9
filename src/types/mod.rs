//! Types used throughout the library, which do not belong to any particular structure.

pub mod err;
