//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod canvas;
pub mod viewport;
