// Copyright @yucwang 2026

pub mod brdf;
pub mod integrator;
pub mod interaction;
pub mod rng;
pub mod scene;
pub mod sensor;
