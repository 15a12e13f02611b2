// Copyright @yucwang 2026

pub mod diffuse;
pub mod rough_diffuse;
pub mod specular;
