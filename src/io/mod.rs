// Copyright @yucwang 2026

pub mod png_utils;
