// Copyright @yucwang 2026

use madeleine::integrators::path::PathIntegrator;
use madeleine::io::png_utils;
use madeleine::math::constants::{Float, UInt, Vector3f};
use madeleine::renderers::simple::{Renderer, SimpleRenderer};
use madeleine::scenes;
use madeleine::sensors::perspective::PerspectiveCamera;

use std::env;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut output_path = String::from("out.png");
    let mut spp: UInt = 16;
    let mut max_depth: UInt = 2;
    let mut seed: u64 = 0;
    let mut rows: usize = 720;
    let mut cols: usize = 1280;
    let mut scene_name = String::from("rtweekend");
    let mut parallel = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<UInt>().ok()).unwrap_or(spp);
            }
            "--max-depth" => {
                i += 1;
                max_depth = args
                    .get(i)
                    .and_then(|v| v.parse::<UInt>().ok())
                    .unwrap_or(max_depth);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--rows" => {
                i += 1;
                rows = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(rows);
            }
            "--cols" => {
                i += 1;
                cols = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(cols);
            }
            "--scene" => {
                i += 1;
                if let Some(name) = args.get(i) {
                    scene_name = name.clone();
                }
            }
            "--serial" => {
                parallel = false;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [output.png] [--spp N] [--max-depth N] [--seed N] \
                     [--rows N] [--cols N] [--scene NAME] [--serial]",
                    args[0]
                );
                std::process::exit(0);
            }
            other => {
                output_path = other.to_string();
            }
        }
        i += 1;
    }

    let scene = match scenes::by_name(&scene_name) {
        Some(scene) => scene,
        None => {
            eprintln!("Unknown scene: {}", scene_name);
            std::process::exit(1);
        }
    };

    let camera = PerspectiveCamera::new(
        Vector3f::new(0.0, 2.0, 5.0),
        Vector3f::new(0.0, 1.0, 0.0),
        45.0,
        (cols as Float) / (rows as Float),
    );

    log::info!(
        "Rendering scene '{}' at {}x{}, {} spp, max depth {}, seed {}.",
        scene_name,
        cols,
        rows,
        spp,
        max_depth,
        seed
    );

    let integrator = Box::new(PathIntegrator::new(max_depth));
    let renderer = SimpleRenderer::new(integrator, cols, rows, spp, seed, parallel);
    let image = renderer.render(&scene, &camera);

    if let Err(err) = png_utils::write_png_to_file(&image, &output_path) {
        log::error!("Failed to write {}: {}", output_path, err);
        std::process::exit(1);
    }
    log::info!("All ok!");
}
