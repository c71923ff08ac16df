// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: render the four orthographic plan views of a wall ring
//!
//! Reads the surrounding system's wall JSON (or a built-in demo building)
//! and writes one SVG per view direction with the visible walls
//! highlighted.
//!
//! Usage:
//!   plan-views <walls.json | --demo> [options]

use plan_lite_floorplan::{load_walls, FloorPlanSvg};
use plan_lite_geometry::{
    analyze_walls, walls_from_outline, BoundaryWall, Point2D, ViewDirection, VisibilityConfig,
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    // Parse options
    let mut out_dir = PathBuf::from(".");
    let mut size: f64 = 200.0;
    let mut dump_json = false;
    let mut debug_mode = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--out-dir" => {
                i += 1;
                out_dir = PathBuf::from(&args[i]);
            }
            "--size" => {
                i += 1;
                size = args[i].parse().expect("Invalid size value");
            }
            "--json" => {
                dump_json = true;
            }
            "--debug" => {
                debug_mode = true;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let walls = if args[1] == "--demo" {
        demo_staircase()
    } else {
        match load_walls(Path::new(&args[1])) {
            Ok(walls) => walls,
            Err(e) => {
                eprintln!("Failed to load {}: {}", args[1], e);
                std::process::exit(1);
            }
        }
    };
    println!("Loaded {} walls", walls.len());

    let config = VisibilityConfig::default();
    let report = match analyze_walls(&walls, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Visibility analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    let style = FloorPlanSvg {
        width: size,
        height: size,
        ..FloorPlanSvg::default()
    };

    if let Err(e) = fs::create_dir_all(&out_dir) {
        eprintln!("Cannot create {}: {}", out_dir.display(), e);
        std::process::exit(1);
    }

    for direction in ViewDirection::ALL {
        let visible = report.for_direction(direction);
        let svg = style.generate(&walls, visible);
        let path = out_dir.join(format!("plan_{}.svg", direction.as_str()));
        if let Err(e) = fs::write(&path, svg) {
            eprintln!("Cannot write {}: {}", path.display(), e);
            std::process::exit(1);
        }
        let mut indices: Vec<usize> = visible.iter().copied().collect();
        indices.sort_unstable();
        println!(
            "{:<7} {} visible walls {:?} -> {}",
            direction.as_str(),
            visible.len(),
            indices,
            path.display()
        );
    }

    if dump_json {
        let path = out_dir.join("visibility.json");
        let json = serde_json::to_string_pretty(&report).expect("report serialization");
        if let Err(e) = fs::write(&path, json) {
            eprintln!("Cannot write {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Report -> {}", path.display());
    }

    if debug_mode {
        let path = out_dir.join("plan_normals_debug.svg");
        match style.generate_normals_debug(&walls, &config) {
            Ok(svg) => {
                if let Err(e) = fs::write(&path, svg) {
                    eprintln!("Cannot write {}: {}", path.display(), e);
                    std::process::exit(1);
                }
                println!("Normals overlay -> {}", path.display());
            }
            Err(e) => {
                eprintln!("Cannot render normals overlay: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Demo building: a staircase-shaped outline with eight steps
fn demo_staircase() -> Vec<BoundaryWall> {
    let mut outline = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(16.0, 0.0),
        Point2D::new(16.0, 16.0),
    ];
    let mut x = 16.0;
    let mut y = 16.0;
    for _ in 0..8 {
        x -= 2.0;
        outline.push(Point2D::new(x, y));
        y -= 2.0;
        outline.push(Point2D::new(x, y));
    }
    outline.pop();
    walls_from_outline(&outline, 0.5)
}

fn print_usage() {
    println!("plan-views - render orthographic floor plan views");
    println!();
    println!("Usage:");
    println!("  plan-views <walls.json | --demo> [options]");
    println!();
    println!("Options:");
    println!("  --out-dir <dir>   Output directory (default: current)");
    println!("  --size <n>        SVG viewport size in px (default: 200)");
    println!("  --json            Also write visibility.json");
    println!("  --debug           Also write a normals overlay SVG");
    println!("  -h, --help        Show this help");
}
