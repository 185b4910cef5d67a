//! Knot tube command-line tool
//!
//! Builds a tube mesh around one of the knot families and either prints a
//! summary or exports the vertex/index buffers for a renderer.
//!
//! # Usage
//!
//! ```bash
//! # Print statistics for the default trefoil
//! knot_viewer --summary
//!
//! # Export a (3, 7) torus knot as JSON buffers
//! knot_viewer --json knot.json --family torus-knot --p 3 --q 7
//!
//! # Export binary buffers from a parameter file, using twist-free frames
//! knot_viewer --bin knot.bin --params celtic.json --rmf
//! ```

mod args;

use std::path::Path;
use std::process;

use knot_core::Result;
use knot_geometry::{curve_to_polyline, polyline_length, CurveParameters, FrameMode, KnotCurve};
use knot_mesh::TubeTessellator;
use knot_render::TubeBuffers;

use args::{parse_args, CliOptions, Command};

fn print_usage() {
    eprintln!(
        r#"Knot tube viewer CLI

USAGE:
    knot_viewer --summary [OPTIONS]
    knot_viewer --json <output.json> [OPTIONS]
    knot_viewer --bin <output.bin> [OPTIONS]

COMMANDS:
    --summary             Print statistics about the generated tube
    --json <path>         Write {{"vertices": [...], "indices": [...]}}
    --bin <path>          Write compact little-endian binary buffers
    --help                Show this help message

OPTIONS:
    --params <file.json>  Load parameters from JSON (flags below override it)
    --family <name>       trefoil | figure-eight | cinquefoil | torus-knot | lissajous | celtic
    --scale <f>           Uniform scale (default 3.0)
    --radius <f>          Tube radius (default 0.3)
    --resolution <n>      Rings along the curve (default 200)
    --segments <n>        Points per ring (default 20)
    --p <n> --q <n>       Torus knot winding numbers
    --nx/--ny/--nz <n>    Lissajous frequencies
    --star-points <n>     Celtic star points
    --star-skip <n>       Celtic star skip
    --rmf                 Use rotation-minimizing frames instead of arbitrary-axis frames
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("Error: {}\n", msg);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&opts) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(opts: &CliOptions) -> Result<()> {
    match &opts.command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Summary => {
            println!("{}", summarize(&opts.params, opts.frame_mode)?);
            Ok(())
        }
        Command::Json(path) => export(opts, path, |buffers, path| buffers.write_json(path)),
        Command::Binary(path) => export(opts, path, |buffers, path| buffers.write_binary(path)),
    }
}

fn export<F>(opts: &CliOptions, path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&TubeBuffers, &Path) -> Result<()>,
{
    log::info!(
        "Generating {} tube: {} rings x {} segments ({:?})",
        opts.params.family,
        opts.params.resolution,
        opts.params.radial_segments,
        opts.frame_mode
    );
    let buffers = TubeBuffers::generate_with(&opts.params, opts.frame_mode)?;
    write(&buffers, path)?;
    eprintln!(
        "Exported {} vertices, {} triangles to {}",
        buffers.vertex_count(),
        buffers.triangle_count(),
        path.display()
    );
    Ok(())
}

/// Human-readable statistics for one generated tube.
fn summarize(params: &CurveParameters, mode: FrameMode) -> Result<String> {
    let mesh = TubeTessellator::new().with_frame_mode(mode).tessellate(params)?;
    let bounds = mesh.bounding_box();
    let curve = KnotCurve::new(params.clone());
    let length = polyline_length(&curve_to_polyline(&curve, params.resolution)?);

    // Ring 0 and ring `resolution` sit on the same curve point; any distance
    // between their vertices is the frame mismatch at the seam.
    let stride = params.radial_segments as usize + 1;
    let last = mesh.positions.len() - stride;
    let seam_gap = (0..stride)
        .map(|j| mesh.positions[j].distance(mesh.positions[last + j]))
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str(&format!("Family:        {}\n", params.family));
    out.push_str(&format!("Frames:        {:?}\n", mode));
    out.push_str(&format!(
        "Grid:          {} rings x {} segments\n",
        params.resolution, params.radial_segments
    ));
    out.push_str(&format!("Vertices:      {}\n", mesh.vertex_count()));
    out.push_str(&format!("Triangles:     {}\n", mesh.triangle_count()));
    out.push_str(&format!("Curve length:  {:.4}\n", length));
    out.push_str(&format!(
        "Bounds:        [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]\n",
        bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
    ));
    out.push_str(&format!("Seam gap:      {:.6}", seam_gap));
    Ok(out)
}
