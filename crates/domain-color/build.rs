use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 exact formula: linear to sRGB
fn linear_to_srgb_exact(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(std::io::Error::other)?;
    let dest_path = Path::new(&out_dir).join("srgb_lut.rs");
    let mut file = File::create(&dest_path)?;

    // LINEAR_TO_SRGB LUT (4096 entries)
    writeln!(file, "/// Lookup table for linear to sRGB conversion")?;
    writeln!(file, "/// Index: linear value * 4095.0, Value: sRGB value")?;
    writeln!(file, "pub static LINEAR_TO_SRGB: [f32; 4096] = [")?;
    for i in 0..4096 {
        let linear = i as f64 / 4095.0;
        let srgb = linear_to_srgb_exact(linear);
        if i > 0 && i % 8 == 0 {
            writeln!(file)?;
        }
        write!(file, "    {:.9},", srgb as f32)?;
    }
    writeln!(file, "\n];")?;

    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
