use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Plain power-law gamma decode used by the quantizer's distance metric.
fn gamma_decode_exact(channel: f64) -> f64 {
    channel.powf(2.2)
}

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Generate GAMMA_DECODE LUT (256 entries, one per 8-bit channel value)
    writeln!(file, "/// Lookup table for gamma-2.2 channel decode").unwrap();
    writeln!(file, "/// Index: 8-bit channel value, Value: (v/255)^2.2").unwrap();
    writeln!(file, "pub static GAMMA_DECODE: [f64; 256] = [").unwrap();
    for i in 0..256 {
        let decoded = gamma_decode_exact(i as f64 / 255.0);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:.15},", decoded).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    writeln!(file).unwrap();

    // Generate SRGB_DECODE LUT (256 entries)
    writeln!(file, "/// Lookup table for sRGB channel decode").unwrap();
    writeln!(file, "/// Index: 8-bit channel value, Value: linear light").unwrap();
    writeln!(file, "pub static SRGB_DECODE: [f64; 256] = [").unwrap();
    for i in 0..256 {
        let linear = srgb_to_linear_exact(i as f64 / 255.0);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:.15},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    // Rerun if build.rs changes
    println!("cargo::rerun-if-changed=build.rs");
}
