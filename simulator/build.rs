//! Build script for cluster-simulator
//!
//! Points the linker at a vendored SDL2 on Windows and copies SDL2.dll next
//! to the binary. Other platforms use the system SDL2.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        return;
    };
    let Some(workspace_dir) = manifest_dir.parent() else {
        return;
    };
    let vendor_sdl2 = workspace_dir.join("vendor").join("sdl2");
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}, using system SDL2", vendor_sdl2.display());
        return;
    }
    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    if let Some(out_dir) = env::var_os("OUT_DIR") {
        copy_dll(&vendor_sdl2, Path::new(&out_dir));
    }
}

/// OUT_DIR is `target/<profile>/build/cluster-simulator-*/out`; the DLL goes
/// in `target/<profile>`.
fn copy_dll(
    vendor_sdl2: &Path,
    out_dir: &Path,
) {
    let Some(profile_dir) = out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
    else {
        return;
    };

    let src = vendor_sdl2.join("SDL2.dll");
    let dst = profile_dir.join("SDL2.dll");
    if src.exists() && !dst.exists() {
        if let Err(e) = fs::copy(&src, &dst) {
            println!("cargo:warning=Failed to copy SDL2.dll: {e}");
        }
    }
}
