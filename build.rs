use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=resources/Info.plist");
    println!("cargo:rerun-if-changed=resources/entitlements.plist");

    // Stage bundle resources next to the build output when they exist. The
    // bare binary runs without them; the .app bundle packaging expects them.
    let out_dir = env::var("OUT_DIR").unwrap();
    let resources_dir = Path::new("resources");
    if resources_dir.exists() {
        let target_dir = Path::new(&out_dir).join("resources");
        fs::create_dir_all(&target_dir).unwrap();
        for entry in fs::read_dir(resources_dir).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), target_dir.join(entry.file_name())).unwrap();
        }
    }

    // Event taps and the AX APIs SwipeTile drives need a modern baseline.
    println!("cargo:rustc-env=MACOSX_DEPLOYMENT_TARGET=12.0");
}
