use std::fs;
use std::path::Path;

fn main() {
    let static_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(static_dir);
        fs::create_dir_all(static_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            static_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    }

    // include_dir! needs static/dist to exist even before the first trunk build.
    let embedded = static_dir.join("dist");
    if !embedded.exists() {
        fs::create_dir_all(&embedded).unwrap();
        fs::write(
            embedded.join("index.html"),
            "<!doctype html><title>Gradway admin</title><p>Frontend bundle missing. Run `trunk build` in frontend/ and rebuild.</p>\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
