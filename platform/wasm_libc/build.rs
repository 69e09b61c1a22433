use cbindgen::{Builder, Config};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Maps a module directory to the header it is emitted as, e.g.
/// `bits_stdint` to `bits/stdint.h`.
fn header_name(module_dir: &Path) -> PathBuf {
    let module = module_dir
        .file_name()
        .and_then(|name| name.to_str())
        .expect("module directory name must be valid UTF-8");
    PathBuf::from(module.replace('_', "/")).with_extension("h")
}

fn main() {
    let crate_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let src_dir = crate_dir.join("src");
    let headers_dir = crate_dir.join("headers");

    println!("cargo:rerun-if-changed={}", src_dir.display());

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && e.file_name() == "cbindgen.toml")
    {
        let config_path = entry.path();
        let module_dir = config_path
            .parent()
            .expect("cbindgen.toml must live in a module directory");
        let out_path = headers_dir.join(header_name(module_dir));

        let config = Config::from_file(config_path).unwrap_or_else(|e| {
            panic!("invalid cbindgen config {}: {e}", config_path.display())
        });

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("cannot create {}: {e}", parent.display()));
        }

        Builder::new()
            .with_src(module_dir.join("mod.rs"))
            .with_config(config)
            .generate()
            .unwrap_or_else(|e| panic!("cannot generate {}: {e}", out_path.display()))
            .write_to_file(&out_path);
    }
}
