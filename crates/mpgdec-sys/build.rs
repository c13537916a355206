use std::env;
use std::path::PathBuf;

// Oldest libmpg123 release that ships the portable 64-bit API (mpg123_seek64 and friends).
const MIN_MPG123_VERSION: &str = "1.32.0";

#[cfg(feature = "generate-bindings")]
fn write_bindings(out_bindings: &std::path::Path, include_paths: &[PathBuf]) {
    let mut builder = bindgen::Builder::default()
        .header("native/wrapper.h")
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .allowlist_function("mpg123_.*")
        .allowlist_type("mpg123_.*")
        .allowlist_var("MPG123_.*")
        .allowlist_var("SEEK_.*")
        .use_core()
        .ctypes_prefix("core::ffi");

    for path in include_paths {
        builder = builder.clang_arg(format!("-I{}", path.display()));
    }

    let bindings = builder.generate().expect("Unable to generate bindings");
    bindings
        .write_to_file(out_bindings)
        .expect("Couldn't write bindings.rs");
}

#[cfg(not(feature = "generate-bindings"))]
fn write_bindings(_out_bindings: &std::path::Path, _include_paths: &[PathBuf]) {
    // src/lib.rs includes the pre-generated bindings directly.
}

fn main() {
    if cfg!(feature = "generate-bindings") {
        let minor = rustc_minor().unwrap_or(0);
        if minor < 70 {
            panic!("feature `generate-bindings` requires rustc >= 1.70");
        }
    }

    println!("cargo:rerun-if-changed=native/wrapper.h");
    println!("cargo:rerun-if-changed=native/mpg123_version_check.c");
    println!("cargo:rerun-if-changed=src/pregen_bindings/mpg123.rs");
    println!("cargo:rerun-if-env-changed=MPG123_NO_PKG_CONFIG");

    let include_paths = link_mpg123();

    // Only compile the header check when pkg-config told us where the headers are.
    // Without it we link by name and trust the system layout.
    if !include_paths.is_empty() {
        let mut cc_builder = cc::Build::new();
        for path in &include_paths {
            cc_builder.include(path);
        }
        cc_builder
            .file("native/mpg123_version_check.c")
            .flag_if_supported("-Wno-unused-parameter")
            .compile("mpg123_version_check");
    }

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    let out_bindings = out_path.join("bindings.rs");

    write_bindings(&out_bindings, &include_paths);
}

// Probes libmpg123 with pkg-config and emits the link directives.
// Returns the include paths reported by pkg-config (empty on fallback).
fn link_mpg123() -> Vec<PathBuf> {
    if env::var_os("MPG123_NO_PKG_CONFIG").is_none() {
        match pkg_config::Config::new()
            .atleast_version(MIN_MPG123_VERSION)
            .probe("libmpg123")
        {
            Ok(lib) => return lib.include_paths,
            Err(e) => {
                println!("cargo:warning=pkg-config could not find libmpg123 >= {MIN_MPG123_VERSION}: {e}");
            }
        }
    }

    println!("cargo:rustc-link-lib=mpg123");
    Vec::new()
}

// Checks the rustc version when building with generate-bindings feature. Must be at least 1.70
fn rustc_minor() -> Option<u32> {
    let rustc = std::env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());
    let out = std::process::Command::new(rustc).arg("-vV").output().ok()?;
    let s = std::string::String::from_utf8(out.stdout).ok()?;

    for line in s.lines() {
        if let Some(rest) = line.strip_prefix("release: ") {
            let mut it = rest.split('.');
            let _major = it.next()?.parse::<u32>().ok()?;
            let minor = it.next()?.parse::<u32>().ok()?;
            return Some(minor);
        }
    }
    None
}
