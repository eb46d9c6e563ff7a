use std::env;
use std::path::{Path, PathBuf};

// Library names probed in order when BLAS_LIB is not set.
const BLAS_CANDIDATES: &[&str] = &["openblas", "blas", "cblas"];

const SEARCH_DIRS: &[&str] = &[
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/usr/lib64",
    "/usr/lib",
    "/usr/local/lib",
    "/opt/homebrew/lib",
];

fn main() {
    println!("cargo:rerun-if-env-changed=BLAS_LIB_DIR");
    println!("cargo:rerun-if-env-changed=BLAS_LIB");
    println!("cargo:rerun-if-changed=wrapper.h");

    link_system_blas();

    // regenerate the checked-in bindings from wrapper.h
    #[cfg(feature = "rebuild")]
    {
        let out_dir_path = PathBuf::from(env::var("OUT_DIR").expect("Cannot find OUT_DIR"));
        let bindings = bindgen::Builder::default()
            .header("wrapper.h")
            .parse_callbacks(Box::new(bindgen::CargoCallbacks))
            .allowlist_function("dgemv_")
            .generate()
            .expect("Unable to generate bindings");
        bindings
            .write_to_file(out_dir_path.join("bindings.rs"))
            .expect("Couldn't write bindings!");
    }
}

// On macOS the Accelerate framework provides the complete Fortran BLAS
// interface, no separate library is required.
#[cfg(target_os = "macos")]
fn link_system_blas() {
    if let Some((dir, name)) = find_blas_library() {
        println!("cargo:rustc-link-search=native={}", dir.display());
        println!("cargo:rustc-link-lib={}", name);
    } else {
        println!("cargo:rustc-link-lib=framework=Accelerate");
    }
}

#[cfg(not(target_os = "macos"))]
fn link_system_blas() {
    match find_blas_library() {
        Some((dir, name)) => {
            println!("cargo:rustc-link-search=native={}", dir.display());
            println!("cargo:rustc-link-lib={}", name);
        }
        None => panic!(
            "No system BLAS library found (searched for {:?} in {:?}). \
             Install OpenBLAS or reference BLAS, or point BLAS_LIB_DIR and BLAS_LIB \
             at an existing installation.",
            BLAS_CANDIDATES, SEARCH_DIRS
        ),
    }
}

fn find_blas_library() -> Option<(PathBuf, String)> {
    let mut search_dirs: Vec<PathBuf> = Vec::new();
    if let Ok(dir) = env::var("BLAS_LIB_DIR") {
        search_dirs.push(PathBuf::from(dir));
    }
    search_dirs.extend(SEARCH_DIRS.iter().map(PathBuf::from));

    let candidates: Vec<String> = match env::var("BLAS_LIB") {
        Ok(name) => vec![name],
        Err(_) => BLAS_CANDIDATES.iter().map(|s| s.to_string()).collect(),
    };

    for dir in &search_dirs {
        for name in &candidates {
            if library_present(dir, name) {
                return Some((dir.clone(), name.clone()));
            }
        }
    }
    None
}

fn library_present(dir: &Path, name: &str) -> bool {
    ["so", "a", "dylib"]
        .iter()
        .any(|ext| dir.join(format!("lib{}.{}", name, ext)).exists())
}
