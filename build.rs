fn main() {
    let now = chrono::Utc::now();

    // Footer copyright year, fixed at build time so SSR and hydration agree
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    println!("cargo:rerun-if-changed=build.rs");
}
