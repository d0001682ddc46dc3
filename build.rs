use rustc_version::{Channel, version_meta};

fn main() {
    let meta = version_meta().expect("failed to query rustc version");

    let release_level = match meta.channel {
        Channel::Stable => "final",
        Channel::Beta => "beta",
        Channel::Nightly => "nightly",
        Channel::Dev => "dev",
    };

    println!("cargo:rustc-env=RUSTC_SEMVER={}", meta.semver);
    println!("cargo:rustc-env=RUSTC_RELEASE_LEVEL={release_level}");
    println!("cargo:rerun-if-changed=build.rs");
}
