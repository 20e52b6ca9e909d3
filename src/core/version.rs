//! Build metadata accessors.
//! This includes the generated version.rs from the build script into a core module,
//! providing a single source of truth.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Package version read from Cargo.toml at build time
pub fn package_version() -> &'static str {
    PACKAGE_VERSION
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Text shown by `--version`: version, git hash and build time
pub fn long_version() -> String {
    format!("{} ({} built {})", package_version(), git_hash(), build_time())
}
