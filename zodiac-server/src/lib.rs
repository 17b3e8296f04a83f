pub mod assets;
pub mod error;
pub mod http;
pub mod server;

use std::io;
use std::path::{Path, PathBuf};

use zodiac_core::config::CatalogConfig;

/// Directory holding the running binary; relative catalog paths resolve here
/// so an installed server finds the `data/` it was shipped with.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        )
    })
}

/// The crate's source directory, where the catalog lives in a checkout.
pub fn source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Catalog path next to the binary. Under `cargo run` the binary sits in
/// `target/` with no `data/` beside it, so the checkout copy is used when
/// only that one exists.
pub fn resolve_catalog_path(catalog: &CatalogConfig, exe_dir: &Path) -> PathBuf {
    let installed = catalog.resolve(exe_dir);
    if installed.exists() {
        return installed;
    }
    let checkout = catalog.resolve(&source_dir());
    if checkout.exists() {
        tracing::debug!(path = %checkout.display(), "using catalog from source checkout");
        return checkout;
    }
    installed
}
