// Application layer - Use case interactors

pub mod assets_interactor;
pub mod sidecar_interactor;

// Re-export interactors
pub use assets_interactor::{AssetsInteractor, DownloadOutcome, PackageReport};
pub use sidecar_interactor::SidecarInteractor;
