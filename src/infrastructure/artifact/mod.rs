//! Loading of serialized model artifacts from disk

mod loader;

pub use loader::{load_artifacts, load_json, ArtifactPaths, LoadedArtifacts};
