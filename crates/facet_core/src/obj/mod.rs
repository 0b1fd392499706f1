//! Wavefront OBJ import pipeline.
//!
//! [`parse`](parse::ObjData::parse) extracts raw attribute arrays and face
//! records, [`build`](build::build) resolves, deduplicates and fan-
//! triangulates them; [`load`] chains the two for the common
//! file-to-buffers path.

pub mod build;
pub mod parse;

pub use build::build;
pub use parse::{Face, FaceVertex, ObjData};

use std::path::Path;

use log::{info, warn};

use crate::mesh::MeshBuffers;

/// Imports the mesh at `path`.
///
/// Every failure mode here is recoverable: an unreadable file, malformed
/// records, or a file without faces all come back as an empty or partial
/// `MeshBuffers` with diagnostics on the log. Callers that must distinguish
/// the empty outcome check [`MeshBuffers::is_empty`].
pub fn load(path: &Path) -> MeshBuffers {
    let buffers = build(&ObjData::from_file(path));
    if buffers.is_empty() {
        warn!("{}: no drawable geometry", path.display());
    } else {
        info!(
            "{}: {} vertices, {} indices ({} triangles)",
            path.display(),
            buffers.vertices.len(),
            buffers.indices.len(),
            buffers.triangle_count()
        );
    }
    buffers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_of_missing_file_is_empty_not_fatal() {
        let buffers = load(Path::new("/no/such/mesh.obj"));
        assert!(buffers.is_empty());
    }

    #[test]
    fn load_round_trip_through_the_filesystem() {
        let path = std::env::temp_dir().join(format!("facet-load-{}.obj", std::process::id()));
        fs::write(
            &path,
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        )
        .expect("temp file");

        let buffers = load(&path);
        fs::remove_file(&path).ok();

        assert_eq!(buffers.vertices.len(), 4);
        assert_eq!(buffers.indices, vec![0, 1, 2, 0, 2, 3]);
    }
}
