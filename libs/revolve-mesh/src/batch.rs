//! # Batch Generation
//!
//! Builds many independent tubes in parallel. Meshes share nothing, so the
//! work splits across the rayon pool without coordination.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::primitives::TubeParams;
use log::debug;
use rayon::prelude::*;

/// Generates one mesh per parameter set, in input order.
///
/// # Errors
///
/// If any parameter set is rejected, one of the errors is returned and no
/// meshes are produced.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::{generate_batch, TubeParams};
///
/// let params = [TubeParams::new(0.9, 1.0), TubeParams::new(0.7, 1.0)];
/// let meshes = generate_batch(&params).unwrap();
/// assert_eq!(meshes.len(), 2);
/// ```
pub fn generate_batch(params: &[TubeParams]) -> MeshResult<Vec<Mesh>> {
    debug!("generating {} tubes", params.len());
    params.par_iter().map(TubeParams::generate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angular::AngularRange;
    use crate::error::MeshError;

    #[test]
    fn test_batch_preserves_order() {
        let params: Vec<TubeParams> = (1..=32)
            .map(|slices| TubeParams::new(slices as f64, 1.0).with_slices(slices))
            .collect();
        let meshes = generate_batch(&params).unwrap();

        assert_eq!(meshes.len(), 32);
        for (p, mesh) in params.iter().zip(&meshes) {
            assert_eq!(mesh.vertex_count(), 2 * p.slices as usize);
            assert_eq!(mesh, &p.generate().unwrap());
        }
    }

    #[test]
    fn test_batch_empty() {
        assert!(generate_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_batch_reports_invalid_params() {
        let params = [
            TubeParams::new(1.0, 1.0),
            TubeParams::new(1.0, 1.0)
                .with_range(AngularRange::new(0.0, 1.0))
                .with_slices(0),
        ];
        let err = generate_batch(&params).unwrap_err();
        assert!(matches!(err, MeshError::InvalidArgument { .. }));
    }
}
