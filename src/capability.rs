//! Capability flags for the mesh-dependent parts of the crate
//!
//! Rather than warning once at start-up and quietly disabling features, the
//! crate reports what it can do through [probe] and every mesh-consuming
//! entry point checks its requirement up front with [require_structured].
//!
//! ```rust
//! let capabilities = partisn::capability::probe();
//! assert!(capabilities.structured_mesh_support);
//!
//! // deck generation has not been through verification and validation
//! assert!(!capabilities.verified_and_validated);
//! ```

// internal modules
use crate::error::{Error, Result};
use crate::mesh::StructuredMesh;

/// Name of the capability required by every mesh-consuming operation
pub const STRUCTURED_MESH_SUPPORT: &str = "structured-mesh-support";

/// What this build of the crate supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Structured mesh input is available
    pub structured_mesh_support: bool,
    /// Output has been through formal verification and validation
    pub verified_and_validated: bool,
}

impl Capabilities {
    /// Human readable warnings for anything callers should know about
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if !self.verified_and_validated {
            warnings.push("PartiSn deck generation is not yet V&V compliant");
        }
        if !self.structured_mesh_support {
            warnings.push("structured mesh support is unavailable, deck synthesis is disabled");
        }
        warnings
    }
}

/// Report the capabilities of the crate
///
/// Callers are expected to check these before doing any real work, and
/// decide for themselves whether the warnings matter.
pub fn probe() -> Capabilities {
    Capabilities {
        structured_mesh_support: true,
        verified_and_validated: false,
    }
}

/// Fail fast if a mesh provider cannot act as a structured mesh
pub fn require_structured<M: StructuredMesh + ?Sized>(mesh: &M) -> Result<()> {
    if !probe().structured_mesh_support || !mesh.is_structured() {
        return Err(Error::UnsupportedOperation {
            capability: STRUCTURED_MESH_SUPPORT,
            provider: mesh.describe(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Axis, Cell};

    struct Unstructured;

    impl StructuredMesh for Unstructured {
        fn divisions(&self, _axis: Axis) -> Result<&[f64]> {
            Ok(&[])
        }

        fn cells(&self) -> &[Cell] {
            &[]
        }

        fn is_structured(&self) -> bool {
            false
        }

        fn describe(&self) -> String {
            "tetrahedral mesh".to_string()
        }
    }

    #[test]
    fn unstructured_provider_is_rejected() {
        let err = require_structured(&Unstructured).unwrap_err();
        match err {
            Error::UnsupportedOperation {
                capability,
                provider,
            } => {
                assert_eq!(capability, STRUCTURED_MESH_SUPPORT);
                assert_eq!(provider, "tetrahedral mesh");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn probe_reports_vnv_warning() {
        let warnings = probe().warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("V&V"));
    }
}
