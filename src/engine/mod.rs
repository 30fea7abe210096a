// ============================================================================
// Engine Module
// Configured evaluation of vector operations
// ============================================================================

mod vector_space;

pub use vector_space::VectorSpace;
