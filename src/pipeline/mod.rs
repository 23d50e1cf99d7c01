pub mod stage1_resolve;
pub mod stage2_merge;
pub mod stage3_pivot;
pub mod stage4_order;

use crate::input::InputError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("target data source `{0}` not found in the catalog")]
    UnknownTarget(String),
    #[error("ancestry of `{target}` exceeds {max} hops; parent links likely form a cycle")]
    AncestryDepthExceeded { target: String, max: usize },
    #[error("nothing to render: no observations found for target `{0}`")]
    NoObservations(String),
    #[error(transparent)]
    Input(#[from] InputError),
}
