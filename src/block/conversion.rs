use super::model::Workspace;
use crate::error::ConversionError;

/// A trait for host UI formats that can be converted into a [`Workspace`].
///
/// The block model is serde-enabled, so hosts whose export format matches
/// it can deserialize directly. Hosts with their own canvas format
/// implement this trait as the translation layer instead.
///
/// # Example
///
/// ```rust,no_run
/// use jouken::block::{Block, IntoWorkspace, Workspace};
/// use jouken::error::ConversionError;
///
/// // 1. Define your custom structs for parsing your canvas export.
/// struct MyCanvasNode { block: Block }
/// struct MyCanvas { nodes: Vec<MyCanvasNode> }
///
/// // 2. Implement `IntoWorkspace` for your top-level struct.
/// impl IntoWorkspace for MyCanvas {
///     fn into_workspace(self) -> Result<Workspace, ConversionError> {
///         Ok(Workspace {
///             blocks: self.nodes.into_iter().map(|node| node.block).collect(),
///         })
///     }
/// }
/// ```
pub trait IntoWorkspace {
    /// Consumes the object and converts it into a canonical workspace.
    fn into_workspace(self) -> Result<Workspace, ConversionError>;
}
