//! Widget state machines.
//!
//! Each widget owns its state privately and exposes pure transitions. Invalid
//! references (unknown id, key, or index) are ignored rather than reported:
//! they can only come from a mistake in the view layer, since every id the
//! view renders comes from the same static catalog.

pub mod copy;
pub mod diagram;
pub mod drawer;
pub mod stages;
pub mod tabs;

pub use copy::CopyFeedback;
pub use diagram::InteractiveDiagram;
pub use drawer::{NavDrawer, Navigation};
pub use stages::StageList;
pub use tabs::{TabKey, TabbedViewer};
