pub mod common;
pub mod declaration;
pub mod region;

pub use common::{DECLARATION_TERMINATORS, StripError};
pub use declaration::strip_declarations;
pub use region::strip_regions;

use crate::config::Markers;

/// Ignore regions go first so that a declaration marker inside a region
/// never opens a declaration.
pub fn strip_header(content: &str, markers: &Markers) -> Result<String, StripError> {
    let without_regions = strip_regions(content, markers)?;
    strip_declarations(&without_regions, markers.no_export)
}
