//! Absolute layout: explicit positions, with optional alignment anchors.

use super::{Layout, LayoutError, LayoutItem, LayoutKind};
use crate::geometry::Size;

/// Leaves explicitly positioned children alone and anchors aligned ones
/// inside the content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteLayout;

impl Layout for AbsoluteLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Absolute
    }

    fn arrange(&self, area: Size, items: &mut [LayoutItem]) -> Result<(), LayoutError> {
        for item in items.iter_mut().filter(|item| item.visible) {
            if let Some(alignment) = item.alignment {
                let origin = alignment.place(area.to_rect(), item.bounds.width, item.bounds.height);
                item.bounds.x = origin.x;
                item.bounds.y = origin.y;
            }
        }
        Ok(())
    }
}
