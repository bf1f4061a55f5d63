//! Declarative construction: turn a [`Properties`] block into a control.
//!
//! Every control reads the common base keys (`style`, `alignment`,
//! `position`, `size`/`width`/`height`, `autoWidth`, `autoHeight`, `zIndex`,
//! `visible`, `enabled`, `consumeInputEvents`, `padding`). Widgets add their
//! own keys on top. Unknown keys and unknown blocks are skipped with a
//! warning; malformed values abort construction with a [`ParseError`].

use log::warn;

use super::button::Button;
use super::check_box::CheckBox;
use super::container::Container;
use super::label::Label;
use crate::properties::{ParseError, Properties};
use crate::widget::core::{Alignment, ControlCore};
use crate::widget::traits::{Control, ControlKind};

/// Keys understood by every control.
const COMMON_KEYS: &[&str] = &[
    "style",
    "alignment",
    "position",
    "size",
    "width",
    "height",
    "autoWidth",
    "autoHeight",
    "zIndex",
    "visible",
    "enabled",
    "consumeInputEvents",
    "padding",
];

pub(crate) const CONTAINER_KEYS: &[&str] = &["layout", "scroll", "scrollBarsAutoHide"];
const TEXT_KEYS: &[&str] = &["text"];
const CHECK_BOX_KEYS: &[&str] = &["text", "checked"];

/// Build the control a block describes.
///
/// Returns `Ok(None)` for blocks that do not name a known control.
pub fn build_control(props: &Properties) -> Result<Option<Box<dyn Control>>, ParseError> {
    let Some(kind) = ControlKind::from_block_name(props.namespace()) else {
        warn!(
            "line {}: skipping unsupported control block '{}'",
            props.line(),
            props.namespace()
        );
        return Ok(None);
    };

    let control: Box<dyn Control> = match kind {
        ControlKind::Container => Box::new(Container::from_properties(props)?),
        ControlKind::Label => {
            let mut label = Label::new(props.get("text").unwrap_or_default());
            apply_common(label.core_mut(), props)?;
            warn_unknown_keys(props, TEXT_KEYS);
            Box::new(label)
        }
        ControlKind::Button => {
            let mut button = Button::new(props.get("text").unwrap_or_default());
            apply_common(button.core_mut(), props)?;
            warn_unknown_keys(props, TEXT_KEYS);
            Box::new(button)
        }
        ControlKind::CheckBox => {
            let checked = props.get_bool("checked")?.unwrap_or(false);
            let mut check = CheckBox::new(props.get("text").unwrap_or_default()).checked(checked);
            apply_common(check.core_mut(), props)?;
            warn_unknown_keys(props, CHECK_BOX_KEYS);
            Box::new(check)
        }
    };
    Ok(Some(control))
}

/// Apply the base control keys of `props` to `core`.
pub(crate) fn apply_common(core: &mut ControlCore, props: &Properties) -> Result<(), ParseError> {
    if let Some(id) = props.id() {
        core.set_id(id);
    }
    if let Some(style) = props.get("style") {
        core.set_style(style);
    }

    let alignment = match props.get("alignment") {
        Some(name) => Some(Alignment::from_name(name).ok_or_else(|| ParseError::InvalidValue {
            key: "alignment".to_string(),
            value: name.to_string(),
            expected: "an alignment such as top_left or vcenter_hcenter".to_string(),
        })?),
        None => None,
    };
    core.set_alignment(alignment);
    if alignment.is_none() {
        if let Some(position) = props.get_vec2("position")? {
            core.set_position(position.x, position.y);
        }
    }

    let mut bounds = core.bounds();
    if let Some(size) = props.get_vec2("size")? {
        bounds.width = size.x;
        bounds.height = size.y;
    }
    if let Some(width) = props.get_f32("width")? {
        bounds.width = width;
    }
    if let Some(height) = props.get_f32("height")? {
        bounds.height = height;
    }
    core.set_size(bounds.width, bounds.height);

    if let Some(auto) = props.get_bool("autoWidth")? {
        core.set_auto_width(auto);
    }
    if let Some(auto) = props.get_bool("autoHeight")? {
        core.set_auto_height(auto);
    }
    if let Some(z_index) = props.get_i32("zIndex")? {
        core.set_z_index(z_index);
    }
    if let Some(visible) = props.get_bool("visible")? {
        core.set_visible(visible);
    }
    if let Some(enabled) = props.get_bool("enabled")? {
        core.set_enabled(enabled);
    }
    if let Some(consume) = props.get_bool("consumeInputEvents")? {
        core.set_consume_input_events(consume);
    }
    if let Some(padding) = props.get_spacing("padding")? {
        core.set_padding(padding);
    }
    Ok(())
}

/// Warn about keys that are neither common nor in `extra`.
pub(crate) fn warn_unknown_keys(props: &Properties, extra: &[&str]) {
    for key in props.keys() {
        if !COMMON_KEYS.contains(&key) && !extra.contains(&key) {
            warn!(
                "line {}: ignoring unknown key '{key}' on '{}'",
                props.line(),
                props.namespace()
            );
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
