//! Container widget: owns child controls, lays them out, and scrolls them.
//!
//! A container composes four parts:
//!
//! - a [`ChildRegistry`] that exclusively owns the children in index order,
//! - a shared [`Layout`] strategy, fixed at construction,
//! - a [`ScrollEngine`] for kinetic touch scrolling and scrollbar fading,
//! - an [`EventRouter`] that hands input to children top-most first.
//!
//! Each `update` sorts children by z-index, runs the layout, feeds the new
//! content extent to the scroll engine, ticks it, and updates children at
//! their scrolled positions. Structural edits made between frames take effect
//! on the next `update`.

use std::any::Any;
use std::rc::Rc;

use log::error;

use super::builder::{apply_common, build_control, warn_unknown_keys, CONTAINER_KEYS};
use crate::animation::{AnimatableProperty, AnimationClip, AnimationTarget};
use crate::event::input::{InputEvent, KeyEvent, TouchEvent, TouchInput};
use crate::event::router::EventRouter;
use crate::geometry::{Rect, Size, Vec2};
use crate::layout::{content_extent, Layout, LayoutItem, LayoutKind};
use crate::properties::{ParseError, Properties};
use crate::registry::{ChildKey, ChildRegistry, RegistryError};
use crate::render::{DrawCommand, DrawList};
use crate::widget::core::{ControlCore, ControlState};
use crate::widget::scroll::{Axis, Scroll, ScrollConfig, ScrollEngine};
use crate::widget::traits::{Control, ControlKind, FrameContext};

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A control that holds, arranges and scrolls child controls.
///
/// # Examples
///
/// ```ignore
/// use formkit::widgets::{Container, Label};
/// use formkit::widget::{ControlExt, Scroll};
///
/// let mut list = Container::vertical().with_bounds(0.0, 0.0, 200.0, 300.0);
/// list.set_scroll(Scroll::VERTICAL);
/// list.add_control(Label::new("first").with_size(200.0, 40.0).boxed())?;
/// ```
pub struct Container {
    core: ControlCore,
    children: ChildRegistry,
    layout: Rc<dyn Layout>,
    engine: ScrollEngine,
    router: EventRouter,
}

impl Container {
    /// Create an empty container using a fresh strategy of `kind`.
    pub fn new(kind: LayoutKind) -> Self {
        Self::with_layout(kind.create())
    }

    /// Create an empty container that shares `layout`.
    pub fn with_layout(layout: Rc<dyn Layout>) -> Self {
        Self {
            core: ControlCore::new(),
            children: ChildRegistry::new(),
            layout,
            engine: ScrollEngine::default(),
            router: EventRouter::new(),
        }
    }

    /// Shorthand for a vertical container.
    pub fn vertical() -> Self {
        Self::new(LayoutKind::Vertical)
    }

    /// Shorthand for a horizontal container.
    pub fn horizontal() -> Self {
        Self::new(LayoutKind::Horizontal)
    }

    /// Replace the scroll tuning (builder). Permission and auto-hide carry over.
    pub fn with_scroll_config(mut self, config: ScrollConfig) -> Self {
        let mut engine = ScrollEngine::new(config);
        engine.set_scroll(self.engine.scroll());
        engine.set_auto_hide(self.engine.auto_hide());
        self.engine = engine;
        self
    }

    /// Set scroll permission (builder).
    pub fn with_scroll(mut self, scroll: Scroll) -> Self {
        self.set_scroll(scroll);
        self
    }

    /// Append a child (builder). Fresh controls are never rejected.
    pub fn with_child(mut self, child: impl Control) -> Self {
        if let Err(err) = self.add_control(Box::new(child)) {
            error!("container {:?}: {err}", self.core.id());
        }
        self
    }

    /// Build a container, and its children, from a properties block.
    ///
    /// Fails on malformed values: an unknown `layout`, `scroll` or
    /// `alignment` name, or a number that does not parse. Nested blocks
    /// that do not name a known control are skipped with a warning.
    pub fn from_properties(props: &Properties) -> Result<Container, ParseError> {
        let kind = match props.get("layout") {
            Some(name) => LayoutKind::from_name(name).ok_or_else(|| ParseError::InvalidValue {
                key: "layout".to_string(),
                value: name.to_string(),
                expected: "one of absolute, vertical, horizontal, flow".to_string(),
            })?,
            None => LayoutKind::Absolute,
        };
        let mut container = Container::new(kind);
        apply_common(&mut container.core, props)?;

        if let Some(name) = props.get("scroll") {
            let scroll = Scroll::parse(name).ok_or_else(|| ParseError::InvalidValue {
                key: "scroll".to_string(),
                value: name.to_string(),
                expected: "one of none, horizontal, vertical, both".to_string(),
            })?;
            container.set_scroll(scroll);
        }
        if let Some(auto_hide) = props.get_bool("scrollBarsAutoHide")? {
            container.set_scroll_bars_auto_hide(auto_hide);
        }
        warn_unknown_keys(props, CONTAINER_KEYS);

        let mut next_z = 0;
        for child_props in props.children() {
            let Some(mut child) = build_control(child_props)? else {
                continue;
            };
            if !child_props.contains("zIndex") {
                child.core_mut().set_z_index(next_z);
            }
            next_z += 1;
            if let Err(err) = container.add_control(child) {
                error!("container {:?}: {err}", container.core.id());
            }
        }
        Ok(container)
    }

    /// Parse a properties document whose root block is a `container` (or
    /// `form`) and build it.
    pub fn load(input: &str) -> Result<Container, ParseError> {
        let props = Properties::parse(input)?;
        match props.namespace() {
            "container" | "form" => Container::from_properties(&props),
            other => Err(ParseError::UnexpectedToken {
                line: props.line(),
                message: format!("root block must be a container, got '{other}'"),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Children
    // -----------------------------------------------------------------------

    /// Append a child and return its index.
    pub fn add_control(&mut self, control: Box<dyn Control>) -> Result<usize, RegistryError> {
        let index = self.children.add(control)?;
        self.core.mark_dirty();
        Ok(index)
    }

    /// Insert a child at `index` (`index == len` appends).
    pub fn insert_control(&mut self, control: Box<dyn Control>, index: usize) -> Result<(), RegistryError> {
        self.children.insert(control, index)?;
        self.core.mark_dirty();
        Ok(())
    }

    /// Remove and return the child at `index`.
    pub fn remove_control_at(&mut self, index: usize) -> Result<Box<dyn Control>, RegistryError> {
        let control = self.children.remove_at(index)?;
        self.core.mark_dirty();
        Ok(control)
    }

    /// Remove the first child with id `id`, if any.
    pub fn remove_control(&mut self, id: &str) -> Option<Box<dyn Control>> {
        let control = self.children.remove_by_id(id)?;
        self.core.mark_dirty();
        Some(control)
    }

    /// Remove the child behind `key`, if it is still registered.
    pub fn remove_control_by_key(&mut self, key: ChildKey) -> Option<Box<dyn Control>> {
        let control = self.children.remove_by_key(key)?;
        self.core.mark_dirty();
        Some(control)
    }

    /// The child at `index`.
    pub fn control(&self, index: usize) -> Result<&dyn Control, RegistryError> {
        self.children.get(index)
    }

    pub fn control_mut(&mut self, index: usize) -> Result<&mut dyn Control, RegistryError> {
        self.children.get_mut(index)
    }

    /// The first direct child with id `id`.
    pub fn find_control(&self, id: &str) -> Option<&dyn Control> {
        self.children.find(id)
    }

    pub fn find_control_mut(&mut self, id: &str) -> Option<&mut dyn Control> {
        self.children.find_mut(id)
    }

    /// Read-only view of the children.
    pub fn children(&self) -> &ChildRegistry {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Stable reorder of the children by ascending z-index.
    pub fn sort_by_z_order(&mut self) {
        self.children.sort_by_z_order();
    }

    // -----------------------------------------------------------------------
    // Layout and scrolling
    // -----------------------------------------------------------------------

    pub fn layout(&self) -> &dyn Layout {
        self.layout.as_ref()
    }

    pub fn layout_kind(&self) -> LayoutKind {
        self.layout.kind()
    }

    pub fn scroll(&self) -> Scroll {
        self.engine.scroll()
    }

    pub fn set_scroll(&mut self, scroll: Scroll) {
        self.engine.set_scroll(scroll);
    }

    pub fn scroll_bars_auto_hide(&self) -> bool {
        self.engine.auto_hide()
    }

    pub fn set_scroll_bars_auto_hide(&mut self, auto_hide: bool) {
        self.engine.set_auto_hide(auto_hide);
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> Vec2 {
        self.engine.offset()
    }

    /// Jump to `offset`, clamped. Takes effect immediately.
    pub fn scroll_to(&mut self, offset: Vec2) {
        self.engine.scroll_to(offset);
    }

    pub fn scroll_engine(&self) -> &ScrollEngine {
        &self.engine
    }

    /// Extent of the laid-out children as of the last update.
    pub fn content_size(&self) -> Size {
        self.engine.content_size()
    }

    /// The animation clip named `id`, or the scrollbar fade clip when `id`
    /// is `None`.
    pub fn animation(&self, id: Option<&str>) -> Option<&AnimationClip> {
        let clip = self.engine.fade_clip();
        match id {
            None => Some(clip),
            Some(id) if id == clip.id() => Some(clip),
            Some(_) => None,
        }
    }

    /// The content area in container-local coordinates.
    fn viewport(&self) -> Rect {
        self.core.bounds().size().to_rect().shrink(self.core.padding())
    }

    fn arrange(&mut self) -> Size {
        let mut items: Vec<LayoutItem> = self
            .children
            .iter()
            .map(|child| {
                let core = child.core();
                LayoutItem {
                    bounds: core.bounds(),
                    alignment: core.alignment(),
                    visible: core.is_visible(),
                }
            })
            .collect();

        match self.layout.arrange(self.viewport().size(), &mut items) {
            Ok(()) => {
                for (index, item) in items.iter().enumerate() {
                    if let Ok(child) = self.children.get_mut(index) {
                        child.core_mut().set_bounds(item.bounds);
                    }
                }
            }
            Err(err) => error!("container {:?}: {err}", self.core.id()),
        }
        content_extent(&items)
    }

    fn fit_to_content(&mut self, content: Size) {
        let padding = self.core.padding();
        let bounds = self.core.bounds();
        let width = if self.core.auto_width() {
            content.width + padding.width()
        } else {
            bounds.width
        };
        let height = if self.core.auto_height() {
            content.height + padding.height()
        } else {
            bounds.height
        };
        self.core.set_size(width, height);
    }

    // -----------------------------------------------------------------------
    // Focus and input
    // -----------------------------------------------------------------------

    /// Id of the focused descendant, if any.
    pub fn focused_id(&self) -> Option<&str> {
        let child = self.children.iter().find(|c| c.contains_focus())?;
        match child.downcast_ref::<Container>() {
            Some(inner) if !inner.core.has_focus() => inner.focused_id(),
            _ => child.core().id(),
        }
    }

    /// Dispatch a root-level input event. Touch coordinates are in the
    /// parent's space. Returns whether the event was used.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Touch(touch) => {
                let origin = self.core.bounds().origin();
                self.touch_event(TouchInput {
                    x: touch.x - origin.x,
                    y: touch.y - origin.y,
                    ..touch
                })
            }
            InputEvent::Key(key) => {
                let focused = self.contains_focus();
                self.key_event(key);
                focused
            }
            InputEvent::Resize { width, height } => {
                self.core.set_size(width, height);
                true
            }
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(LayoutKind::Absolute)
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.core.id())
            .field("layout", &self.layout.kind())
            .field("scroll", &self.engine.scroll())
            .field("children", &self.children)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Control
// ---------------------------------------------------------------------------

impl Control for Container {
    fn kind(&self) -> ControlKind {
        ControlKind::Container
    }

    fn core(&self) -> &ControlCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ControlCore {
        &mut self.core
    }

    fn update(&mut self, frame: &FrameContext) {
        self.children.sort_by_z_order();
        let content = self.arrange();
        if self.core.auto_width() || self.core.auto_height() {
            self.fit_to_content(content);
        }

        self.engine.set_viewport(self.viewport());
        self.engine.set_content_size(content);
        self.engine.tick(frame.elapsed);

        let absolute = self.core.bounds().translate(frame.origin);
        self.core.set_absolute_bounds(absolute);

        let child_frame = FrameContext {
            origin: absolute.origin() + self.viewport().origin() - self.engine.offset(),
            elapsed: frame.elapsed,
        };
        for index in 0..self.children.len() {
            if let Ok(child) = self.children.get_mut(index) {
                child.update(&child_frame);
            }
        }
    }

    fn draw(&mut self, list: &mut DrawList) {
        if !self.core.is_visible() {
            let mut discarded = DrawList::new();
            for index in 0..self.children.len() {
                if let Ok(child) = self.children.get_mut(index) {
                    child.draw(&mut discarded);
                }
            }
            self.core.clear_dirty();
            self.engine.clear_dirty();
            return;
        }

        let absolute = self.core.absolute_bounds();
        list.push(DrawCommand::Background {
            bounds: absolute,
            style: self.core.style().map(str::to_string),
        });

        list.push_clip(self.engine.viewport().translate(absolute.origin()));
        let mut order = self.children.z_ordered_keys();
        order.reverse();
        for key in order {
            if let Some(child) = self.children.by_key_mut(key) {
                child.draw(list);
            }
        }
        list.pop_clip();

        let opacity = self.engine.scrollbar_opacity();
        if opacity > 0.0 {
            for axis in Axis::ALL {
                if let Some(thumb) = self.engine.thumb(axis) {
                    list.push(DrawCommand::ScrollBar {
                        axis,
                        bounds: thumb.bounds.translate(absolute.origin()),
                        opacity,
                    });
                }
            }
        }

        self.core.clear_dirty();
        self.engine.clear_dirty();
    }

    fn touch_event(&mut self, touch: TouchInput) -> bool {
        if !self.core.is_enabled() {
            return false;
        }
        let consumed = self
            .router
            .dispatch_touch(&mut self.children, &mut self.engine, touch);
        match touch.event {
            TouchEvent::Press => {
                let state = if self.engine.viewport().contains(touch.x, touch.y) {
                    ControlState::Active
                } else {
                    ControlState::Normal
                };
                self.core.set_state(state);
            }
            TouchEvent::Release => self.core.set_state(ControlState::Normal),
            TouchEvent::Move => {}
        }
        consumed || self.core.consume_input_events()
    }

    fn key_event(&mut self, event: KeyEvent) {
        self.router.dispatch_key(&mut self.children, event);
    }

    fn is_dirty(&self) -> bool {
        EventRouter::is_dirty(self.core.is_dirty() || self.engine.is_dirty(), &self.children)
    }

    fn contains_focus(&self) -> bool {
        self.core.has_focus() || self.children.iter().any(|c| c.contains_focus())
    }

    fn focus(&mut self, id: &str) -> bool {
        self.core.set_focus(false);
        let mut found = false;
        for index in 0..self.children.len() {
            let Ok(child) = self.children.get_mut(index) else {
                break;
            };
            if found {
                child.clear_focus();
            } else {
                found = child.focus(id);
            }
        }
        found
    }

    fn clear_focus(&mut self) {
        self.core.set_focus(false);
        for index in 0..self.children.len() {
            if let Ok(child) = self.children.get_mut(index) {
                child.clear_focus();
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AnimationTarget for Container {
    fn animation_property_value(&self, property: AnimatableProperty) -> f32 {
        self.engine.animation_property_value(property)
    }

    fn set_animation_property_value(
        &mut self,
        property: AnimatableProperty,
        value: f32,
        blend_weight: f32,
    ) {
        self.engine.set_animation_property_value(property, value, blend_weight);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
