use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::background::Background;
use crate::camera::Camera;
use crate::catalog::TokenKind;
use crate::config::PlannerConfig;
use crate::consts::{DRAG_SCALE, HOVER_SCALE};
use crate::doc::{CanvasModel, PlacedToken, TokenId};
use crate::error::PlannerError;
use crate::geometry::{Point, bearing_to_center};
use crate::hit::hit_test;
use crate::input::{Button, Cursor, InputState, UiState};
use crate::placement::PlacementController;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine calls for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    TokenAdded(PlacedToken),
    PositionCommitted { id: TokenId, x: f64, y: f64 },
    CanvasReset,
    BackgroundChanged(Background),
    SetCursor(Cursor),
    RenderNeeded,
}

/// One token as it should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenView {
    pub id: TokenId,
    pub kind: TokenKind,
    /// Live top-left: the drag position while dragged, else the committed one.
    pub x: f64,
    pub y: f64,
    /// Visual scale about the token center.
    pub scale: f64,
    /// Cone rotation in degrees, for field-of-view tokens.
    pub bearing: Option<f64>,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug)]
pub struct EngineCore {
    pub placement: PlacementController,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_placement(PlacementController::default())
    }
}

impl EngineCore {
    /// Create an engine for `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        Ok(Self::with_placement(PlacementController::new(config)?))
    }

    fn with_placement(placement: PlacementController) -> Self {
        Self { placement, camera: Camera::default(), ui: UiState::default(), input: InputState::Idle, dpr: 1.0 }
    }

    // --- Discrete actions ---

    /// Palette click: add a token by tag.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if `tag` names no catalog entry.
    pub fn add_token(&mut self, tag: &str) -> Result<Vec<Action>, PlannerError> {
        let token = self.placement.add_token(tag)?;
        Ok(vec![Action::TokenAdded(token), Action::RenderNeeded])
    }

    /// Palette click with an already-resolved kind.
    pub fn add_kind(&mut self, kind: TokenKind) -> Vec<Action> {
        let token = self.placement.add_kind(kind);
        vec![Action::TokenAdded(token), Action::RenderNeeded]
    }

    /// Clear the canvas.
    ///
    /// A drag in progress is left to finish on its own; its commit is
    /// dropped because the placement epoch has moved on.
    pub fn reset(&mut self) -> Vec<Action> {
        self.placement.reset();
        self.ui.hovered_id = None;
        let mut actions = vec![Action::CanvasReset];
        if !self.input.is_dragging() {
            actions.extend(self.set_cursor(Cursor::Default));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Background selector click.
    pub fn set_background(&mut self, background: Background) -> Vec<Action> {
        if self.placement.model().background() == background {
            return Vec::new();
        }
        self.placement.select_background(background);
        vec![Action::BackgroundChanged(background), Action::RenderNeeded]
    }

    /// Background selector click by tag.
    ///
    /// # Errors
    ///
    /// Returns `UnknownBackground` if `tag` names no theme.
    pub fn set_background_tag(&mut self, tag: &str) -> Result<Vec<Action>, PlannerError> {
        let background = tag.parse::<Background>()?;
        Ok(self.set_background(background))
    }

    // --- Pointer input ---

    /// Start dragging the topmost token under the pointer.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input.is_dragging() {
            return Vec::new();
        }
        let pt = self.camera.screen_to_canvas(screen_pt);
        let Some(token) = hit_test(pt, self.placement.model()).and_then(|id| self.placement.model().get(id)) else {
            return Vec::new();
        };

        self.input = InputState::DraggingToken {
            id: token.id,
            kind: token.kind,
            grab_offset: Point::new(pt.x - token.x, pt.y - token.y),
            live: token.position(),
            epoch: self.placement.epoch(),
        };
        self.ui.hovered_id = None;

        let mut actions = self.set_cursor(Cursor::Grabbing);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Follow the pointer with the dragged token, or update hover feedback.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.input.is_dragging() {
            self.drag_to(screen_pt);
            return vec![Action::RenderNeeded];
        }
        self.update_hover(screen_pt)
    }

    /// Finish a drag at the release point and commit it.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_dragging() {
            return Vec::new();
        }
        self.drag_to(screen_pt);
        let mut actions = self.finish_drag();
        let hovered = hit_test(self.camera.screen_to_canvas(screen_pt), self.placement.model());
        self.ui.hovered_id = hovered;
        actions.extend(self.set_cursor(if hovered.is_some() { Cursor::Grab } else { Cursor::Default }));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Pointer capture was lost: commit the last known drag position.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }
        let mut actions = self.finish_drag();
        actions.extend(self.set_cursor(Cursor::Default));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn drag_to(&mut self, screen_pt: Point) {
        let InputState::DraggingToken { kind, grab_offset, ref mut live, .. } = self.input else {
            return;
        };
        let pt = self.camera.screen_to_canvas(screen_pt);
        let spec = kind.spec();
        *live = self.placement.config().bounds().clamp_top_left(
            pt.x - grab_offset.x,
            pt.y - grab_offset.y,
            spec.width,
            spec.height,
        );
    }

    fn finish_drag(&mut self) -> Vec<Action> {
        let InputState::DraggingToken { id, live, epoch, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        if epoch != self.placement.epoch() {
            debug!(id, "dropped drag that outlived a reset");
            return Vec::new();
        }
        if self.placement.update_position(id, live.x, live.y) {
            vec![Action::PositionCommitted { id, x: live.x, y: live.y }]
        } else {
            Vec::new()
        }
    }

    fn update_hover(&mut self, screen_pt: Point) -> Vec<Action> {
        let hovered = hit_test(self.camera.screen_to_canvas(screen_pt), self.placement.model());
        if hovered == self.ui.hovered_id {
            return Vec::new();
        }
        self.ui.hovered_id = hovered;
        let mut actions = self.set_cursor(if hovered.is_some() { Cursor::Grab } else { Cursor::Default });
        actions.push(Action::RenderNeeded);
        actions
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Vec<Action> {
        if self.ui.cursor == cursor {
            return Vec::new();
        }
        self.ui.cursor = cursor;
        vec![Action::SetCursor(cursor)]
    }

    // --- Per-frame queries ---

    /// The token being dragged and its live top-left, ignoring drags that
    /// outlived a reset.
    #[must_use]
    pub fn active_drag(&self) -> Option<(TokenId, Point)> {
        match self.input {
            InputState::DraggingToken { id, live, epoch, .. } if epoch == self.placement.epoch() => Some((id, live)),
            _ => None,
        }
    }

    /// Current top-left of a token: the live drag position while it is being
    /// dragged, otherwise its committed position.
    #[must_use]
    pub fn live_position(&self, id: TokenId) -> Option<Point> {
        let token = self.placement.model().get(id)?;
        match self.active_drag() {
            Some((drag_id, live)) if drag_id == id => Some(live),
            _ => Some(token.position()),
        }
    }

    /// Cone rotation in degrees for a field-of-view token, from its live
    /// center to the canvas center. `None` for unknown ids and cone-less types.
    #[must_use]
    pub fn bearing(&self, id: TokenId) -> Option<f64> {
        let spec = self.placement.model().get(id)?.spec();
        if !spec.has_field_of_view() {
            return None;
        }
        let pos = self.live_position(id)?;
        Some(bearing_to_center(pos.x, pos.y, spec.width, spec.height, self.placement.config().center()))
    }

    /// Tokens in draw order. The dragged token is moved to the end so it
    /// renders above everything else.
    #[must_use]
    pub fn draw_list(&self) -> Vec<TokenView> {
        let drag = self.active_drag();
        let dragged = drag.map(|(id, _)| id);
        let center = self.placement.config().center();
        let mut views: Vec<TokenView> = Vec::with_capacity(self.placement.model().len());
        let mut top = None;
        for token in self.placement.model().tokens() {
            let scale = if Some(token.id) == dragged {
                DRAG_SCALE
            } else if Some(token.id) == self.ui.hovered_id {
                HOVER_SCALE
            } else {
                1.0
            };
            let pos = match drag {
                Some((drag_id, live)) if drag_id == token.id => live,
                _ => token.position(),
            };
            let spec = token.spec();
            let bearing = spec
                .has_field_of_view()
                .then(|| bearing_to_center(pos.x, pos.y, spec.width, spec.height, center));
            let view = TokenView { id: token.id, kind: token.kind, x: pos.x, y: pos.y, scale, bearing };
            if Some(token.id) == dragged {
                top = Some(view);
            } else {
                views.push(view);
            }
        }
        views.extend(top);
        views
    }

    #[must_use]
    pub fn model(&self) -> &CanvasModel {
        self.placement.model()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }
}

/// The full planner engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    /// Image for an image-backed theme, keyed by its URL.
    backdrop: Option<(&'static str, HtmlImageElement)>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn new(canvas: HtmlCanvasElement, config: PlannerConfig) -> Result<Self, PlannerError> {
        Ok(Self { canvas, backdrop: None, core: EngineCore::new(config)? })
    }

    // --- Delegated actions ---

    /// # Errors
    ///
    /// Returns `UnknownType` if `tag` names no catalog entry.
    pub fn add_token(&mut self, tag: &str) -> Result<Vec<Action>, PlannerError> {
        self.core.add_token(tag)
    }

    pub fn reset(&mut self) -> Vec<Action> {
        self.core.reset()
    }

    pub fn set_background(&mut self, background: Background) -> Vec<Action> {
        self.core.set_background(background)
    }

    // --- Viewport ---

    /// Place the canvas on screen and size its backing store.
    ///
    /// `display_width_css` is the on-screen width of the canvas element; the
    /// layout is scaled down to fit it. `dpr` is the device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, offset_x: f64, offset_y: f64, display_width_css: f64, dpr: f64) {
        let config = self.core.placement.config();
        let camera = Camera::fit_width(offset_x, offset_y, display_width_css, config.canvas_width);
        let backing_w = (config.canvas_width * camera.scale * dpr).round().max(1.0);
        let backing_h = (config.canvas_height * camera.scale * dpr).round().max(1.0);
        self.canvas.set_width(backing_w as u32);
        self.canvas.set_height(backing_h as u32);
        self.core.camera = camera;
        self.core.dpr = dpr;
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    // --- Render ---

    /// Draw the current frame to the canvas.
    ///
    /// An image-backed theme starts loading on the first frame that needs
    /// it and shows up on the first frame after it has loaded.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.sync_backdrop()?;
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let image = self.backdrop.as_ref().map(|(_, image)| image);
        render::draw(&ctx, &self.core, image)
    }

    /// Start loading the selected theme's image, dropping a stale one.
    fn sync_backdrop(&mut self) -> Result<(), JsValue> {
        let Some(url) = self.core.model().background().theme().backdrop.image_url() else {
            self.backdrop = None;
            return Ok(());
        };
        if self.backdrop.as_ref().is_some_and(|(loaded, _)| *loaded == url) {
            return Ok(());
        }
        let image = HtmlImageElement::new()?;
        image.set_src(url);
        debug!(url, "loading backdrop image");
        self.backdrop = Some((url, image));
        Ok(())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn bearing(&self, id: TokenId) -> Option<f64> {
        self.core.bearing(id)
    }

    #[must_use]
    pub fn model(&self) -> &CanvasModel {
        self.core.model()
    }
}
