//! Top-level editor loop.
//!
//! The editor owns the designer state together with the persistence and
//! presentation collaborators. Each input event runs to completion: the
//! designer state reports what changed, the editor saves when the scene was
//! mutated and redraws when something visible changed. Storage failures are
//! logged and never reach the user.

use tracing::{info, warn};

use crate::designer_state::{DesignerState, Outcome, Tool};
use crate::export::{sanitize_identifier, ExportGenerator, ExportOptions};
use crate::model::Point;
use crate::persistence::{resolve_project_name, ProjectStore};
use crate::renderer::{Frame, Renderer};

/// Pointer buttons the editor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Keys with editor bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Delete,
    Backspace,
}

/// Host input, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        screen: Point,
        button: PointerButton,
        shift: bool,
    },
    PointerMove {
        screen: Point,
        shift: bool,
    },
    PointerUp {
        screen: Point,
        button: PointerButton,
    },
    DoubleClick {
        screen: Point,
    },
    Wheel {
        delta_y: f64,
    },
    Key {
        key: Key,
        ctrl: bool,
    },
    Resize {
        width: f64,
        height: f64,
    },
}

/// Event loop context tying the designer to its collaborators.
pub struct Editor {
    state: DesignerState,
    store: Box<dyn ProjectStore>,
    renderer: Box<dyn Renderer>,
    project_name: String,
}

impl Editor {
    pub fn new(
        state: DesignerState,
        store: Box<dyn ProjectStore>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        let project_name = state.design_name.clone();
        Self {
            state,
            store,
            renderer,
            project_name,
        }
    }

    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn store(&self) -> &dyn ProjectStore {
        self.store.as_ref()
    }

    /// Loads the store's current project, if there is one, and draws.
    ///
    /// Returns whether a project was loaded.
    pub fn startup(&mut self) -> bool {
        let loaded = match self.store.current() {
            Ok(Some(name)) => self.open_project(&name),
            Ok(None) => false,
            Err(e) => {
                warn!("Could not read current project: {}", e);
                false
            }
        };
        self.redraw();
        loaded
    }

    /// Replaces the scene with a stored project.
    pub fn open_project(&mut self, name: &str) -> bool {
        match self.store.load(name) {
            Ok(Some(snapshot)) => {
                self.state.restore(snapshot);
                self.project_name = name.to_string();
                self.state.design_name = name.to_string();
                if let Err(e) = self.store.set_current(name) {
                    warn!("Could not mark '{}' as current: {}", name, e);
                }
                info!("Opened project '{}'", name);
                self.redraw();
                true
            }
            Ok(None) => {
                warn!("Project '{}' not found", name);
                false
            }
            Err(e) => {
                warn!("Failed to load project '{}': {}", name, e);
                false
            }
        }
    }

    /// Saves under a new name and makes it the current project.
    pub fn save_as(&mut self, name_hint: &str) -> bool {
        match resolve_project_name(name_hint) {
            Ok(name) => {
                self.project_name = name.clone();
                self.state.design_name = name;
                self.save()
            }
            Err(e) => {
                warn!("Cannot save as {:?}: {}", name_hint, e);
                false
            }
        }
    }

    /// Clears the scene, keeping settings, and saves the empty project.
    pub fn new_project(&mut self, name_hint: &str) {
        self.state.new_design();
        self.save_as(name_hint);
        self.redraw();
    }

    /// Runs the export collaborator over the current scene.
    ///
    /// The namespace is derived from the project name.
    pub fn export(
        &self,
        generator: &dyn ExportGenerator,
        filename: &str,
        options: &ExportOptions,
    ) -> String {
        let namespace = sanitize_identifier(&self.project_name);
        generator.generate_export(&namespace, filename, options, &self.state.canvas)
    }

    /// Dispatches one input event.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        let outcome = self.dispatch(event);
        if outcome.persist {
            self.state.mark_modified();
            self.save();
        }
        if outcome.redraw {
            self.redraw();
        }
        outcome
    }

    fn dispatch(&mut self, event: InputEvent) -> Outcome {
        let state = &mut self.state;
        let pointer = matches!(
            event,
            InputEvent::PointerDown { .. }
                | InputEvent::PointerMove { .. }
                | InputEvent::PointerUp { .. }
                | InputEvent::DoubleClick { .. }
        );
        if pointer && !state.viewport.has_surface() {
            return Outcome::none();
        }
        match event {
            InputEvent::PointerDown {
                screen,
                button: PointerButton::Middle,
                ..
            } => state.begin_pan(screen),
            InputEvent::PointerDown {
                screen,
                button: PointerButton::Primary,
                shift,
            } if !state.is_panning() => {
                let ev = state.event_at(screen, shift);
                state.pointer_down(ev)
            }
            InputEvent::PointerMove { screen, shift } => {
                if state.is_panning() {
                    state.pan_to(screen)
                } else {
                    let ev = state.event_at(screen, shift);
                    state.pointer_move(ev)
                }
            }
            InputEvent::PointerUp {
                button: PointerButton::Middle,
                ..
            } => state.end_pan(),
            InputEvent::PointerUp {
                screen,
                button: PointerButton::Primary,
            } => {
                let ev = state.event_at(screen, false);
                state.pointer_up(ev)
            }
            InputEvent::DoubleClick { screen } => {
                let ev = state.event_at(screen, false);
                state.double_click(ev)
            }
            InputEvent::Wheel { delta_y } => state.wheel(delta_y),
            InputEvent::Key { key, ctrl } => self.handle_key(key, ctrl),
            InputEvent::Resize { width, height } => state.set_canvas_size(width, height),
            _ => Outcome::none(),
        }
    }

    fn handle_key(&mut self, key: Key, ctrl: bool) -> Outcome {
        let state = &mut self.state;
        match (key, ctrl) {
            (Key::Escape, _) => state.cancel(),
            (Key::Delete | Key::Backspace, _) => state.delete_selected(),
            (Key::Char(c), true) => match c.to_ascii_lowercase() {
                'd' => state.duplicate_selected(),
                's' => {
                    self.save();
                    Outcome::none()
                }
                _ => Outcome::none(),
            },
            (Key::Char('+' | '='), false) => state.zoom_in(),
            (Key::Char('-'), false) => state.zoom_out(),
            (Key::Char('0'), false) => state.reset_view(),
            (Key::Char(c), false) => match Tool::from_shortcut(c) {
                Some(tool) => state.set_tool(tool),
                None => Outcome::none(),
            },
        }
    }

    /// Saves the current project; failures are logged.
    pub fn save(&mut self) -> bool {
        let snapshot = self.state.snapshot();
        let saved = self
            .store
            .save(&self.project_name, &snapshot)
            .and_then(|name| {
                self.store.set_current(&name)?;
                Ok(name)
            });
        match saved {
            Ok(name) => {
                self.project_name = name;
                self.state.is_modified = false;
                true
            }
            Err(e) => {
                warn!("Failed to save project '{}': {}", self.project_name, e);
                false
            }
        }
    }

    fn redraw(&mut self) {
        if self.state.viewport.has_surface() {
            self.renderer.render(&Frame::from_state(&self.state));
        }
    }
}
