//! Demo application: session state and event dispatch.
//!
//! Translates crossterm events into the tool-event protocol: mouse moves
//! become pointer events, Ctrl+wheel becomes constrained scrolling, a
//! right click opens the context menu, and the remaining keys drive the
//! host itself (tool toggling, undo, quit).

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::error::HostError;
use crate::scene::Scene;
use crate::tool::{EventOutcome, Modifiers, OptionSwitcher, ToolEvents};
use crate::traits::Host;
use crate::ui::{self, MenuOverlay};

/// Status line shown while the tool is deselected.
const IDLE_HINT: &str = "Tool idle. Space re-activates it.";

/// Top-level state for the viewer session.
pub struct App {
    pub scene: Scene,
    pub tool: OptionSwitcher<Scene>,
    /// Open context menu, if any. The menu is modal: the tool is
    /// suspended while it is up.
    pub menu: Option<MenuOverlay>,
    /// Last pointer cell, for tooltip anchoring.
    pub pointer: Option<(u16, u16)>,
    /// Inner viewport rectangle from the last render; pointer events map
    /// through it into scene coordinates.
    pub viewport: Rect,
    /// Scroll offset of the tag sidebar — the default scroll target when
    /// the tool passes a wheel event through.
    pub sidebar_scroll: u16,
    pub tool_active: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            tool: OptionSwitcher::new(),
            menu: None,
            pointer: None,
            viewport: Rect::default(),
            sidebar_scroll: 0,
            tool_active: false,
            should_quit: false,
        }
    }

    /// Select or deselect the switching tool.
    pub fn toggle_tool(&mut self) -> Result<(), HostError> {
        if self.tool_active {
            self.tool.deactivate(&mut self.scene)?;
            self.tool_active = false;
            self.scene.set_status(IDLE_HINT);
        } else {
            self.tool.activate(&mut self.scene)?;
            self.tool_active = true;
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<(), HostError> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => self.scene.mark_dirty(),
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<(), HostError> {
        if self.menu.is_some() {
            match key.code {
                KeyCode::Up => {
                    if let Some(menu) = &mut self.menu {
                        menu.select_prev();
                    }
                    self.scene.mark_dirty();
                }
                KeyCode::Down => {
                    if let Some(menu) = &mut self.menu {
                        menu.select_next();
                    }
                    self.scene.mark_dirty();
                }
                KeyCode::Enter => self.activate_menu_selection(),
                KeyCode::Esc => self.close_menu(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.toggle_tool()?,
            KeyCode::Char('u') => {
                if !self.scene.undo() {
                    tracing::debug!("nothing to undo");
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.menu.is_some() {
            self.handle_menu_mouse(mouse);
            return;
        }

        match mouse.kind {
            MouseEventKind::Moved => {
                let cell = (mouse.column, mouse.row);
                if self.pointer != Some(cell) {
                    self.pointer = Some(cell);
                    self.scene.mark_dirty();
                }
                if self.tool_active {
                    if let Some((x, y)) = self.to_scene(cell) {
                        self.tool.pointer_moved(&mut self.scene, x, y);
                    }
                }
            }
            MouseEventKind::ScrollDown => self.handle_scroll(-1.0, mouse.modifiers),
            MouseEventKind::ScrollUp => self.handle_scroll(1.0, mouse.modifiers),
            MouseEventKind::Down(MouseButton::Right) => {
                if self.tool_active {
                    self.open_menu(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    fn handle_scroll(&mut self, delta: f64, modifiers: KeyModifiers) {
        let modifiers = Modifiers {
            shift: modifiers.contains(KeyModifiers::SHIFT),
            control: modifiers.contains(KeyModifiers::CONTROL),
            alt: modifiers.contains(KeyModifiers::ALT),
        };
        let outcome = if self.tool_active {
            self.tool.scrolled(&mut self.scene, delta, modifiers)
        } else {
            EventOutcome::PassThrough
        };
        if outcome == EventOutcome::PassThrough {
            // Default wheel behavior: scroll the sidebar.
            self.sidebar_scroll = if delta < 0.0 {
                self.sidebar_scroll.saturating_add(1)
            } else {
                self.sidebar_scroll.saturating_sub(1)
            };
            self.scene.mark_dirty();
        }
    }

    fn handle_menu_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .menu
                    .as_mut()
                    .and_then(|menu| menu.hit(mouse.column, mouse.row));
                match hit {
                    Some(id) => {
                        self.tool.menu_item_activated(&mut self.scene, id);
                        self.close_menu();
                    }
                    None => self.close_menu(),
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                self.close_menu();
                self.open_menu(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn open_menu(&mut self, x: u16, y: u16) {
        let mut overlay = MenuOverlay::new((x, y));
        self.tool.build_menu(&mut overlay);
        if overlay.is_empty() {
            // No group under consideration, nothing to list.
            return;
        }
        self.tool.suspend(&mut self.scene);
        self.menu = Some(overlay);
        self.scene.mark_dirty();
    }

    fn close_menu(&mut self) {
        if self.menu.take().is_some() {
            self.tool.resume(&mut self.scene);
            self.scene.mark_dirty();
        }
    }

    fn activate_menu_selection(&mut self) {
        let selected = self.menu.as_ref().and_then(|menu| menu.selected_id());
        if let Some(id) = selected {
            self.tool.menu_item_activated(&mut self.scene, id);
        }
        self.close_menu();
    }

    /// Map a screen cell into scene coordinates, or `None` when the cell
    /// lies outside the viewport.
    fn to_scene(&self, (x, y): (u16, u16)) -> Option<(f64, f64)> {
        let vp = self.viewport;
        if x < vp.x || x >= vp.x + vp.width || y < vp.y || y >= vp.y + vp.height {
            return None;
        }
        Some(((x - vp.x) as f64, (y - vp.y) as f64))
    }
}

/// Run the blocking event loop until the user quits.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> color_eyre::Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    app.tool.activate(&mut app.scene)?;
    app.tool_active = true;

    loop {
        if app.scene.take_dirty() {
            terminal.draw(|frame| ui::render(frame, app))?;
        }
        let event = crossterm::event::read()?;
        app.handle_event(event)?;
        if app.should_quit {
            break;
        }
    }

    if app.tool_active {
        app.tool.deactivate(&mut app.scene)?;
    }
    Ok(())
}
