use crate::cart::Cart;
use crate::components::{Component, ComponentAction, Footer, Header, MenuBoardComponent};
use crate::config::Config;
use crate::menu::Catalog;
use crate::toast::{DragRelease, ToastController};
use crate::tui::Tui;
use crate::widgets::{toast_area, ToastWidget, CELL_POINTS};
use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const FOOTER_HINTS: &str =
    "Tabs: ←/→ | Browse: ↑/↓ | Add: Enter | Dismiss toast: drag it down | Quit: q";

/// Main application state
pub struct App {
    tui: Tui,
    catalog_board: MenuBoardComponent,
    cart: Cart,
    toast: ToastController,
    should_quit: bool,
    /// Whether the current mouse drag started on the toast surface
    dragging_toast: bool,
    /// Screen area from the last draw, for toast hit-testing
    last_area: Rect,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let catalog = match &config.menu_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };
        info!(
            categories = catalog.len(),
            custom_menu = config.menu_path.is_some(),
            "Loaded menu catalog"
        );

        let tui = Tui::new()?;
        let toast = ToastController::new(config.toast.timings());

        Ok(Self {
            tui,
            catalog_board: MenuBoardComponent::new(catalog),
            cart: Cart::new(),
            toast,
            should_quit: false,
            dragging_toast: false,
            last_area: Rect::default(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        // Main event loop
        loop {
            let now = Instant::now();
            self.toast.tick(now);
            self.draw()?;

            if self.should_quit {
                break;
            }

            if let Some(event) = self.tui.poll_event(self.poll_timeout(now))? {
                self.handle_event(event)?;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Poll timeout for the next loop iteration: wake up for the toast's
    /// next scheduled transition instead of blindly every 250ms.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let default = Duration::from_millis(250);
        match self.toast.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(now)
                .clamp(Duration::from_millis(10), default),
            None => default,
        }
    }

    fn draw(&mut self) -> Result<()> {
        let cart_count = self.cart.count();
        let board = &mut self.catalog_board;
        let toast = &self.toast;
        let last_area = &mut self.last_area;

        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            *last_area = area;

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(2),
                ])
                .split(area);

            let _ = Header::render(frame, chunks[0], "Rady's Bar — Digital Menu", cart_count);
            let _ = board.render(frame, chunks[1]);
            let _ = Footer::render(frame, chunks[2], FOOTER_HINTS);

            // Toast overlays everything, bottom-right.
            frame.render_widget(ToastWidget::new(toast), area);
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let now = Instant::now();

        // Mouse input over the toast drives the swipe gesture; everything
        // else belongs to the menu board.
        if let Event::Mouse(mouse) = &event {
            if self.handle_toast_gesture(now, *mouse) {
                return Ok(());
            }
        }

        let action = self.catalog_board.handle_event(event)?;
        match action {
            ComponentAction::AddItem(item) => {
                let count = self.cart.add(item.clone());
                info!(item = %item.name, cart_count = count, "Added item to cart");
                self.toast
                    .notify_at(now, format!("{} added to the cart", item.name));
            }
            ComponentAction::Quit => {
                self.should_quit = true;
            }
            ComponentAction::Update | ComponentAction::None => {}
        }
        Ok(())
    }

    /// Route a mouse event to the toast gesture if it belongs there.
    /// Returns true when the event was consumed.
    fn handle_toast_gesture(&mut self, now: Instant, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.toast.is_active() {
                    return false;
                }
                let surface = toast_area(self.last_area, self.toast.drag_offset());
                let on_toast = mouse.column >= surface.x
                    && mouse.column < surface.x + surface.width
                    && mouse.row >= surface.y
                    && mouse.row < surface.y + surface.height;
                if !on_toast {
                    return false;
                }
                self.dragging_toast = self.toast.drag_begin(now, row_to_points(mouse.row));
                self.dragging_toast
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging_toast => {
                self.toast.drag_update(row_to_points(mouse.row));
                true
            }
            MouseEventKind::Up(MouseButton::Left) if self.dragging_toast => {
                self.dragging_toast = false;
                let release = self.toast.drag_end(now);
                debug!(?release, "Toast drag released");
                if release == DragRelease::Dismissed {
                    info!("Toast dismissed by swipe");
                }
                true
            }
            _ => false,
        }
    }
}

/// Terminal rows to gesture points, so the drag thresholds keep their
/// intended physical feel.
fn row_to_points(row: u16) -> f32 {
    f32::from(row) * CELL_POINTS
}
