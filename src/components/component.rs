use crate::menu::MenuItem;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;

/// Action that a component can return after handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentAction {
    /// No action needed
    None,
    /// Component state was updated, needs re-render
    Update,
    /// Quit the application
    Quit,
    /// The user added an item; the app owns the cart and the toast
    AddItem(MenuItem),
}

/// Trait for all UI components
///
/// Components are self-contained UI elements that:
/// - Manage their own state
/// - Handle their own events
/// - Render themselves
/// - Return actions for the app to handle
pub trait Component {
    /// Render the component to the given area
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Handle an event (keyboard, mouse, etc.)
    /// Returns an action that the app should take
    fn handle_event(&mut self, event: Event) -> Result<ComponentAction>;
}
