use crate::components::component::{Component, ComponentAction};
use crate::menu::{Catalog, MenuItem};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

/// Lines each card occupies in the list (title, ingredients, spacer).
const CARD_HEIGHT: u16 = 3;

/// The menu board: category tabs on top, item cards below.
///
/// Owns its own navigation state and reports adds to the app, which owns
/// the cart and the toast.
pub struct MenuBoardComponent {
    catalog: Catalog,
    active_category: usize,
    list_state: ListState,
    /// Clickable card rows from the last render: (rect, item index)
    clickable_areas: Vec<(Rect, usize)>,
    /// Clickable tab labels from the last render: (rect, category index)
    tab_areas: Vec<(Rect, usize)>,
}

impl MenuBoardComponent {
    pub fn new(catalog: Catalog) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            catalog,
            active_category: 0,
            list_state,
            clickable_areas: Vec::new(),
            tab_areas: Vec::new(),
        }
    }

    pub fn active_category(&self) -> usize {
        self.active_category
    }

    fn item_count(&self) -> usize {
        self.catalog
            .category(self.active_category)
            .map_or(0, |c| c.items.len())
    }

    /// The card currently under the selection, if any.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        let category = self.catalog.category(self.active_category)?;
        category.items.get(self.list_state.selected()?)
    }

    /// Switch tabs and reset the selection to the first card.
    fn select_category(&mut self, index: usize) {
        if index < self.catalog.len() && index != self.active_category {
            self.active_category = index;
            self.list_state.select(Some(0));
        }
    }

    fn next_category(&mut self) {
        let next = (self.active_category + 1) % self.catalog.len().max(1);
        self.select_category(next);
    }

    fn previous_category(&mut self) {
        let len = self.catalog.len().max(1);
        let prev = (self.active_category + len - 1) % len;
        self.select_category(prev);
    }

    fn select_previous(&mut self) {
        if let Some(current) = self.list_state.selected() {
            if current > 0 {
                self.list_state.select(Some(current - 1));
            }
        } else if self.item_count() > 0 {
            self.list_state.select(Some(0));
        }
    }

    fn select_next(&mut self) {
        let count = self.item_count();
        if let Some(current) = self.list_state.selected() {
            if current + 1 < count {
                self.list_state.select(Some(current + 1));
            }
        } else if count > 0 {
            self.list_state.select(Some(0));
        }
    }

    fn add_selected(&self) -> ComponentAction {
        match self.selected_item() {
            Some(item) => ComponentAction::AddItem(item.clone()),
            None => ComponentAction::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ComponentAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Tab clicks switch the category.
                let tab_hit = self
                    .tab_areas
                    .iter()
                    .find(|(rect, _)| hit(rect, mouse.column, mouse.row))
                    .map(|(_, idx)| *idx);
                if let Some(idx) = tab_hit {
                    self.select_category(idx);
                    return ComponentAction::Update;
                }
                // Card clicks select and add, mirroring the card's Add button.
                let card_hit = self
                    .clickable_areas
                    .iter()
                    .find(|(rect, _)| hit(rect, mouse.column, mouse.row))
                    .map(|(_, idx)| *idx);
                if let Some(idx) = card_hit {
                    self.list_state.select(Some(idx));
                    return self.add_selected();
                }
                ComponentAction::None
            }
            MouseEventKind::ScrollUp => {
                self.select_previous();
                ComponentAction::Update
            }
            MouseEventKind::ScrollDown => {
                self.select_next();
                ComponentAction::Update
            }
            _ => ComponentAction::None,
        }
    }

    fn render_tabs(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        self.tab_areas.clear();

        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        let mut x = area.x + 1;
        for (i, category) in self.catalog.categories.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", t.muted_style()));
                x += 2;
            }
            let label = format!(" {} ", category.label);
            let width = label.chars().count() as u16;
            let style = if i == self.active_category {
                t.tab_active_style()
            } else {
                t.muted_style()
            };
            spans.push(Span::styled(label, style));
            self.tab_areas
                .push((Rect::new(x, area.y, width, 1), i));
            x += width;
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        self.clickable_areas.clear();

        let Some(category) = self.catalog.category(self.active_category) else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(format!(" {} ", category.label))
            .title_style(t.title_style());
        let inner = block.inner(area);

        let items: Vec<ListItem> = category
            .items
            .iter()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        item.name.clone(),
                        t.text_style().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(item.ingredient_summary(), t.muted_style())),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, area, &mut self.list_state);

        // Record where each visible card landed so clicks can find them.
        let offset = self.list_state.offset();
        let visible = (inner.height / CARD_HEIGHT) as usize;
        for (slot, item_idx) in (offset..category.items.len().min(offset + visible + 1)).enumerate()
        {
            let y = inner.y + (slot as u16) * CARD_HEIGHT;
            if y >= inner.y + inner.height {
                break;
            }
            let height = CARD_HEIGHT.min(inner.y + inner.height - y);
            self.clickable_areas
                .push((Rect::new(inner.x, y, inner.width, height), item_idx));
        }
    }
}

fn hit(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

impl Component for MenuBoardComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.render_tabs(frame, chunks[0]);
        self.render_cards(frame, chunks[1]);
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<ComponentAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => ComponentAction::Quit,
                    KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                        self.previous_category();
                        ComponentAction::Update
                    }
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                        self.next_category();
                        ComponentAction::Update
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.select_previous();
                        ComponentAction::Update
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.select_next();
                        ComponentAction::Update
                    }
                    KeyCode::Enter | KeyCode::Char('a') => self.add_selected(),
                    KeyCode::Char(c @ '1'..='9') => {
                        let idx = (c as usize) - ('1' as usize);
                        self.select_category(idx);
                        ComponentAction::Update
                    }
                    _ => ComponentAction::None,
                };
                Ok(action)
            }
            Event::Mouse(mouse) => Ok(self.handle_mouse(mouse)),
            _ => Ok(ComponentAction::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_adds_the_selected_item() {
        let mut board = MenuBoardComponent::new(Catalog::builtin());
        let expected = board.selected_item().unwrap().clone();

        let action = board.handle_event(press(KeyCode::Enter)).unwrap();
        assert_eq!(action, ComponentAction::AddItem(expected));
    }

    #[test]
    fn tab_switch_resets_selection() {
        let mut board = MenuBoardComponent::new(Catalog::builtin());
        board.handle_event(press(KeyCode::Down)).unwrap();
        assert_eq!(board.list_state.selected(), Some(1));

        board.handle_event(press(KeyCode::Right)).unwrap();
        assert_eq!(board.active_category(), 1);
        assert_eq!(board.list_state.selected(), Some(0));
    }

    #[test]
    fn category_navigation_wraps_around() {
        let mut board = MenuBoardComponent::new(Catalog::builtin());
        let len = Catalog::builtin().len();

        board.handle_event(press(KeyCode::Left)).unwrap();
        assert_eq!(board.active_category(), len - 1);
        board.handle_event(press(KeyCode::Right)).unwrap();
        assert_eq!(board.active_category(), 0);
    }

    #[test]
    fn selection_clamps_at_the_ends() {
        let mut board = MenuBoardComponent::new(Catalog::builtin());
        board.handle_event(press(KeyCode::Up)).unwrap();
        assert_eq!(board.list_state.selected(), Some(0));

        let count = Catalog::builtin().categories[0].items.len();
        for _ in 0..count + 5 {
            board.handle_event(press(KeyCode::Down)).unwrap();
        }
        assert_eq!(board.list_state.selected(), Some(count - 1));
    }

    #[test]
    fn number_keys_jump_to_a_category() {
        let mut board = MenuBoardComponent::new(Catalog::builtin());
        board.handle_event(press(KeyCode::Char('3'))).unwrap();
        assert_eq!(board.active_category(), 2);

        // Out-of-range digits are ignored.
        board.handle_event(press(KeyCode::Char('9'))).unwrap();
        assert_eq!(board.active_category(), 2);
    }

    #[test]
    fn q_quits() {
        let mut board = MenuBoardComponent::new(Catalog::builtin());
        let action = board.handle_event(press(KeyCode::Char('q'))).unwrap();
        assert_eq!(action, ComponentAction::Quit);
    }
}
