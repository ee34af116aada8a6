// App module - UI state over the tracker: selection, accordion, auto-advance

use crate::event::{self, AppEvent};
use crate::models::Plant;
use crate::scheduler::ResetScheduler;
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;
use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::ops::Range;
use std::time::Duration;
use tracing::debug;

const TICK: Duration = Duration::from_millis(250);

pub struct App<S: KeyValueStore> {
    pub should_quit: bool,
    pub tracker: Tracker<S>,
    pub selected: Option<usize>,
    /// Plant whose details are open. At most one at a time.
    pub expanded: Option<usize>,
    scheduler: ResetScheduler,
}

/// Stable grouping: sections keep the order in which their location first
/// appears, plants keep their order within a section.
pub fn group_by_location(plants: Vec<Plant>) -> Vec<Plant> {
    let mut locations: Vec<String> = Vec::new();
    for plant in &plants {
        if !locations.contains(&plant.location) {
            locations.push(plant.location.clone());
        }
    }

    let mut grouped = plants;
    grouped.sort_by_key(|plant| locations.iter().position(|l| *l == plant.location));
    grouped
}

impl<S: KeyValueStore> App<S> {
    pub fn new(tracker: Tracker<S>, scheduler: ResetScheduler) -> Self {
        let selected = if tracker.plants().is_empty() { None } else { Some(0) };
        Self {
            should_quit: false,
            tracker,
            selected,
            expanded: None,
            scheduler,
        }
    }

    /// Location name and index range of each section, in display order.
    pub fn sections(&self) -> Vec<(&str, Range<usize>)> {
        let mut sections: Vec<(&str, Range<usize>)> = Vec::new();
        for (i, plant) in self.tracker.plants().iter().enumerate() {
            if let Some((location, range)) = sections.last_mut() {
                if *location == plant.location {
                    range.end = i + 1;
                    continue;
                }
            }
            sections.push((plant.location.as_str(), i..i + 1));
        }
        sections
    }

    pub fn selected_plant(&self) -> Option<&Plant> {
        self.selected.and_then(|i| self.tracker.plants().get(i))
    }

    pub fn select_previous(&mut self) {
        let len = self.tracker.plants().len();
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(i) if i > 0 => i - 1,
            Some(_) => len - 1,
            None => 0,
        });
    }

    pub fn select_next(&mut self) {
        let len = self.tracker.plants().len();
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(i) if i < len - 1 => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    pub fn jump_to_top(&mut self) {
        if !self.tracker.plants().is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn toggle_details(&mut self) {
        if let Some(index) = self.selected {
            self.expanded = if self.expanded == Some(index) {
                None
            } else {
                Some(index)
            };
        }
    }

    /// Flips the selected plant. Watering it closes its details and moves on
    /// to the next plant, into the next section when this was the last one.
    pub fn toggle_watered(&mut self) {
        let (Some(index), Some(id)) = (self.selected, self.selected_plant().map(|p| p.id.clone()))
        else {
            return;
        };

        let checked = !self.tracker.is_watered(index);
        self.tracker.on_item_toggled(&id, checked);

        if !checked {
            return;
        }

        let next = index + 1;
        if next < self.tracker.plants().len() {
            self.selected = Some(next);
            self.expanded = Some(next);
        } else {
            self.expanded = None;
        }
    }

    /// Runs the midnight reset if due. Returns whether it fired.
    pub fn tick(&mut self) -> bool {
        let fired = self.scheduler.poll(&mut self.tracker);
        if fired {
            debug!("midnight reset applied to the view");
        }
        fired
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Up => self.select_previous(),
            AppEvent::Down => self.select_next(),
            AppEvent::ToggleDetails => self.toggle_details(),
            AppEvent::ToggleWatered => self.toggle_watered(),
            AppEvent::Top => self.jump_to_top(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        loop {
            // Render the UI
            terminal.draw(|frame| crate::ui::render(frame, self))?;

            let timeout = TICK.min(self.scheduler.time_until_next());
            if let Some(Event::Key(key)) = event::read_event(timeout)? {
                if let Some(app_event) = event::handle_key_event(key) {
                    self.handle_event(app_event);
                }
            }

            self.tick();

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
