//! Per-date composition: a universal template rendered through a date overlay.
//!
//! Edits made through rendered controls resolve the target date through a
//! [`DateSource`] at the moment of the edit, not when the row was rendered.

use crate::journal::load_journal_entry;
use crate::keys::DateKey;
use crate::overlay::{load_overlay, set_overlay_entry, Checked, OverlayKind, Rating, Ratings};
use crate::storage::KeyValueStore;
use crate::template::{append_to_template, load_template, TemplateKind};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRow {
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRow {
    pub name: String,
    pub value: Rating,
}

/// Everything shown for one selected date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayView {
    pub date: DateKey,
    pub entry: String,
    pub checklist: Vec<ChecklistRow>,
    pub ratings: Vec<RatingRow>,
}

/// Live accessor for the currently selected date.
pub trait DateSource {
    fn selected_date(&self) -> Option<DateKey>;
}

impl DateSource for DateKey {
    fn selected_date(&self) -> Option<DateKey> {
        Some(self.clone())
    }
}

/// Shared date selection for hosts that keep rendered rows in-process; clones
/// observe the same value. The HTTP app does not use it: there the page script
/// reads the date input at edit time and each request carries that date.
#[derive(Debug, Clone, Default)]
pub struct DateSelector {
    current: Rc<RefCell<Option<DateKey>>>,
}

impl DateSelector {
    pub fn select(&self, date: DateKey) {
        *self.current.borrow_mut() = Some(date);
    }

    pub fn clear(&self) {
        *self.current.borrow_mut() = None;
    }
}

impl DateSource for DateSelector {
    fn selected_date(&self) -> Option<DateKey> {
        self.current.borrow().clone()
    }
}

pub fn display_checklist<S: KeyValueStore + ?Sized>(store: &mut S, date: &DateKey) -> Vec<ChecklistRow> {
    let overlay = load_overlay::<Checked, S>(store, date);
    load_template(store, TemplateKind::Checklist)
        .into_iter()
        .map(|name| {
            let checked = overlay.get(&name).copied().unwrap_or_else(Checked::default_value);
            ChecklistRow { name, checked }
        })
        .collect()
}

pub fn display_ratings<S: KeyValueStore + ?Sized>(store: &mut S, date: &DateKey) -> Vec<RatingRow> {
    let overlay = load_overlay::<Ratings, S>(store, date);
    load_template(store, TemplateKind::RatingCategories)
        .into_iter()
        .map(|name| {
            let value = overlay.get(&name).copied().unwrap_or_else(Ratings::default_value);
            RatingRow { name, value }
        })
        .collect()
}

/// Date selection drives every refresh: journal text, checklist and ratings.
pub fn select_date<S: KeyValueStore + ?Sized>(store: &mut S, date: &DateKey) -> DayView {
    DayView {
        date: date.clone(),
        entry: load_journal_entry(store, date),
        checklist: display_checklist(store, date),
        ratings: display_ratings(store, date),
    }
}

/// Records a checkbox toggle against whichever date is selected now.
/// Returns the date written, or `None` when no date is selected.
pub fn toggle_checklist_item<S, D>(store: &mut S, dates: &D, name: &str, checked: bool) -> Option<DateKey>
where
    S: KeyValueStore + ?Sized,
    D: DateSource + ?Sized,
{
    let Some(date) = dates.selected_date() else {
        debug!("no date selected; dropping toggle of {name:?}");
        return None;
    };
    set_overlay_entry::<Checked, S>(store, &date, name, checked);
    Some(date)
}

/// Records a slider position against whichever date is selected now.
pub fn set_rating<S, D>(store: &mut S, dates: &D, name: &str, value: Rating) -> Option<DateKey>
where
    S: KeyValueStore + ?Sized,
    D: DateSource + ?Sized,
{
    let Some(date) = dates.selected_date() else {
        debug!("no date selected; dropping rating of {name:?}");
        return None;
    };
    set_overlay_entry::<Ratings, S>(store, &date, name, value);
    Some(date)
}

impl ChecklistRow {
    /// Control binding for in-process hosts. HTTP handlers call
    /// [`toggle_checklist_item`] directly with the request's date.
    pub fn toggle<S, D>(&mut self, store: &mut S, dates: &D, checked: bool) -> Option<DateKey>
    where
        S: KeyValueStore + ?Sized,
        D: DateSource + ?Sized,
    {
        self.checked = checked;
        toggle_checklist_item(store, dates, &self.name, checked)
    }
}

impl RatingRow {
    /// Control binding for in-process hosts; see [`ChecklistRow::toggle`].
    pub fn slide<S, D>(&mut self, store: &mut S, dates: &D, value: Rating) -> Option<DateKey>
    where
        S: KeyValueStore + ?Sized,
        D: DateSource + ?Sized,
    {
        self.value = value;
        set_rating(store, dates, &self.name, value)
    }
}

/// New checklist item intake. The returned row is at its default value and is
/// not written into any date's overlay.
pub fn add_checklist_item<S: KeyValueStore + ?Sized>(store: &mut S, input: &str) -> Option<ChecklistRow> {
    append_to_template(store, TemplateKind::Checklist, input).map(|name| ChecklistRow {
        name,
        checked: Checked::default_value(),
    })
}

pub fn add_rating_category<S: KeyValueStore + ?Sized>(store: &mut S, input: &str) -> Option<RatingRow> {
    append_to_template(store, TemplateKind::RatingCategories, input).map(|name| RatingRow {
        name,
        value: Ratings::default_value(),
    })
}
