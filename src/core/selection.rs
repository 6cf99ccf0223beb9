use fnv::FnvHashSet;
use thiserror::Error;

/// Payload handed to selection observers after every successful toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub label: String,
    pub selected: bool,
    /// Sorted snapshot of all selected labels, for summary displays.
    pub selected_labels: Vec<String>,
}

/// Callback invoked synchronously whenever the selection set changes.
pub type SelectionObserver = Box<dyn FnMut(&SelectionChange)>;

/// Rejected selection operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The label does not exist in the generated seat grid.
    #[error("seat label {0:?} is not part of the layout")]
    UnknownLabel(String),
}

/// The single source of truth for which seats are selected.
///
/// Seat views never hold their own selected flag; they derive highlight state
/// by membership query each frame, and summary displays update through the
/// registered observers. Starts empty and lives for the scene's lifetime.
pub struct SelectionState {
    selected: FnvHashSet<String>,
    known_labels: FnvHashSet<String>,
    observers: Vec<SelectionObserver>,
}

impl SelectionState {
    /// Build an empty selection over the given set of valid seat labels.
    pub fn new(known_labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            selected: FnvHashSet::default(),
            known_labels: known_labels.into_iter().collect(),
            observers: Vec::new(),
        }
    }

    /// Register an observer; it fires on every successful toggle.
    pub fn subscribe(&mut self, observer: SelectionObserver) {
        self.observers.push(observer);
    }

    /// Flip membership of `label` and notify observers.
    ///
    /// Returns the new membership state. Labels outside the generated layout
    /// are rejected rather than silently inserted.
    pub fn toggle(&mut self, label: &str) -> Result<bool, SelectionError> {
        if !self.known_labels.contains(label) {
            return Err(SelectionError::UnknownLabel(label.to_owned()));
        }
        let now_selected = if self.selected.remove(label) {
            false
        } else {
            self.selected.insert(label.to_owned());
            true
        };
        let change = SelectionChange {
            label: label.to_owned(),
            selected: now_selected,
            selected_labels: self.sorted_labels(),
        };
        for obs in &mut self.observers {
            obs(&change);
        }
        Ok(now_selected)
    }

    /// Membership query used by the render pass, once per seat per frame.
    #[inline]
    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    /// Number of currently selected seats.
    #[inline]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Sorted snapshot of selected labels.
    pub fn selected_labels(&self) -> Vec<String> {
        self.sorted_labels()
    }

    fn sorted_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.selected.iter().cloned().collect();
        labels.sort();
        labels
    }
}
