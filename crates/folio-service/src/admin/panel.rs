//! Admin panel client state.
//!
//! The panel is in exactly one [`PanelMode`] at a time. Entering a mode is
//! only allowed from [`PanelMode::Viewing`]; `cancel` always returns there
//! and discards whatever the mode was holding. Mutations are applied to the
//! local photo list optimistically and later replaced wholesale by
//! [`AdminPanel::reconcile`] with the server's view.

use std::collections::{BTreeSet, VecDeque};

use serde::Serialize;

use folio_entity::photo::Photo;

use super::actions::{ActionResult, BulkDeleteReport};

/// What the admin is currently doing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelMode {
    /// Browsing the list.
    #[default]
    Viewing,
    /// The add form is open.
    Adding,
    /// The edit form is open for one photo.
    Editing {
        /// Photo being edited.
        photo_id: i32,
    },
    /// Drag-and-drop ordering with an uncommitted permutation.
    Reordering {
        /// Ids in the pending order, top first.
        pending: Vec<i32>,
    },
    /// Picking photos for a bulk operation.
    Selecting {
        /// Chosen ids.
        selected: BTreeSet<i32>,
    },
}

impl PanelMode {
    /// Short name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Adding => "adding",
            Self::Editing { .. } => "editing",
            Self::Reordering { .. } => "reordering",
            Self::Selecting { .. } => "selecting",
        }
    }
}

/// A rejected panel transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Another mode is active.
    #[error("cannot start {wanted} while {current}")]
    Busy {
        /// Mode currently active.
        current: &'static str,
        /// Mode that was requested.
        wanted: &'static str,
    },
    /// The operation belongs to a different mode.
    #[error("{operation} is only available while {required}")]
    WrongMode {
        /// Operation attempted.
        operation: &'static str,
        /// Mode it needs.
        required: &'static str,
    },
    /// The id is not in the panel's list.
    #[error("photo {0} is not in the list")]
    UnknownPhoto(i32),
    /// A drag index past the end of the list.
    #[error("position {index} is out of range for {len} photos")]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// List length.
        len: usize,
    },
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Action succeeded.
    Success,
    /// Action failed.
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    /// Severity.
    pub kind: ToastKind,
    /// Text shown to the admin.
    pub message: String,
}

/// State of the admin management screen.
#[derive(Debug, Clone, Default)]
pub struct AdminPanel {
    photos: Vec<Photo>,
    mode: PanelMode,
    toasts: VecDeque<Toast>,
}

impl AdminPanel {
    /// Panel showing `photos` (already in display order).
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            ..Default::default()
        }
    }

    /// Photos as currently displayed.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Active mode.
    pub fn mode(&self) -> &PanelMode {
        &self.mode
    }

    // ── Mode transitions ───────────────────────────────────

    fn enter(&mut self, next: PanelMode) -> Result<(), TransitionError> {
        if self.mode != PanelMode::Viewing {
            return Err(TransitionError::Busy {
                current: self.mode.name(),
                wanted: next.name(),
            });
        }
        self.mode = next;
        Ok(())
    }

    /// Open the add form.
    pub fn begin_add(&mut self) -> Result<(), TransitionError> {
        self.enter(PanelMode::Adding)
    }

    /// Open the edit form for `photo_id`.
    pub fn begin_edit(&mut self, photo_id: i32) -> Result<(), TransitionError> {
        if !self.photos.iter().any(|p| p.id == photo_id) {
            return Err(TransitionError::UnknownPhoto(photo_id));
        }
        self.enter(PanelMode::Editing { photo_id })
    }

    /// Start reordering from the current order.
    pub fn begin_reorder(&mut self) -> Result<(), TransitionError> {
        let pending = self.photos.iter().map(|p| p.id).collect();
        self.enter(PanelMode::Reordering { pending })
    }

    /// Start picking photos for a bulk operation.
    pub fn begin_select(&mut self) -> Result<(), TransitionError> {
        self.enter(PanelMode::Selecting {
            selected: BTreeSet::new(),
        })
    }

    /// Return to viewing, discarding pending order or selection.
    pub fn cancel(&mut self) {
        self.mode = PanelMode::Viewing;
    }

    // ── Reordering ─────────────────────────────────────────

    /// Move the photo at `from` so it lands at `to`.
    pub fn move_photo(&mut self, from: usize, to: usize) -> Result<(), TransitionError> {
        let PanelMode::Reordering { pending } = &mut self.mode else {
            return Err(TransitionError::WrongMode {
                operation: "move_photo",
                required: "reordering",
            });
        };
        let len = pending.len();
        for index in [from, to] {
            if index >= len {
                return Err(TransitionError::OutOfRange { index, len });
            }
        }
        let id = pending.remove(from);
        pending.insert(to, id);
        Ok(())
    }

    /// The uncommitted order, if reordering.
    pub fn pending_order(&self) -> Option<&[i32]> {
        match &self.mode {
            PanelMode::Reordering { pending } => Some(pending),
            _ => None,
        }
    }

    /// Finish reordering and hand back the order to save.
    pub fn commit_reorder(&mut self) -> Result<Vec<i32>, TransitionError> {
        match std::mem::take(&mut self.mode) {
            PanelMode::Reordering { pending } => Ok(pending),
            other => {
                self.mode = other;
                Err(TransitionError::WrongMode {
                    operation: "commit_reorder",
                    required: "reordering",
                })
            }
        }
    }

    // ── Selection ──────────────────────────────────────────

    fn selection_mut(&mut self, operation: &'static str) -> Result<&mut BTreeSet<i32>, TransitionError> {
        match &mut self.mode {
            PanelMode::Selecting { selected } => Ok(selected),
            _ => Err(TransitionError::WrongMode {
                operation,
                required: "selecting",
            }),
        }
    }

    /// Flip one photo's selection. Returns whether it is now selected.
    pub fn toggle_selected(&mut self, photo_id: i32) -> Result<bool, TransitionError> {
        if !self.photos.iter().any(|p| p.id == photo_id) {
            return Err(TransitionError::UnknownPhoto(photo_id));
        }
        let selected = self.selection_mut("toggle_selected")?;
        if selected.remove(&photo_id) {
            Ok(false)
        } else {
            selected.insert(photo_id);
            Ok(true)
        }
    }

    /// Select every photo, or clear the selection when all already are.
    pub fn select_all(&mut self) -> Result<(), TransitionError> {
        let all: BTreeSet<i32> = self.photos.iter().map(|p| p.id).collect();
        let selected = self.selection_mut("select_all")?;
        *selected = if *selected == all { BTreeSet::new() } else { all };
        Ok(())
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) -> Result<(), TransitionError> {
        self.selection_mut("clear_selection")?.clear();
        Ok(())
    }

    /// Chosen ids, if selecting.
    pub fn selected(&self) -> Option<&BTreeSet<i32>> {
        match &self.mode {
            PanelMode::Selecting { selected } => Some(selected),
            _ => None,
        }
    }

    /// Finish selecting and hand back the chosen ids in display order.
    pub fn take_selection(&mut self) -> Result<Vec<i32>, TransitionError> {
        match std::mem::take(&mut self.mode) {
            PanelMode::Selecting { selected } => Ok(self
                .photos
                .iter()
                .map(|p| p.id)
                .filter(|id| selected.contains(id))
                .collect()),
            other => {
                self.mode = other;
                Err(TransitionError::WrongMode {
                    operation: "take_selection",
                    required: "selecting",
                })
            }
        }
    }

    // ── Optimistic updates ─────────────────────────────────

    /// A photo was created; it goes on top and the add form closes.
    pub fn apply_added(&mut self, photo: Photo) {
        self.photos.insert(0, photo);
        if self.mode == PanelMode::Adding {
            self.mode = PanelMode::Viewing;
        }
    }

    /// A photo was edited; the edit form for it closes.
    pub fn apply_updated(&mut self, photo: Photo) {
        if self.mode == (PanelMode::Editing { photo_id: photo.id }) {
            self.mode = PanelMode::Viewing;
        }
        if let Some(slot) = self.photos.iter_mut().find(|p| p.id == photo.id) {
            *slot = photo;
        }
    }

    /// A photo was hidden.
    pub fn apply_hidden(&mut self, photo_id: i32) {
        if let Some(photo) = self.photos.iter_mut().find(|p| p.id == photo_id) {
            photo.hidden = true;
        }
    }

    /// A photo is gone from the list.
    pub fn apply_removed(&mut self, photo_id: i32) {
        self.photos.retain(|p| p.id != photo_id);
        self.forget(photo_id);
    }

    /// The list was reordered to `ids`. Photos missing from `ids` keep
    /// their relative order after the listed ones.
    pub fn apply_reordered(&mut self, ids: &[i32]) {
        let mut rest = std::mem::take(&mut self.photos);
        let mut ordered = Vec::with_capacity(rest.len());
        for id in ids {
            if let Some(index) = rest.iter().position(|p| p.id == *id) {
                ordered.push(rest.remove(index));
            }
        }
        ordered.append(&mut rest);
        self.photos = ordered;
    }

    /// Replace local state with the server's list.
    ///
    /// Pending state survives where it still makes sense: an edit of a
    /// photo that disappeared is closed, and vanished ids leave the
    /// selection and the pending order.
    pub fn reconcile(&mut self, server_photos: Vec<Photo>) {
        self.photos = server_photos;
        let known: BTreeSet<i32> = self.photos.iter().map(|p| p.id).collect();

        match &mut self.mode {
            PanelMode::Editing { photo_id } if !known.contains(photo_id) => {
                self.mode = PanelMode::Viewing;
            }
            PanelMode::Reordering { pending } => {
                pending.retain(|id| known.contains(id));
                let missing: Vec<i32> = self
                    .photos
                    .iter()
                    .map(|p| p.id)
                    .filter(|id| !pending.contains(id))
                    .collect();
                pending.extend(missing);
            }
            PanelMode::Selecting { selected } => selected.retain(|id| known.contains(id)),
            _ => {}
        }
    }

    fn forget(&mut self, photo_id: i32) {
        match &mut self.mode {
            PanelMode::Editing { photo_id: id } if *id == photo_id => self.mode = PanelMode::Viewing,
            PanelMode::Reordering { pending } => pending.retain(|id| *id != photo_id),
            PanelMode::Selecting { selected } => {
                selected.remove(&photo_id);
            }
            _ => {}
        }
    }

    // ── Notifications ──────────────────────────────────────

    /// Queue a notification.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push_back(Toast {
            kind,
            message: message.into(),
        });
    }

    /// Queue a success toast, or the action's error (or `fallback`).
    pub fn notify_result<T>(&mut self, result: &ActionResult<T>, success: &str, fallback: &str) {
        if result.success {
            self.notify(ToastKind::Success, success);
        } else {
            let message = result.error.as_deref().unwrap_or(fallback);
            self.notify(ToastKind::Error, message);
        }
    }

    /// Take every queued notification, oldest first.
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }
}

/// Summary line for a finished bulk delete.
pub fn bulk_delete_message(report: &BulkDeleteReport, permanent: bool) -> String {
    let action = if permanent { "deleted" } else { "hidden" };
    let plural = if report.deleted == 1 { "" } else { "s" };
    let mut message = format!("{} photo{plural} {action} successfully", report.deleted);
    if report.failed > 0 {
        message.push_str(&format!(" ({} failed)", report.failed));
    }
    message
}
