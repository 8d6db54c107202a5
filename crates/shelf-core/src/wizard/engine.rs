//! Field-by-field collection of section attributes.

use thiserror::Error;

use crate::section::{
    FIELD_COUNT, FIELDS, FieldDescriptor, FieldKey, Section, ValidationError, parse_value,
};
use crate::session::{EditPointer, InputMode, UserSession};

/// Largest number of sections that can be pre-allocated in one batch.
pub const MAX_BATCH: usize = 10;

/// Where the wizard stands for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Nothing is being collected.
    Idle,
    /// Waiting for `field` of section `record`.
    Collecting {
        record: usize,
        field: FieldKey,
        input_mode: InputMode,
    },
}

/// Result of feeding one raw value to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Value stored; now waiting for `next`.
    Advanced { record: usize, next: FieldKey },
    /// Value rejected; still waiting for `field`, nothing written.
    Rejected {
        record: usize,
        field: FieldKey,
        error: ValidationError,
    },
    /// Section `record` is complete and the batch continues with `next`.
    RecordCompleted { record: usize, next: usize },
    /// Section `record` is complete; the wizard is idle again.
    Completed { record: usize },
    /// The pointer referenced a section that no longer exists. It was cleared.
    MissingRecord,
    /// Nothing was being collected.
    Idle,
    /// A preset for a field other than the expected one; ignored.
    Stale { record: usize, expected: FieldKey },
}

/// The named section does not exist.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("section {0} does not exist")]
pub struct MissingSection(pub usize);

enum Cursor {
    Idle,
    Valid(EditPointer),
    Dangling,
}

/// Drives the questionnaire over one user's session.
///
/// Every transition completes synchronously; the caller persists the
/// session afterwards.
pub struct Wizard<'a> {
    session: &'a mut UserSession,
}

impl<'a> Wizard<'a> {
    pub fn new(session: &'a mut UserSession) -> Self {
        Self { session }
    }

    /// Current state. A dangling pointer reads as idle.
    pub fn state(&self) -> WizardState {
        match self.cursor() {
            Cursor::Valid(p) => WizardState::Collecting {
                record: p.idx,
                field: FIELDS[p.field_i].key,
                input_mode: p.input_mode,
            },
            Cursor::Idle | Cursor::Dangling => WizardState::Idle,
        }
    }

    /// Descriptor of the field currently expected.
    pub fn expected_field(&self) -> Option<&'static FieldDescriptor> {
        match self.cursor() {
            Cursor::Valid(p) => Some(&FIELDS[p.field_i]),
            Cursor::Idle | Cursor::Dangling => None,
        }
    }

    /// Appends an empty section and starts collecting it. Returns its index.
    pub fn start_new(&mut self) -> usize {
        self.session.sections.push(Section::new());
        let idx = self.session.sections.len() - 1;
        self.session.editing = Some(EditPointer::at_start(idx));
        idx
    }

    /// Restarts collection of an existing section from its first field.
    pub fn start_edit(&mut self, idx: usize) -> Result<usize, MissingSection> {
        if idx >= self.session.sections.len() {
            return Err(MissingSection(idx));
        }
        self.session.editing = Some(EditPointer::at_start(idx));
        Ok(idx)
    }

    /// Appends `count` empty sections and collects them one after another.
    /// Returns the index of the first new section.
    pub fn start_batch(&mut self, count: usize) -> Result<usize, ValidationError> {
        if !(1..=MAX_BATCH).contains(&count) {
            return Err(ValidationError::OutOfRange {
                min: 1,
                max: MAX_BATCH,
                got: count,
            });
        }
        let first = self.session.sections.len();
        self.session
            .sections
            .extend(std::iter::repeat_with(Section::new).take(count));
        self.session.editing = Some(EditPointer {
            batch_end: Some(first + count - 1),
            ..EditPointer::at_start(first)
        });
        Ok(first)
    }

    /// Validates `raw` for the expected field, stores it and advances.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let pointer = match self.cursor() {
            Cursor::Idle => return SubmitOutcome::Idle,
            Cursor::Dangling => {
                self.session.editing = None;
                return SubmitOutcome::MissingRecord;
            }
            Cursor::Valid(p) => p,
        };

        let descriptor = &FIELDS[pointer.field_i];
        let written = parse_value(descriptor.domain, raw)
            .and_then(|value| self.session.sections[pointer.idx].set(descriptor.key, value));

        match written {
            Ok(()) => self.advance(pointer),
            Err(error) => SubmitOutcome::Rejected {
                record: pointer.idx,
                field: descriptor.key,
                error,
            },
        }
    }

    /// Submits a preset value chosen for `key`.
    ///
    /// Buttons from an earlier prompt can still be pressed; a preset for a
    /// field other than the expected one is ignored.
    pub fn pick(&mut self, key: FieldKey, raw: &str) -> SubmitOutcome {
        if let Cursor::Valid(p) = self.cursor() {
            let expected = FIELDS[p.field_i].key;
            if expected != key {
                return SubmitOutcome::Stale {
                    record: p.idx,
                    expected,
                };
            }
        }
        self.submit(raw)
    }

    /// Moves back one field within the current section, stopping at the first.
    pub fn step_back(&mut self) -> WizardState {
        self.heal();
        if let Some(p) = self.session.editing.as_mut() {
            p.field_i = p.field_i.saturating_sub(1);
        }
        self.state()
    }

    /// Switches between preset buttons and typed input for the current field.
    pub fn set_input_mode(&mut self, mode: InputMode) -> WizardState {
        self.heal();
        if let Some(p) = self.session.editing.as_mut() {
            p.input_mode = mode;
        }
        self.state()
    }

    /// Stops collecting without completing. Returns the section that was
    /// being collected, if any. Values already entered are kept.
    pub fn cancel(&mut self) -> Option<usize> {
        let record = match self.cursor() {
            Cursor::Valid(p) => Some(p.idx),
            Cursor::Idle | Cursor::Dangling => None,
        };
        self.session.editing = None;
        record
    }

    /// Removes section `idx` and keeps the pointer consistent: a pointer on
    /// the removed section is cleared, one on a later section shifts down.
    pub fn delete_record(&mut self, idx: usize) -> Result<Section, MissingSection> {
        if idx >= self.session.sections.len() {
            return Err(MissingSection(idx));
        }
        let removed = self.session.sections.remove(idx);

        let editing_removed = self.session.editing.as_ref().is_some_and(|p| p.idx == idx);
        if editing_removed {
            self.session.editing = None;
        } else if let Some(p) = self.session.editing.as_mut() {
            if p.idx > idx {
                p.idx -= 1;
            }
            if let Some(end) = p.batch_end.as_mut() {
                if *end >= idx {
                    *end = end.saturating_sub(1);
                }
            }
        }
        Ok(removed)
    }

    /// Drops every section and any progress.
    pub fn reset(&mut self) {
        self.session.sections.clear();
        self.session.editing = None;
    }

    fn advance(&mut self, pointer: EditPointer) -> SubmitOutcome {
        let next_field = pointer.field_i + 1;
        if next_field < FIELD_COUNT {
            if let Some(p) = self.session.editing.as_mut() {
                p.field_i = next_field;
            }
            return SubmitOutcome::Advanced {
                record: pointer.idx,
                next: FIELDS[next_field].key,
            };
        }

        let next_record = pointer.idx + 1;
        let batch_continues = pointer.batch_end.is_some_and(|end| next_record <= end)
            && next_record < self.session.sections.len();

        if batch_continues {
            let record = pointer.idx;
            self.session.editing = Some(EditPointer {
                idx: next_record,
                field_i: 0,
                ..pointer
            });
            SubmitOutcome::RecordCompleted {
                record,
                next: next_record,
            }
        } else {
            self.session.editing = None;
            SubmitOutcome::Completed {
                record: pointer.idx,
            }
        }
    }

    fn cursor(&self) -> Cursor {
        match &self.session.editing {
            None => Cursor::Idle,
            Some(p) if p.idx < self.session.sections.len() && p.field_i < FIELD_COUNT => {
                Cursor::Valid(p.clone())
            }
            Some(_) => Cursor::Dangling,
        }
    }

    fn heal(&mut self) {
        if matches!(self.cursor(), Cursor::Dangling) {
            self.session.editing = None;
        }
    }
}
