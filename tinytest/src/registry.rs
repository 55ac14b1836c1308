//! The ordered registry of test-case records.

use core::cell::Cell;

use intrusive_collections::linked_list::Cursor;
use intrusive_collections::{LinkedList, LinkedListLink, intrusive_adapter};

use crate::error::{TinyError, TinyResult};
use crate::record::TestCase;

intrusive_adapter!(RecordAdapter<'a> = &'a TestCase<'a>: TestCase<'a> { link => LinkedListLink });

/// Append-only, ordered collection of [`TestCase`]s plus the record that is
/// currently executing.
///
/// Records are linked intrusively, so the registry itself never allocates.
/// Registration order is execution order. Records must outlive the registry,
/// which `declare_registry!` arranges by binding the registry last.
pub struct Registry<'a> {
    records: LinkedList<RecordAdapter<'a>>,
    len: usize,
    current: Cell<Option<&'a TestCase<'a>>>,
}

impl<'a> Registry<'a> {
    pub fn new() -> Self {
        Self {
            records: LinkedList::new(RecordAdapter::NEW),
            len: 0,
            current: Cell::new(None),
        }
    }

    /// Appends `record` at the tail.
    ///
    /// Returns `false` (and logs why) when the record is already linked into a
    /// registry.
    pub fn append(&mut self, record: &'a TestCase<'a>) -> bool {
        match self.try_append(record) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    pub fn try_append(&mut self, record: &'a TestCase<'a>) -> TinyResult<()> {
        if record.is_linked() {
            return Err(TinyError::AlreadyLinked {
                suite: record.suite(),
                name: record.name(),
            });
        }

        self.records.push_back(record);
        self.len += 1;
        debug!("registered {}::{}", record.suite(), record.name());
        Ok(())
    }

    /// Records in registration order. Each call starts over from the head.
    pub fn iter(&self) -> Records<'_, 'a> {
        Records {
            cursor: self.records.front(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Marks `record` as the one matchers should report against.
    pub fn set_current(&self, record: Option<&'a TestCase<'a>>) {
        self.current.set(record);
    }

    pub fn current(&self) -> Option<&'a TestCase<'a>> {
        self.current.get()
    }
}

impl Default for Registry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, 'a> IntoIterator for &'r Registry<'a> {
    type Item = &'a TestCase<'a>;
    type IntoIter = Records<'r, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over a [`Registry`].
pub struct Records<'r, 'a> {
    cursor: Cursor<'r, RecordAdapter<'a>>,
}

impl<'a> Iterator for Records<'_, 'a> {
    type Item = &'a TestCase<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.cursor.clone_pointer()?;
        self.cursor.move_next();
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::unit_fn;

    #[test]
    fn empty_registry_yields_nothing() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.iter().count(), 0);
        assert!(registry.current().is_none());
    }

    #[test]
    fn append_preserves_registration_order() {
        let mut a = unit_fn(|_t| {});
        let mut b = unit_fn(|_t| {});
        let mut c = unit_fn(|_t| {});
        let first = TestCase::new("s1", "first", &mut a);
        let second = TestCase::new("s2", "second", &mut b);
        let third = TestCase::new("s1", "third", &mut c);

        let mut registry = Registry::new();
        assert!(registry.append(&first));
        assert!(registry.append(&second));
        assert!(registry.append(&third));

        let names: Vec<_> = registry.iter().map(TestCase::name).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn iteration_restarts_from_head() {
        let mut a = unit_fn(|_t| {});
        let mut b = unit_fn(|_t| {});
        let first = TestCase::new("s", "first", &mut a);
        let second = TestCase::new("s", "second", &mut b);

        let mut registry = Registry::new();
        registry.append(&first);
        registry.append(&second);

        let mut partial = registry.iter();
        assert_eq!(partial.next().map(TestCase::name), Some("first"));

        let names: Vec<_> = (&registry).into_iter().map(TestCase::name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn double_append_is_refused() {
        let mut a = unit_fn(|_t| {});
        let record = TestCase::new("s", "twice", &mut a);

        let mut registry = Registry::new();
        assert!(registry.append(&record));
        assert_eq!(
            registry.try_append(&record),
            Err(TinyError::AlreadyLinked {
                suite: "s",
                name: "twice"
            })
        );
        assert!(!registry.append(&record));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn current_slot_tracks_the_live_record() {
        let mut a = unit_fn(|_t| {});
        let record = TestCase::new("s", "live", &mut a);

        let mut registry = Registry::new();
        registry.append(&record);

        registry.set_current(Some(&record));
        assert_eq!(registry.current().map(TestCase::name), Some("live"));
        registry.set_current(None);
        assert!(registry.current().is_none());
    }
}
