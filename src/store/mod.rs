mod slot;

pub use slot::{FileSlot, MemorySlot, Slot};

use crate::error::Error;
use crate::person::{Person, Profile};
use tracing::{debug, warn};

/// The ordered collection of personnel records, mirrored as a whole into a
/// single key of a [`Slot`] after every mutation.
///
/// Changes are applied to a copy first and only committed once the slot
/// accepted the new collection, so a failed write leaves the store as it was.
pub struct Store<S: Slot> {
    slot: S,
    key: String,
    persons: Vec<Person>,
}

impl<S: Slot> Store<S> {
    /// Loads the collection stored under `key`, or starts empty.
    pub fn open(slot: S, key: impl Into<String>) -> Result<Self, Error> {
        Self::open_or_seed(slot, key, Vec::new())
    }

    /// Loads the collection stored under `key`. When the slot has nothing
    /// for it yet, `seed` becomes the initial collection and is persisted.
    pub fn open_or_seed(
        mut slot: S,
        key: impl Into<String>,
        seed: Vec<Person>,
    ) -> Result<Self, Error> {
        let key = key.into();
        let persons = match slot.read(&key)? {
            Some(text) => serde_json::from_str::<Vec<Person>>(&text)?,
            None => {
                if !seed.is_empty() {
                    slot.write(&key, &serde_json::to_string(&seed)?)?;
                    debug!("seeded {key} with {} record(s)", seed.len());
                }
                seed
            }
        };
        Ok(Self { slot, key, persons })
    }

    pub fn list(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Person> {
        self.persons.iter().find(|it| it.id == id)
    }

    /// Like [`get`](Store::get) for callers that treat a missing record as a failure.
    pub fn require(&self, id: u32) -> Result<&Person, Error> {
        self.get(id).ok_or(Error::NotFound(id))
    }

    /// Records matching `query` (see [`Profile::matches`]), in store order.
    pub fn search(&self, query: &str) -> Vec<&Person> {
        self.persons.iter().filter(|it| it.matches(query)).collect()
    }

    /// Appends a new record with the next free id and order number.
    pub fn create(&mut self, profile: Profile) -> Result<&Person, Error> {
        let id = next(self.persons.iter().map(|it| it.id), "id")?;
        let order_number = next(
            self.persons.iter().map(|it| it.order_number),
            "order number",
        )?;
        let mut persons = self.persons.clone();
        persons.push(Person {
            id,
            order_number,
            profile,
        });
        self.commit(persons)?;
        debug!("created record {id} (order number {order_number})");
        Ok(&self.persons[self.persons.len() - 1])
    }

    /// Replaces the whole record with the same id. The stored order number is
    /// kept whatever `person` carries. Returns `false` without writing
    /// anything when there is no such record.
    pub fn update(&mut self, mut person: Person) -> Result<bool, Error> {
        let Some(index) = self.persons.iter().position(|it| it.id == person.id) else {
            debug!("update of unknown record {}", person.id);
            return Ok(false);
        };
        let id = person.id;
        let mut persons = self.persons.clone();
        person.order_number = persons[index].order_number;
        persons[index] = person;
        self.commit(persons)?;
        debug!("updated record {id}");
        Ok(true)
    }

    /// Removes the record with `id`. Deleting an unknown id is a no-op
    /// returning `false`.
    pub fn delete(&mut self, id: u32) -> Result<bool, Error> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let persons = self
            .persons
            .iter()
            .filter(|it| it.id != id)
            .cloned()
            .collect::<Vec<_>>();
        self.commit(persons)?;
        debug!("deleted record {id}");
        Ok(true)
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    fn commit(&mut self, persons: Vec<Person>) -> Result<(), Error> {
        let text = serde_json::to_string(&persons)?;
        // never write what the next open could not read back
        serde_json::from_str::<Vec<Person>>(&text)?;
        if let Err(err) = self.slot.write(&self.key, &text) {
            warn!("failed to persist {}: {err}", self.key);
            return Err(err.into());
        }
        self.persons = persons;
        Ok(())
    }
}

fn next(values: impl Iterator<Item = u32>, name: &'static str) -> Result<u32, Error> {
    values
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(Error::Exhausted(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlotError;
    use crate::seed::{fake_data, sample_form};
    use crate::validate::validate;
    use std::io::ErrorKind;

    fn store() -> Store<MemorySlot> {
        Store::open_or_seed(MemorySlot::default(), "persons", fake_data()).unwrap()
    }

    fn profile(name: &str) -> Profile {
        let mut form = sample_form();
        form.full_name = name.to_string();
        validate(&form).unwrap()
    }

    fn ids(store: &Store<impl Slot>) -> Vec<u32> {
        store.list().iter().map(|it| it.id).collect()
    }

    fn stored(slot: &impl Slot) -> Vec<Person> {
        serde_json::from_str(&slot.read("persons").unwrap().unwrap()).unwrap()
    }

    #[test]
    fn test_open_empty() {
        let store = Store::open(MemorySlot::default(), "persons").unwrap();
        assert!(store.is_empty());
        assert_eq!(None, store.into_slot().read("persons").unwrap());
    }

    #[test]
    fn test_open_reads_slot_once() {
        let json = serde_json::to_string(&fake_data()[1..]).unwrap();
        let slot = MemorySlot::with_value("persons", &json);
        let store = Store::open_or_seed(slot, "persons", fake_data()).unwrap();
        assert_eq!(vec![2], ids(&store));
    }

    #[test]
    fn test_open_malformed_slot() {
        let slot = MemorySlot::with_value("persons", "{not json");
        assert!(matches!(
            Store::open(slot, "persons"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_create_assigns_next_ids() {
        let mut store = store();
        let created = store.create(profile("Nguyen Van A")).unwrap().clone();
        assert_eq!(3, created.id);
        assert_eq!(3, created.order_number);
        assert_eq!(vec![1, 2, 3], ids(&store));
        assert_eq!(Some(&created), store.get(3));
        assert_eq!(profile("Nguyen Van A"), store.get(3).unwrap().profile);

        assert!(store.delete(1).unwrap());
        assert_eq!(vec![2, 3], ids(&store));
        assert_eq!(store.list(), stored(&store.slot).as_slice());
    }

    #[test]
    fn test_create_into_empty_store() {
        let mut store = Store::open(MemorySlot::default(), "persons").unwrap();
        let created = store.create(profile("First Person")).unwrap();
        assert_eq!(1, created.id);
        assert_eq!(1, created.order_number);
    }

    #[test]
    fn test_ids_follow_current_maximum() {
        let mut store = store();
        store.create(profile("Third")).unwrap();
        assert!(store.delete(3).unwrap());
        // the highest id is gone, so it is handed out again
        assert_eq!(3, store.create(profile("Fourth")).unwrap().id);
        assert!(store.delete(1).unwrap());
        assert_eq!(4, store.create(profile("Fifth")).unwrap().id);
        assert_eq!(vec![2, 3, 4], ids(&store));
    }

    #[test]
    fn test_created_ids_are_unique_and_largest() {
        let mut store = store();
        for _ in 0..50 {
            if fastrand::bool() && !store.is_empty() {
                let index = fastrand::usize(..store.len());
                let id = store.list()[index].id;
                assert!(store.delete(id).unwrap());
            }
            let expected = store.list().iter().map(|it| it.id).max().unwrap_or(0) + 1;
            let name = (0..fastrand::usize(2..12))
                .map(|_| fastrand::alphabetic())
                .collect::<String>();
            let created = store.create(profile(&name)).unwrap().clone();
            assert_eq!(expected, created.id);
            assert_eq!(created.id, created.order_number);
            assert_eq!(Some(&created), store.list().last());
            let mut unique = ids(&store);
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(store.len(), unique.len());
        }
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = store();
        for i in 0..10 {
            store.create(profile(&format!("Person {i}"))).unwrap();
        }
        let mut expected = ids(&store);
        for _ in 0..5 {
            let id = expected[fastrand::usize(..expected.len())];
            assert!(store.delete(id).unwrap());
            expected.retain(|it| *it != id);
            assert_eq!(expected, ids(&store));
        }
    }

    #[test]
    fn test_missing_ids() {
        let mut store = store();
        let before = store.list().to_vec();
        assert_eq!(None, store.get(99));
        assert!(matches!(store.require(99), Err(Error::NotFound(99))));
        assert!(!store.delete(99).unwrap());
        assert_eq!(before, store.list());
        let mut ghost = before[0].clone();
        ghost.id = 99;
        assert!(!store.update(ghost).unwrap());
        assert_eq!(before, store.list());
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let mut store = store();
        let mut person = store.get(1).unwrap().clone();
        person.profile = profile("Renamed");
        assert!(store.update(person.clone()).unwrap());
        assert_eq!(vec![1, 2], ids(&store));
        let updated = store.get(1).unwrap();
        assert_eq!("Renamed", updated.full_name);
        // fields absent from the new profile are gone, not merged
        assert!(updated.debts.is_empty());
        assert!(updated.tattoos.is_empty());
        assert_eq!(&person, updated);
        assert_eq!(store.list(), stored(&store.slot).as_slice());
    }

    #[test]
    fn test_search() {
        let store = store();
        assert_eq!(2, store.search("").len());
        let found = store.search("smith");
        assert_eq!(1, found.len());
        assert_eq!(2, found[0].id);
        assert_eq!(1, store.search("hr").len());
        assert!(store.search("nobody").is_empty());
    }

    struct BrokenSlot {
        inner: MemorySlot,
        broken: bool,
    }

    impl Slot for BrokenSlot {
        fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
            if self.broken {
                return Err(SlotError::Io {
                    key: key.to_string(),
                    source: ErrorKind::PermissionDenied.into(),
                });
            }
            self.inner.write(key, value)
        }
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let slot = BrokenSlot {
            inner: MemorySlot::default(),
            broken: false,
        };
        let mut store = Store::open_or_seed(slot, "persons", fake_data()).unwrap();
        store.slot.broken = true;
        let before = store.list().to_vec();
        assert!(matches!(
            store.create(profile("Nguyen Van A")),
            Err(Error::Persistence(_))
        ));
        assert!(matches!(store.delete(1), Err(Error::Persistence(_))));
        let mut person = before[1].clone();
        person.profile = profile("Renamed");
        assert!(matches!(store.update(person), Err(Error::Persistence(_))));
        assert_eq!(before, store.list());
        assert_eq!(before, stored(&store.slot.inner));
    }

    #[test]
    fn test_update_keeps_order_number() {
        let mut store = store();
        let mut person = store.get(2).unwrap().clone();
        person.order_number = 1;
        person.profile = profile("Renamed");
        assert!(store.update(person).unwrap());
        let order_numbers = store
            .list()
            .iter()
            .map(|it| it.order_number)
            .collect::<Vec<_>>();
        assert_eq!(vec![1, 2], order_numbers);
        assert_eq!("Renamed", store.get(2).unwrap().full_name);
        assert_eq!(store.list(), stored(&store.slot).as_slice());
    }

    #[test]
    fn test_create_after_largest_id() {
        let mut seed = fake_data();
        seed[1].id = u32::MAX;
        let mut store = Store::open_or_seed(MemorySlot::default(), "persons", seed).unwrap();
        let before = store.list().to_vec();
        assert!(matches!(
            store.create(profile("Nguyen Van A")),
            Err(Error::Exhausted("id"))
        ));
        assert_eq!(before, store.list());

        let mut seed = fake_data();
        seed[0].order_number = u32::MAX;
        let mut store = Store::open_or_seed(MemorySlot::default(), "persons", seed).unwrap();
        assert!(matches!(
            store.create(profile("Nguyen Van A")),
            Err(Error::Exhausted("order number"))
        ));
    }

    #[test]
    fn test_placeholder_profile_can_be_reopened() {
        let mut store = store();
        let created = store.create(Profile::default()).unwrap().clone();
        assert_eq!(3, created.id);
        let slot = store.into_slot();
        let reopened = Store::open(slot, "persons").unwrap();
        assert_eq!(Some(&created), reopened.get(3));
    }
}
