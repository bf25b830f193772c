pub mod config;
pub mod date;
pub mod error;
pub mod form;
pub mod person;
pub mod seed;
pub mod store;
pub mod validate;

#[cfg(test)]
mod tests {
    use crate::form::PersonForm;
    use crate::seed::{fake_data, sample_form};
    use crate::store::{FileSlot, Store};

    #[test]
    fn test_records_survive_reopening() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut store = Store::open_or_seed(FileSlot::new(dir.path()), "persons", fake_data())
            .expect("failed to open store");
        let created = sample_form()
            .submit(&mut store)
            .expect("failed to submit form");
        assert_eq!(3, created.id);
        assert!(store.delete(1).expect("failed to delete"));

        let mut form = PersonForm::from(&store.require(2).expect("missing record").profile);
        form.hometown = "Đà Nẵng".to_string();
        form.submit_update(2, &mut store)
            .expect("failed to update record");

        let reopened = Store::open_or_seed(FileSlot::new(dir.path()), "persons", fake_data())
            .expect("failed to reopen store");
        assert_eq!(store.list(), reopened.list());
        assert_eq!(
            vec![2, 3],
            reopened.list().iter().map(|it| it.id).collect::<Vec<_>>()
        );
        assert_eq!("Đà Nẵng", reopened.require(2).unwrap().hometown);
        assert_eq!(created, reopened.require(3).unwrap().clone());
    }
}
