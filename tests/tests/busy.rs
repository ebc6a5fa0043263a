use crumpet::Db;
use pretty_assertions::assert_eq;
use std::{sync::mpsc, thread, time::Duration};
use tests::{assert_err_is, models, models::User, DbTest, SetupFile};

fn open(test: &DbTest, timeout: Duration) -> Db {
    let db = test.connect();
    db.set_busy_timeout(timeout).unwrap();
    db
}

#[test]
fn locked_database_reports_busy() {
    let mut test = DbTest::new(Box::new(SetupFile::new()));
    let mut writer = test.setup_db(models!(User));
    let other = open(&test, Duration::ZERO);

    writer
        .transaction(|tx| {
            tx.insert(&User::new("holder"))?;

            let err = assert_err_is!(other.insert(&User::new("waiter")), is_busy);
            assert!(err.is_engine());
            Ok(())
        })
        .unwrap();

    // The lock is gone once the transaction commits.
    other.insert(&User::new("waiter")).unwrap();
    assert_eq!(writer.count::<User>().unwrap(), 2);
}

#[test]
fn busy_timeout_waits_for_the_lock() {
    let mut test = DbTest::new(Box::new(SetupFile::new()));
    let db = test.setup_db(models!(User));
    let driver = test.setup().driver();

    let (locked_tx, locked_rx) = mpsc::channel();

    let holder = thread::spawn({
        let registry = db.shared_registry();
        move || {
            let mut db = Db::connect_with(registry, &driver).unwrap();
            db.transaction(|tx| {
                tx.insert(&User::new("holder"))?;
                locked_tx.send(()).unwrap();
                thread::sleep(Duration::from_millis(200));
                Ok(())
            })
            .unwrap();
        }
    });

    locked_rx.recv().unwrap();

    let waiter = open(&test, Duration::from_secs(10));
    waiter.insert(&User::new("waiter")).unwrap();

    holder.join().unwrap();
    assert_eq!(db.count::<User>().unwrap(), 2);
}
