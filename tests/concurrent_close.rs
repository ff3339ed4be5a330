use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::thread;

use rowcursor::{CursorError, DataType, DefaultDataConverter, ResultCursor, RowCursor, Schema, VecRowSource, row};

#[test]
fn test_concurrent_close_releases_once() {
    let schema = Schema::new().with_column("n", DataType::BigInt);
    let source = VecRowSource::new(schema, (0..10_000i64).map(|n| row![n]));
    let releases = source.release_counter();
    let cursor = Arc::new(RowCursor::new(source, DefaultDataConverter::new()));

    let reader = {
        let cursor = Arc::clone(&cursor);
        thread::spawn(move || {
            let mut read = 0;
            loop {
                match cursor.advance() {
                    Ok(true) => match cursor.get_long(1) {
                        Ok(_) => read += 1,
                        Err(CursorError::Closed) => return read,
                        Err(e) => panic!("unexpected error: {}", e),
                    },
                    Ok(false) => return read,
                    Err(CursorError::Closed) => return read,
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
        })
    };

    let closers: Vec<_> = (0..4)
        .map(|_| {
            let cursor = Arc::clone(&cursor);
            thread::spawn(move || cursor.close())
        })
        .collect();

    for closer in closers {
        closer.join().expect("closer panicked").expect("close failed");
    }
    let read = reader.join().expect("reader panicked");

    assert!(read <= 10_000);
    assert!(cursor.is_closed());
    assert!(matches!(cursor.advance(), Err(CursorError::Closed)));
    assert!(matches!(cursor.get_long(1), Err(CursorError::Closed)));

    drop(cursor);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}
