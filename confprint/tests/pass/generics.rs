//! Test: generic parameters and lifetimes only need bounds on printed fields.

use std::{fmt::Display, marker::PhantomData};

use confprint::{render, ConfigRecord, PrintConfig, PrinterConfig};

#[derive(PrintConfig)]
struct Borrowed<'a, T, M>
where
    T: Copy,
{
    #[confprint(safe)]
    name: &'a str,
    #[confprint(safe)]
    limit: T,
    #[confprint(skip)]
    _marker: PhantomData<M>,
}

#[derive(PrintConfig)]
struct Wrapper<T: Display> {
    #[confprint(safe)]
    inner: T,
}

struct NotDisplay;

fn assert_record<R: ConfigRecord>(_: &R) {}

fn main() {
    let record: Borrowed<'_, u32, NotDisplay> = Borrowed {
        name: "api",
        limit: 10,
        _marker: PhantomData,
    };
    assert_record(&record);
    assert_eq!(
        render(&record, &PrinterConfig::default()).unwrap(),
        "=== Configuration ===\nlimit: 10\nname : api\n"
    );

    let wrapper = Wrapper { inner: 1.5_f32 };
    assert_eq!(
        render(&wrapper, &PrinterConfig::default()).unwrap(),
        "=== Configuration ===\ninner: 1.5\n"
    );
}
