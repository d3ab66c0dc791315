//! Test: every field attribute form is accepted.

use confprint::{render, PrintConfig, PrinterConfig};

#[derive(PrintConfig)]
struct Record {
    plain: String,
    #[confprint(safe)]
    bare_safe: u8,
    #[confprint(safe = true)]
    bool_safe: u8,
    #[confprint(safe = "true")]
    str_safe: u8,
    #[confprint(safe = "yes")]
    not_safe: u8,
    #[confprint(rename = "Renamed", safe)]
    renamed: bool,
    #[confprint(safe, debug)]
    debugged: Option<u8>,
    #[confprint(skip)]
    _skipped: std::time::SystemTime,
}

fn main() {
    let record = Record {
        plain: "secret".into(),
        bare_safe: 1,
        bool_safe: 2,
        str_safe: 3,
        not_safe: 4,
        renamed: true,
        debugged: None,
        _skipped: std::time::SystemTime::now(),
    };
    let report = render(&record, &PrinterConfig::default()).unwrap();
    assert_eq!(
        report,
        "=== Configuration ===\n\
         Renamed  : true\n\
         bare_safe: 1\n\
         bool_safe: 2\n\
         debugged : None\n\
         not_safe : ********\n\
         plain    : ********\n\
         str_safe : 3\n"
    );
}
