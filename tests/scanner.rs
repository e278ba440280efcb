use haversine::sans::{
    Scanner,
    decimal::DecimalError,
    formula::{EARTH_RADIUS_KM, distance},
    scanner::{Action, Field, ScanError, State, scan},
};

const QUARTER: &[u8] = br#"{"x0":0.000000,"y0":0.000000,"x1":0.000000,"y1":90.000000}"#;

fn scan_all(r: &[u8]) -> Result<(f64, u64), ScanError> {
    scan(r, 0..r.len(), EARTH_RADIUS_KM).map(|p| (p.sum, p.count))
}

#[test]
fn scan_single_record() {
    let (sum, count) = scan_all(QUARTER).unwrap();
    assert_eq!(count, 1);
    assert!((sum - 10007.54).abs() < 0.01, "{sum}");
}

#[test]
fn scan_accumulates_records() {
    let r = b"\n\t{\"x0\":-116.023599, \"y0\":55.237895, \"x1\":8.347589, \"y1\":-12.000001},\n\
        \t{\"x0\":1.000000, \"y0\":2.000000, \"x1\":3.000000, \"y1\":4.000000}\n";

    let expected = distance(-116.023599, 55.237895, 8.347589, -12.000001, EARTH_RADIUS_KM)
        + distance(1.0, 2.0, 3.0, 4.0, EARTH_RADIUS_KM);

    let (sum, count) = scan_all(r).unwrap();
    assert_eq!(count, 2);
    assert_eq!(sum, expected);
}

#[test]
fn scan_tolerates_whitespace_around_labels() {
    let r = b"{ \"x0\":1.000000,\n\"y0\":2.000000,\t\"x1\":3.000000,   \"y1\":4.000000},{\"x0\":1.000000,\"y0\":2.000000,\"x1\":3.000000,\"y1\":4.000000}";
    let (_, count) = scan_all(r).unwrap();
    assert_eq!(count, 2);
}

#[test]
fn scan_empty_range() {
    assert_eq!(scan_all(b""), Ok((0.0, 0)));
    assert_eq!(scan_all(b" \n\t,\r\n"), Ok((0.0, 0)));
}

#[test]
fn scan_respects_range_end() {
    // The second record lies beyond the range and must not be seen.
    let mut r = QUARTER.to_vec();
    r.extend_from_slice(b",\n");
    r.extend_from_slice(QUARTER);

    let partial = scan(&r, 0..QUARTER.len() + 1, EARTH_RADIUS_KM).unwrap();
    assert_eq!(partial.count, 1);

    let partial = scan(&r, QUARTER.len() + 1..r.len(), EARTH_RADIUS_KM).unwrap();
    assert_eq!(partial.count, 1);

    // A range ending inside a record fails rather than reading on.
    assert_eq!(
        scan(&r, 0..18, EARTH_RADIUS_KM),
        Err(ScanError::MissingLabel {
            field: Field::Y0,
            offset: 15
        })
    );
}

#[test]
fn scan_missing_closing_brace_before_comma() {
    let r = b"{\"x0\":0.000000,\"y0\":0.000000,\"x1\":0.000000,\"y1\":90.000000,\n{\"x0\":0.000000,\"y0\":0.000000,\"x1\":0.000000,\"y1\":90.000000}";
    assert_eq!(
        scan_all(r),
        Err(ScanError::WrongDelimiter {
            field: Field::Y1,
            offset: 57,
            byte: b','
        })
    );
}

#[test]
fn scan_missing_closing_brace_at_end() {
    let r = b"{\"x0\":0.000000,\"y0\":0.000000,\"x1\":0.000000,\"y1\":90.000000\n";
    assert_eq!(
        scan_all(r),
        Err(ScanError::MissingDelimiter {
            field: Field::Y1,
            offset: 48
        })
    );
}

#[test]
fn scan_missing_label() {
    let r = b"{\"x0\":0.000000,\"x1\":0.000000,\"y1\":90.000000}";
    assert_eq!(
        scan_all(r),
        Err(ScanError::MissingLabel {
            field: Field::Y0,
            offset: 15
        })
    );
}

#[test]
fn scan_unexpected_byte_between_records() {
    let r = b"{\"x0\":0.000000,\"y0\":0.000000,\"x1\":0.000000,\"y1\":90.000000}]";
    assert_eq!(
        scan_all(r),
        Err(ScanError::UnexpectedByte {
            offset: 58,
            byte: b']'
        })
    );
}

#[test]
fn scan_malformed_value() {
    let r = b"{\"x0\":0.000000,\"y0\":0.00000,\"x1\":0.000000,\"y1\":90.000000}";
    assert_eq!(
        scan_all(r),
        Err(ScanError::Decimal {
            field: Field::Y0,
            offset: 20,
            source: DecimalError::Length(7)
        })
    );
}

#[test]
fn advance_cycles_through_states() {
    let r = QUARTER;
    let mut state = Scanner::INITIAL;
    let mut i = 0;
    let mut actions = vec![];

    for _ in 0..8 {
        let (action, next, successor) = state.advance(r, i).unwrap();
        actions.push((state, action));
        state = successor;
        i = next;
    }

    assert_eq!(
        actions,
        [
            (State::FindX0, Action::Start(Field::X0, 6)),
            (State::ParseX0, Action::End(Field::X0, 14)),
            (State::FindY0, Action::Start(Field::Y0, 20)),
            (State::ParseY0, Action::End(Field::Y0, 28)),
            (State::FindX1, Action::Start(Field::X1, 34)),
            (State::ParseX1, Action::End(Field::X1, 42)),
            (State::FindY1, Action::Start(Field::Y1, 48)),
            (State::ParseY1, Action::Emit(57)),
        ]
    );

    assert_eq!(state, State::FindX0);
    assert_eq!(i, r.len());
    assert_eq!(state.advance(r, i), Ok((Action::Exhausted, r.len(), State::FindX0)));
}
