use haversine::sans::document::{DocumentError, body};

#[test]
fn body_of_generated_layout() {
    let r = b"{\"pairs\":[\n\t{\"x0\":1.000000, \"y0\":2.000000, \"x1\":3.000000, \"y1\":4.000000}\n]}\n";
    let range = body(r).unwrap();
    assert_eq!(range.start, 10);
    assert_eq!(&r[range.end..], b"]}\n");
}

#[test]
fn body_of_empty_document() {
    assert_eq!(body(b"{\"pairs\":[]}"), Ok(10..10));
    assert_eq!(body(b" { \"pairs\" : [ \r\n ] } \n"), Ok(14..18));
}

#[test]
fn body_requires_prologue() {
    assert_eq!(body(b""), Err(DocumentError::Prologue(0)));
    assert_eq!(body(b"[]"), Err(DocumentError::Prologue(0)));
    assert_eq!(body(b"{\"points\":[]}"), Err(DocumentError::Prologue(1)));
    assert_eq!(body(b"{\"pairs\":{}}"), Err(DocumentError::Prologue(9)));
}

#[test]
fn body_requires_epilogue() {
    assert_eq!(body(b"{\"pairs\":["), Err(DocumentError::Epilogue(10)));
    assert_eq!(body(b"{\"pairs\":[]"), Err(DocumentError::Epilogue(11)));
    assert_eq!(body(b"{\"pairs\":[}"), Err(DocumentError::Epilogue(10)));
    assert_eq!(body(b"{\"pairs\":[\n]}]"), Err(DocumentError::Epilogue(14)));
}
