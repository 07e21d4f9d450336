use rsquare_core::ElementKind;
use rsquare_export::{ExportError, Exports, Sequence, SquareError, SquareResult};

// A host registers its own export next to the built-in one and drives both
// through the same table, the way a scripting environment would.
#[test]
fn host_registered_export_runs_alongside_square() {
    fn square_twice(seq: &mut Sequence) -> SquareResult<&mut Sequence> {
        let seq = rsquare_core::square(seq)?;
        rsquare_core::square(seq)
    }

    let mut exports = Exports::with_defaults();
    exports.register("square_twice", square_twice);

    let mut seq = Sequence::from(vec![2.0, -3.0]);
    exports.call("square", &mut seq).expect("square failed");
    assert_eq!(seq, Sequence::Float(vec![4.0, 9.0]));

    let mut seq = Sequence::from(vec![2.0, -3.0]);
    exports.call("square_twice", &mut seq).expect("square_twice failed");
    assert_eq!(seq, Sequence::Float(vec![16.0, 81.0]));
}

#[test]
fn unsupported_kind_surfaces_core_error() {
    let exports = Exports::with_defaults();
    let mut seq = Sequence::from(vec!["x".to_string()]);
    let err = exports.call("square", &mut seq).unwrap_err();
    assert_eq!(
        err,
        ExportError::Core(SquareError::UnsupportedType(ElementKind::Text))
    );
    assert_eq!(
        err.to_string(),
        "unsupported element type: text (expected integer or float)"
    );
    assert_eq!(seq, Sequence::Text(vec!["x".to_string()]));
}

#[test]
fn null_handle_fails_explicitly() {
    let exports = Exports::with_defaults();
    let mut seq = Sequence::Null;
    let err = exports.call("square", &mut seq).unwrap_err();
    assert_eq!(
        err,
        ExportError::Core(SquareError::UnsupportedType(ElementKind::Null))
    );
}
