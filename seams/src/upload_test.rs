use super::*;

const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#;

// =============================================================
// File count
// =============================================================

#[test]
fn check_count_accepts_only_two() {
    assert!(check_count(2).is_ok());
    for n in [0, 1, 3, 10] {
        assert_eq!(check_count(n), Err(UploadError::WrongFileCount(n)));
    }
}

#[test]
fn wrong_count_message_is_user_facing() {
    let msg = UploadError::WrongFileCount(3).to_string();
    assert_eq!(msg, "please select exactly 2 SVG files (got 3)");
}

// =============================================================
// SourceFile
// =============================================================

#[test]
fn from_bytes_decodes_utf8() {
    let f = SourceFile::from_bytes("a.svg", SVG.as_bytes().to_vec()).unwrap();
    assert_eq!(f.name, "a.svg");
    assert_eq!(f.text, SVG);
}

#[test]
fn from_bytes_rejects_invalid_utf8() {
    let err = SourceFile::from_bytes("bin.svg", vec![0xff, 0xfe, 0x00]).unwrap_err();
    assert_eq!(err, UploadError::NotUtf8("bin.svg".into()));
}

// =============================================================
// UploadGate
// =============================================================

#[test]
fn begin_issues_current_ticket() {
    let mut gate = UploadGate::new();
    let t = gate.begin(2).unwrap();
    assert!(gate.is_current(t));
}

#[test]
fn newer_ticket_supersedes_older() {
    let mut gate = UploadGate::new();
    let first = gate.begin(2).unwrap();
    let second = gate.begin(2).unwrap();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn rejected_upload_does_not_supersede() {
    let mut gate = UploadGate::new();
    let t = gate.begin(2).unwrap();
    assert_eq!(gate.begin(1), Err(UploadError::WrongFileCount(1)));
    assert!(gate.is_current(t));
}

#[test]
fn settled_ticket_is_no_longer_current() {
    let mut gate = UploadGate::new();
    let t = gate.begin(2).unwrap();
    gate.settle(t);
    assert!(!gate.is_current(t));

    let next = gate.begin(2).unwrap();
    assert!(gate.is_current(next));
}

#[test]
fn settling_a_stale_ticket_does_nothing() {
    let mut gate = UploadGate::new();
    let first = gate.begin(2).unwrap();
    let second = gate.begin(2).unwrap();
    gate.settle(first);
    assert!(gate.is_current(second));
}

#[test]
fn fresh_gate_recognizes_no_ticket() {
    let gate = UploadGate::new();
    assert!(!gate.is_current(UploadTicket::from_generation(0)));
    assert!(!gate.is_current(UploadTicket::from_generation(1)));
}

#[test]
fn ticket_generation_round_trips() {
    let mut gate = UploadGate::new();
    let t = gate.begin(2).unwrap();
    assert_eq!(UploadTicket::from_generation(t.generation()), t);
}

// =============================================================
// normalize_pair
// =============================================================

#[test]
fn normalize_pair_assigns_panes_in_order() {
    let files = vec![SourceFile::new("left.svg", SVG), SourceFile::new("right.svg", SVG)];
    let [left, right] = normalize_pair(files).unwrap();
    let left = left.unwrap();
    let right = right.unwrap();
    assert_eq!(left.index(), Pane::Left);
    assert_eq!(left.source_name(), "left.svg");
    assert_eq!(right.index(), Pane::Right);
    assert_eq!(right.source_name(), "right.svg");
}

#[test]
fn normalize_pair_keeps_unparseable_pane_empty() {
    let files = vec![SourceFile::new("left.svg", "not xml"), SourceFile::new("right.svg", SVG)];
    let [left, right] = normalize_pair(files).unwrap();
    assert!(left.is_none());
    assert!(right.is_some());
}

#[test]
fn normalize_pair_rejects_wrong_count() {
    let files = vec![SourceFile::new("only.svg", SVG)];
    assert_eq!(normalize_pair(files), Err(UploadError::WrongFileCount(1)));
}
