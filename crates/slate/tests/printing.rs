//! Tests for the printable area and grid rendering

use pretty_assertions::assert_eq;
use slate::prelude::*;

fn pos(a1: &str) -> Position {
    a1.parse().unwrap()
}

fn render_values(sheet: &Sheet) -> String {
    let mut out = String::new();
    sheet.print_values(&mut out).unwrap();
    out
}

fn render_texts(sheet: &Sheet) -> String {
    let mut out = String::new();
    sheet.print_texts(&mut out).unwrap();
    out
}

/// An empty sheet prints nothing
#[test]
fn test_empty_sheet() {
    let sheet = Sheet::new();
    assert_eq!(sheet.printable_size(), Size::new(0, 0));
    assert_eq!(render_values(&sheet), "");
    assert_eq!(render_texts(&sheet), "");
}

/// The printable area is the tightest rectangle from the origin
#[test]
fn test_printable_size() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("B2"), "x").unwrap();
    assert_eq!(sheet.printable_size(), Size::new(2, 2));

    sheet.set_cell(pos("D1"), "y").unwrap();
    assert_eq!(sheet.printable_size(), Size::new(2, 4));

    sheet.clear_cell(pos("D1")).unwrap();
    assert_eq!(sheet.printable_size(), Size::new(2, 2));
}

/// Cells reset to empty no longer count toward the printable area
#[test]
fn test_printable_size_ignores_empty_shells() {
    let mut sheet = Sheet::new();
    // C3 materializes as a shell to host A1's back edge.
    sheet.set_cell(pos("A1"), "=C3").unwrap();
    assert_eq!(sheet.printable_size(), Size::new(1, 1));

    sheet.set_cell(pos("C3"), "5").unwrap();
    assert_eq!(sheet.printable_size(), Size::new(3, 3));

    sheet.set_cell(pos("C3"), "").unwrap();
    assert_eq!(sheet.printable_size(), Size::new(1, 1));
}

/// Values render tab-separated with empty fields for gaps
#[test]
fn test_print_values() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "1").unwrap();
    sheet.set_cell(pos("C1"), "=A1+2").unwrap();
    sheet.set_cell(pos("B2"), "hello").unwrap();

    assert_eq!(render_values(&sheet), "1\t\t3\n\thello\t\n");
}

/// Texts render verbatim, formulas in canonical form
#[test]
fn test_print_texts() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "'=escaped").unwrap();
    sheet.set_cell(pos("B1"), "=(1+2)*3").unwrap();
    sheet.set_cell(pos("A2"), "plain").unwrap();

    assert_eq!(render_texts(&sheet), "'=escaped\t=(1+2)*3\nplain\t\n");
}

/// Error values render their fixed display strings
#[test]
fn test_print_error_values() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "=1/0").unwrap();
    sheet.set_cell(pos("B1"), "nope").unwrap();
    sheet.set_cell(pos("C1"), "=B1+1").unwrap();

    assert_eq!(render_values(&sheet), "#ARITHM!\tnope\t#VALUE!\n");
}

/// Numbers render in their shortest round-trip decimal form
#[test]
fn test_print_number_formatting() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "=14/7").unwrap();
    sheet.set_cell(pos("B1"), "=1/4").unwrap();

    assert_eq!(render_values(&sheet), "2\t0.25\n");
}
