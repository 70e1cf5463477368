//! Drives cells the way a streaming sheet reader does: one cell instance is
//! reused across a row, content for shared strings is looked up lazily, and
//! values that must survive are copied out with `to_value`.

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use streamcell_core::{
    CellError, CellKind, CellStyle, CellTypeTag, CellValue, DateSystem, NumberFormat, RowInfo,
    StreamingCell,
};

/// What the tokenizer saw for one `<c>` element
struct RawCell {
    col: u16,
    tag: Option<&'static str>,
    value: Option<&'static str>,
    formula: Option<&'static str>,
    style: Option<u32>,
}

fn raw(col: u16, tag: Option<&'static str>, value: Option<&'static str>) -> RawCell {
    RawCell {
        col,
        tag,
        value,
        formula: None,
        style: None,
    }
}

struct Workbook {
    shared_strings: Rc<Vec<String>>,
    styles: Vec<CellStyle>,
    lookups: Rc<Cell<usize>>,
    date_system: DateSystem,
}

impl Workbook {
    fn new(date_system: DateSystem) -> Self {
        Self {
            shared_strings: Rc::new(vec!["Name".into(), "Widget".into()]),
            styles: vec![
                CellStyle::default(),
                CellStyle::new(1, NumberFormat::BuiltIn(14)),
            ],
            lookups: Rc::new(Cell::new(0)),
            date_system,
        }
    }

    /// Feed one parsed cell into a reused instance
    fn fill(&self, cell: &mut StreamingCell, row: u32, raw: &RawCell) {
        cell.clear();
        cell.reposition(raw.col, row);
        cell.set_row(Some(RowInfo::new(row).into_ref()));
        cell.set_type_tag(raw.tag.map(CellTypeTag::from_xml));
        cell.set_raw_contents(raw.value.map(str::to_string));
        if let Some(formula) = raw.formula {
            cell.set_formula_type(true);
            cell.set_formula(Some(formula.to_string()));
        }
        if let Some(idx) = raw.style {
            let style = self.styles[idx as usize].clone();
            cell.set_numeric_format_index(Some(match &style.number_format {
                NumberFormat::BuiltIn(id) => *id,
                _ => 0,
            }));
            cell.set_style(Some(style.into_ref()));
        }

        let value = raw.value.map(str::to_string);
        if raw.tag == Some("s") {
            let strings = Rc::clone(&self.shared_strings);
            let lookups = Rc::clone(&self.lookups);
            cell.set_content_source(move || {
                lookups.set(lookups.get() + 1);
                let idx: usize = value?.parse().ok()?;
                strings.get(idx).cloned()
            });
        } else {
            cell.set_content(value);
        }
    }
}

#[test]
fn test_reused_cell_yields_row_values() {
    let wb = Workbook::new(DateSystem::Excel1900);
    let row = [
        raw(0, Some("s"), Some("1")),
        raw(1, Some("n"), Some("19.99")),
        raw(2, Some("b"), Some("1")),
        raw(3, Some("e"), Some("#N/A")),
        raw(4, None, None),
        RawCell {
            col: 5,
            tag: Some("n"),
            value: Some("39.98"),
            formula: Some("B1*2"),
            style: None,
        },
        RawCell {
            col: 6,
            tag: Some("n"),
            value: Some("45366"),
            formula: None,
            style: Some(1),
        },
    ];

    let mut cell = StreamingCell::new(0, 0, wb.date_system);
    let mut kinds = Vec::new();
    let mut values = Vec::new();
    let mut refs = Vec::new();
    for raw in &row {
        wb.fill(&mut cell, 0, raw);
        kinds.push(cell.kind().unwrap());
        values.push(cell.to_value().unwrap());
        refs.push(cell.a1_reference());
    }

    assert_eq!(
        kinds,
        vec![
            CellKind::Text,
            CellKind::Numeric,
            CellKind::Boolean,
            CellKind::Error,
            CellKind::Blank,
            CellKind::Formula,
            CellKind::Numeric,
        ]
    );
    assert_eq!(
        values,
        vec![
            CellValue::String("Widget".into()),
            CellValue::Number(19.99),
            CellValue::Boolean(true),
            CellValue::Error(CellError::Na),
            CellValue::Empty,
            CellValue::formula("B1*2", Some(CellValue::Number(39.98))),
            CellValue::Number(45366.0),
        ]
    );
    assert_eq!(refs, vec!["A1", "B1", "C1", "D1", "E1", "F1", "G1"]);

    // The last cell is still in place and date formatted
    assert!(cell.is_date_formatted());
    assert_eq!(
        cell.as_local_date_time().unwrap().map(|d| d.date().to_string()),
        Some("2024-03-15".to_string())
    );
}

#[test]
fn test_shared_string_lookup_is_lazy_and_single() {
    let wb = Workbook::new(DateSystem::Excel1900);
    let mut cell = StreamingCell::new(0, 0, wb.date_system);
    wb.fill(&mut cell, 3, &raw(0, Some("s"), Some("0")));

    assert_eq!(wb.lookups.get(), 0);
    assert_eq!(cell.as_text(), "Name");
    assert_eq!(cell.as_text(), "Name");
    assert_eq!(cell.kind().unwrap(), CellKind::Text);
    assert_eq!(wb.lookups.get(), 1);
    assert_eq!(cell.row().map(|r| r.index), Some(3));
}

#[test]
fn test_missing_shared_string_is_blank() {
    let wb = Workbook::new(DateSystem::Excel1900);
    let mut cell = StreamingCell::new(0, 0, wb.date_system);
    wb.fill(&mut cell, 0, &raw(0, Some("s"), Some("99")));

    assert_eq!(cell.kind().unwrap(), CellKind::Blank);
    assert_eq!(cell.as_text(), "");
}

#[test]
fn test_copied_values_survive_reuse() {
    let wb = Workbook::new(DateSystem::Excel1904);
    let mut cell = StreamingCell::new(0, 0, wb.date_system);

    wb.fill(&mut cell, 0, &raw(0, Some("n"), Some("1")));
    let first = cell.to_value().unwrap();
    let first_date = cell.as_local_date_time().unwrap();

    wb.fill(&mut cell, 1, &raw(0, Some("inlineStr"), Some("later")));
    assert_eq!(cell.as_text(), "later");

    assert_eq!(first, CellValue::Number(1.0));
    assert_eq!(
        first_date.map(|d| d.date().to_string()),
        Some("1904-01-02".to_string())
    );
}
