mod common;

use common::fixtures::*;
use common::pdf_assertions::extract_text;
use common::{TestResult, generate_pdf, init_logger};
use warrant_press::WarrantKind;

#[test]
fn test_long_ledger_flows_across_pages() -> TestResult {
    init_logger();

    let record = approved(warrant(WarrantKind::Arrest), "Judge Hale")
        .with_criminal_record(criminal_record(two_line_entries(50)));
    let pdf = generate_pdf(&record)?;

    assert_pdf_min_pages!(pdf, 3);
    assert_pdf_page_count!(pdf, 4);
    assert_page_contains_text!(pdf, 2, "Criminal Record");
    assert_page_contains_text!(pdf, 2, "Franklin Clinton - Ref. LS-20931");

    for page in 2..=4u32 {
        assert_page_contains_text!(pdf, page, "DATE");
        assert_page_contains_text!(pdf, page, "CHARGES");
        let footer = format!("- page {}", page);
        assert_page_contains_text!(pdf, page, footer.as_str());
    }
    assert!(!pdf.page_text(3).contains("Criminal Record"));

    assert_page_contains_text!(pdf, 4, "Total entries: 50");
    assert!(!pdf.page_text(3).contains("Total entries"));
    Ok(())
}

#[test]
fn test_rows_keep_input_order() -> TestResult {
    let record = warrant(WarrantKind::Arrest)
        .with_criminal_record(criminal_record(two_line_entries(60)));
    let pdf = generate_pdf(&record)?;
    let text = extract_text(&pdf.doc);

    let mut last = 0;
    for i in 0..60 {
        let date = format!("R{:03}", i);
        let position = text
            .find(&date)
            .unwrap_or_else(|| panic!("row {} missing", date));
        assert!(position >= last, "row {} out of order", date);
        last = position;
    }
    assert_pdf_contains_text!(pdf, "Total entries: 60");
    Ok(())
}

#[test]
fn test_each_row_stays_on_one_page() -> TestResult {
    let record = warrant(WarrantKind::Arrest)
        .with_criminal_record(criminal_record(short_entries(120)));
    let pdf = generate_pdf(&record)?;

    for i in 0..120 {
        let date = format!("R{:03}", i);
        let charge = format!("Charge number {}", i);
        let pages: Vec<u32> = (1..=pdf.page_count() as u32)
            .filter(|p| {
                let text = pdf.page_text(*p);
                text.contains(&date) || text.lines().any(|l| l.trim() == charge)
            })
            .collect();
        assert_eq!(pages.len(), 1, "row {} found on pages {:?}", date, pages);
    }
    Ok(())
}

#[test]
fn test_empty_ledger_adds_no_pages() -> TestResult {
    init_logger();

    let record = warrant(WarrantKind::Arrest).with_criminal_record(criminal_record(vec![]));
    let pdf = generate_pdf(&record)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_not_contains_text!(pdf, "Criminal Record");
    assert_pdf_not_contains_text!(pdf, "CHARGES");
    Ok(())
}

#[test]
fn test_short_ledger_uses_one_extra_page() -> TestResult {
    let record = warrant(WarrantKind::Subpoena)
        .with_criminal_record(criminal_record(short_entries(3)));
    let pdf = generate_pdf(&record)?;
    assert_pdf_page_count!(pdf, 2);
    assert_page_contains_text!(pdf, 2, "Charge number 2");
    assert_page_contains_text!(pdf, 2, "Total entries: 3");
    assert_page_contains_text!(pdf, 1, "page 1");
    Ok(())
}
