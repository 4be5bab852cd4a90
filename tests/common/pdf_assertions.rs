use lopdf::{Document as LopdfDocument, Object};

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Base font names declared in any font resource dictionary
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = Vec::new();
    for object in doc.objects.values() {
        let Ok(font_dict) = object
            .as_dict()
            .and_then(|dict| dict.get(b"Font"))
            .and_then(Object::as_dict)
        else {
            continue;
        };
        for (_resource, font) in font_dict.iter() {
            let base_font = font
                .as_dict()
                .and_then(|font| font.get(b"BaseFont"))
                .and_then(Object::as_name);
            if let Ok(name) = base_font {
                let name = String::from_utf8_lossy(name).to_string();
                if !fonts.contains(&name) {
                    fonts.push(name);
                }
            }
        }
    }
    fonts
}

fn number(object: &Object) -> Option<f32> {
    match object {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let page = doc.get_dictionary(page_id).ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let width = number(&media_box[2])? - number(&media_box[0])?;
    let height = number(&media_box[3])? - number(&media_box[1])?;
    Some((width, height))
}

/// Document title from the trailer's Info dictionary
pub fn document_title(doc: &LopdfDocument) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    match info.get(b"Title").ok()? {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).to_string()),
        _ => None,
    }
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that a single page contains specific text
#[macro_export]
macro_rules! assert_page_contains_text {
    ($pdf:expr, $page:expr, $text:expr) => {
        let extracted = $pdf.page_text($page);
        assert!(
            extracted.contains($text),
            "Page {} should contain '{}', but its text was:\n{}",
            $page,
            $text,
            extracted
        );
    };
}

/// Assert that PDF references a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}
