use crate::pdf_error;
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream, StringFormat};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};
use warrant_render_core::RenderError;
use warrant_types::Size;

/// Buffers PDF objects and writes them, with a cross-reference table, on `finish`.
///
/// Object ids are allocated densely from 1, so the xref is a single section.
/// Output is a pure function of the buffered objects: no timestamps or random
/// ids are written.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    info_id: Option<ObjectId>,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            info_id: None,
            page_ids: Vec::new(),
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let bytes = content.encode().map_err(pdf_error)?;
        Ok(self.buffer_object(Object::Stream(Stream::new(dictionary! {}, bytes))))
    }

    /// Adds a page showing `content_id`, appended after the pages added so far.
    pub fn add_page(&mut self, content_id: ObjectId, size: Size) -> ObjectId {
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                size.width.into(),
                size.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.buffer_object(page.into());
        self.page_ids.push(page_id);
        page_id
    }

    pub fn set_info(&mut self, title: &str, producer: &str) {
        let info = dictionary! {
            "Title" => Object::String(crate::to_win_ansi(title), StringFormat::Literal),
            "Producer" => Object::String(crate::to_win_ansi(producer), StringFormat::Literal),
        };
        self.info_id = Some(self.buffer_object(info.into()));
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());
        self.buffered_objects.insert(
            self.catalog_id,
            dictionary! { "Type" => "Catalog", "Pages" => self.pages_id }.into(),
        );

        let mut offsets = BTreeMap::new();
        for (id, object) in &self.buffered_objects {
            offsets.insert(id.0, self.writer.stream_position()?);
            write!(self.writer, "{} {} obj\n", id.0, id.1)?;
            serialize::write_object(&mut self.writer, object)?;
            writeln!(self.writer, "\nendobj")?;
        }

        let xref_start = self.writer.stream_position()?;
        let size = self.max_id + 1;
        writeln!(self.writer, "xref")?;
        writeln!(self.writer, "0 {}", size)?;
        writeln!(self.writer, "0000000000 65535 f ")?;
        for id in 1..size {
            match offsets.get(&id) {
                Some(offset) => writeln!(self.writer, "{:010} 00000 n ", offset)?,
                None => writeln!(self.writer, "0000000000 65535 f ")?,
            }
        }

        let mut trailer = dictionary! { "Size" => size as i64, "Root" => self.catalog_id };
        if let Some(info_id) = self.info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        serialize::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

mod serialize {
    use lopdf::{Dictionary, Object, StringFormat};
    use std::collections::BTreeMap;
    use std::io::{self, Write};

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, StringFormat::Literal) => write_literal(writer, s),
            Object::String(s, StringFormat::Hexadecimal) => {
                writer.write_all(b"<")?;
                for byte in s {
                    write!(writer, "{:02X}", byte)?;
                }
                writer.write_all(b">")
            }
            Object::Array(items) => {
                writer.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, item)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    fn write_literal(writer: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
        writer.write_all(b"(")?;
        for &byte in bytes {
            if matches!(byte, b'(' | b')' | b'\\') {
                writer.write_all(b"\\")?;
            }
            writer.write_all(&[byte])?;
        }
        writer.write_all(b")")
    }

    /// Keys are written sorted so identical dictionaries serialize identically.
    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }
}
