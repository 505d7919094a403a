use lopdf::content::Content;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{dictionary, Dictionary, Object, ObjectId, StringFormat};
use playbook_render_core::RenderError;
use playbook_types::{DocumentInfo, Font};
use std::io::{self, Write};

/// Encodes text for the WinAnsi single-byte encoding used by the built-in
/// fonts; anything outside Latin-1 degrades to `?`.
pub(crate) fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

/// A `Write` adapter that tracks the absolute byte offset.
///
/// The cross-reference table needs the offset of every indirect object, and
/// the sink may be a network response that cannot seek, so offsets are
/// counted as bytes go out instead of queried back from the sink.
struct CountingWriter<W: Write> {
    inner: W,
    position: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.position += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// An incremental PDF serializer over any byte sink.
///
/// The header, font resources and document info dictionary go out at
/// construction; content streams and page objects go out as they are handed
/// in. `finish` consumes the writer, so no command can follow the trailer.
pub struct StreamingPdfWriter<W: Write> {
    writer: CountingWriter<W>,
    xref: Xref,
    max_id: u32,
    catalog_id: ObjectId,
    pages_id: ObjectId,
    resources_id: ObjectId,
    info_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page_width: f32,
    page_height: f32,
}

impl<W: Write> StreamingPdfWriter<W> {
    pub fn new(
        writer: W,
        info: &DocumentInfo,
        page_width: f32,
        page_height: f32,
    ) -> Result<Self, RenderError> {
        let mut writer = CountingWriter::new(writer);
        writer.write_all("%PDF-1.7\n%âãÏÓ\n".as_bytes())?;

        let resources_id = (1, 0);
        let info_id = (2, 0);
        let pages_id = (3, 0);
        let catalog_id = (4, 0);

        let mut this = Self {
            writer,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            max_id: 4,
            catalog_id,
            pages_id,
            resources_id,
            info_id,
            page_ids: Vec::new(),
            page_width,
            page_height,
        };

        let mut font_dict = Dictionary::new();
        for font in Font::ALL {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(
                font.resource_name().as_bytes(),
                Object::Dictionary(single_font_dict),
            );
        }
        this.write_object_at_id(resources_id, dictionary! { "Font" => font_dict }.into())?;

        let info_dict = dictionary! {
            "Title" => Object::String(to_win_ansi(&info.title), StringFormat::Literal),
            "Author" => Object::String(to_win_ansi(&info.author), StringFormat::Literal),
            "Subject" => Object::String(to_win_ansi(&info.subject), StringFormat::Literal),
            "Keywords" => Object::String(to_win_ansi(&info.keywords), StringFormat::Literal),
        };
        this.write_object_at_id(info_id, info_dict.into())?;

        Ok(this)
    }

    fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    /// Serializes an indirect object to the sink immediately.
    pub fn write_object(&mut self, object: Object) -> Result<ObjectId, RenderError> {
        let id = self.new_object_id();
        self.write_object_at_id(id, object)?;
        Ok(id)
    }

    fn write_object_at_id(&mut self, id: ObjectId, object: Object) -> Result<(), RenderError> {
        internal_writer::write_indirect_object(&mut self.writer, id, &object, &mut self.xref)?;
        Ok(())
    }

    /// Encodes page content operations and streams them out immediately.
    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let stream = lopdf::Stream::new(dictionary! {}, encoded);
        self.write_object(Object::Stream(stream))
    }

    /// Writes the page object for an already-streamed content stream and
    /// appends it to the page tree in order.
    pub fn write_page(&mut self, content_id: ObjectId) -> Result<ObjectId, RenderError> {
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.0.into(),
                0.0.into(),
                self.page_width.into(),
                self.page_height.into(),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => self.resources_id,
        };
        let page_id = self.write_object(page_dict.into())?;
        self.page_ids.push(page_id);
        log::debug!("streamed page {} at object {:?}", self.page_ids.len(), page_id);
        Ok(page_id)
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Writes the page tree, catalog, cross-reference table and trailer,
    /// flushes the sink and returns it.
    pub fn finish(mut self) -> Result<W, RenderError> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.write_object_at_id(self.pages_id, pages_dict.into())?;

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.write_object_at_id(self.catalog_id, catalog_dict.into())?;

        let xref_start = self.writer.position();
        self.xref.size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, &self.xref, self.max_id)?;

        let trailer = dictionary! {
            "Size" => self.xref.size as i64,
            "Root" => self.catalog_id,
            "Info" => self.info_id,
        };
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer.into_inner())
    }
}

mod internal_writer {
    use super::*;
    use std::collections::BTreeMap;

    pub fn write_indirect_object<W: Write>(
        writer: &mut CountingWriter<W>,
        id: ObjectId,
        object: &Object,
        xref: &mut Xref,
    ) -> io::Result<()> {
        let offset = writer.position();
        xref.insert(
            id.0,
            XrefEntry::Normal { offset: offset as u32, generation: id.1 },
        );
        write!(writer, "{} {} obj\n", id.0, id.1)?;
        write_object(writer, object)?;
        writeln!(writer, "\nendobj")?;
        Ok(())
    }

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
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        if byte == b'(' || byte == b')' || byte == b'\\' {
                            writer.write_all(b"\\")?;
                        }
                        writer.write_all(&[byte])?;
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    write!(
                        writer,
                        "<{}>",
                        s.iter().map(|b| format!("{:02X}", b)).collect::<String>()
                    )
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
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

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted_keys {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Object ids are allocated contiguously from 1, so the table is a
    /// single section covering every object plus the conventional free head.
    pub fn write_xref<W: Write>(writer: &mut W, xref: &Xref, max_id: u32) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", max_id + 1)?;
        writeln!(writer, "0000000000 65535 f ")?;
        for id in 1..=max_id {
            match xref.entries.get(&id) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    writeln!(writer, "{:010} {:05} n ", offset, generation)?;
                }
                _ => writeln!(writer, "0000000000 65535 f ")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::Operation;

    fn sample_info() -> DocumentInfo {
        DocumentInfo {
            title: "Sample".to_string(),
            author: "Tester".to_string(),
            subject: "Streaming writer test".to_string(),
            keywords: "test".to_string(),
        }
    }

    fn page_ops(text: &str) -> Content {
        Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
                ),
                Operation::new("ET", vec![]),
            ],
        }
    }

    #[test]
    fn produces_a_loadable_two_page_document() {
        let mut writer =
            StreamingPdfWriter::new(Vec::new(), &sample_info(), 612.0, 792.0).unwrap();
        for text in ["First page", "Second page"] {
            let content_id = writer.write_content_stream(page_ops(text)).unwrap();
            writer.write_page(content_id).unwrap();
        }
        let bytes = writer.finish().unwrap();

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.ends_with(b"%%EOF"));

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn header_and_info_are_streamed_before_any_page() {
        let writer = StreamingPdfWriter::new(Vec::new(), &sample_info(), 612.0, 792.0).unwrap();
        // Peek at the sink without finishing the document.
        let partial = writer.writer.inner.clone();
        assert!(partial.starts_with(b"%PDF-1.7"));
        assert!(String::from_utf8_lossy(&partial).contains("(Sample)"));
    }

    #[test]
    fn sink_error_surfaces_as_render_error() {
        struct BrokenSink;
        impl Write for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "consumer closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = StreamingPdfWriter::new(BrokenSink, &sample_info(), 612.0, 792.0);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
