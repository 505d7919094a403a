mod common;

use common::{generate_bytes, TestResult};
use playbook::{generate_playbook, ContentPools, PipelineError};
use std::io::{self, Write};

/// A sink that accepts a fixed number of bytes, then reports the consumer
/// as gone. Models an HTTP response whose client disconnected mid-download.
struct FailingSink {
    accepted: Vec<u8>,
    remaining: usize,
}

impl FailingSink {
    fn new(capacity: usize) -> Self {
        Self { accepted: Vec::new(), remaining: capacity }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "consumer closed"));
        }
        let take = buf.len().min(self.remaining);
        self.accepted.extend_from_slice(&buf[..take]);
        self.remaining -= take;
        Ok(take)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_is_framed_as_a_pdf_stream() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let bytes = generate_bytes(3)?;
    assert!(bytes.starts_with(b"%PDF-1.7"));
    assert!(bytes.ends_with(b"%%EOF"));
    Ok(())
}

#[test]
fn header_and_metadata_lead_the_stream() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // The info dictionary is streamed at construction, so it must sit in the
    // first couple of kilobytes, well before the bulk of the page content.
    let bytes = generate_bytes(20)?;
    let head = String::from_utf8_lossy(&bytes[..2048.min(bytes.len())]);
    assert!(head.starts_with("%PDF-1.7"));
    assert!(head.contains("(Digital Marketing Blueprint)"));
    Ok(())
}

#[test]
fn pages_are_streamed_incrementally() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Cut the sink off after 16 KiB of an 80-page document. Generation must
    // fail, yet the accepted prefix already holds the first finished page,
    // showing pages go out as they are laid out rather than at the end.
    let mut sink = FailingSink::new(16 * 1024);
    let result = generate_playbook(80, &ContentPools::default(), &mut sink);
    assert!(matches!(result, Err(PipelineError::Render(_))));

    let accepted = String::from_utf8_lossy(&sink.accepted);
    assert!(accepted.contains("endstream"));
    assert!(accepted.contains("/Type /Page "));
}

#[test]
fn sink_failure_mid_stream_aborts_with_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Accept the header and a little more, then fail.
    let result = generate_playbook(10, &ContentPools::default(), FailingSink::new(512));
    match result {
        Err(PipelineError::Render(_)) => {}
        other => panic!("expected a render error from the dead sink, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn sink_failure_on_first_byte_aborts_with_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    let result = generate_playbook(1, &ContentPools::default(), FailingSink::new(0));
    assert!(matches!(result, Err(PipelineError::Render(_))));
}
