use crate::Frame;

/// Sink for finished frames. The headless platform writes markup to a stream;
/// other hosts may mount it into a display surface.
pub trait RenderBackend {
    fn frame(&mut self, frame: &Frame) -> std::io::Result<()>;
}
