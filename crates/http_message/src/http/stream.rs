use std::{
    fmt,
    fs::OpenOptions,
    io::{Cursor, Read, Seek, SeekFrom, Write},
    path::Path,
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use bytes::Bytes;
use uhsapi::http::StreamInterface;

use crate::http::StreamError;

/// Any byte resource a [`Stream`] can wrap
pub trait Resource: Read + Write + Seek + Send {}

impl<T: Read + Write + Seek + Send> Resource for T {}

/// Access mode of a stream, written the way `fopen` modes are
/// e.g. `r`, `w+`, `ab`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamMode {
    base: u8,
    plus: bool,
}

impl StreamMode {
    pub const READ: Self = Self {
        base: b'r',
        plus: false,
    };
    pub const READ_WRITE: Self = Self {
        base: b'r',
        plus: true,
    };
    pub const WRITE: Self = Self {
        base: b'w',
        plus: false,
    };

    pub fn is_readable(&self) -> bool {
        self.base == b'r' || self.plus
    }

    pub fn is_writable(&self) -> bool {
        self.base != b'r' || self.plus
    }

    fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(self.is_readable());
        match self.base {
            b'r' => options.write(self.plus),
            b'w' => options.write(true).create(true).truncate(true),
            b'a' => options.append(true).create(true),
            b'x' => options.write(true).create_new(true),
            _ => options.write(true).create(true),
        };
        options
    }
}

impl FromStr for StreamMode {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || StreamError::InvalidMode(s.to_owned());
        let mut bytes = s.bytes().filter(|&b| !matches!(b, b'b' | b't'));
        let base = bytes
            .next()
            .filter(|&b| matches!(b, b'r' | b'w' | b'a' | b'x' | b'c'))
            .ok_or_else(err)?;
        let plus = match bytes.next() {
            None => false,
            Some(b'+') => true,
            Some(_) => return Err(err()),
        };
        if bytes.next().is_some() {
            return Err(err());
        }
        Ok(Self { base, plus })
    }
}

struct Inner {
    resource: Option<Box<dyn Resource>>,
    mode: StreamMode,
}

impl Inner {
    fn resource(&mut self) -> Result<&mut Box<dyn Resource>, StreamError> {
        self.resource.as_mut().ok_or(StreamError::Detached)
    }

    fn size(&mut self) -> Result<u64, StreamError> {
        let resource = self.resource()?;
        let pos = resource.stream_position()?;
        let end = resource.seek(SeekFrom::End(0))?;
        resource.seek(SeekFrom::Start(pos))?;
        Ok(end)
    }
}

/// A body stream
///
/// A [`Stream`] is a handle: clones share the same resource and cursor, so a request and the
/// requests derived from it hand out the very same body. Access is synchronised by a lock, but
/// interleaving reads from several owners moves one shared cursor.
#[derive(Clone)]
pub struct Stream {
    inner: Arc<Mutex<Inner>>,
}

impl Stream {
    /// An empty, readable and writable in-memory stream
    pub fn memory() -> Self {
        Self::from_bytes(b"")
    }

    /// An in-memory stream holding `data`, positioned at offset 0
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Self {
        Self::from_resource(Cursor::new(data.as_ref().to_vec()), StreamMode::READ_WRITE)
    }

    pub fn from_resource<R: Resource + 'static>(resource: R, mode: StreamMode) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                resource: Some(Box::new(resource)),
                mode,
            })),
        }
    }

    /// Opens a file, `mode` is an fopen style mode string
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<Self, StreamError> {
        let mode: StreamMode = mode.parse()?;
        let file = mode.open_options().open(path.as_ref())?;
        log::trace!("opened {} as a {:?} stream", path.as_ref().display(), mode);
        Ok(Self::from_resource(file, mode))
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether both handles refer to the same stream
    pub fn ptr_eq(&self, other: &Stream) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Reads up to `len` bytes from the current position
    pub fn read(&self, len: usize) -> Result<Bytes, StreamError> {
        let mut inner = self.lock();
        if !inner.mode.is_readable() {
            return Err(StreamError::NotReadable);
        }
        let mut buf = Vec::new();
        inner.resource()?.take(len as u64).read_to_end(&mut buf)?;
        Ok(Bytes::from(buf))
    }

    /// Writes all of `bytes`, returning the number of bytes written
    pub fn write(&self, bytes: &[u8]) -> Result<usize, StreamError> {
        let mut inner = self.lock();
        if !inner.mode.is_writable() {
            return Err(StreamError::NotWritable);
        }
        inner.resource()?.write_all(bytes)?;
        Ok(bytes.len())
    }

    pub fn seek(&self, pos: SeekFrom) -> Result<u64, StreamError> {
        Ok(self.lock().resource()?.seek(pos)?)
    }

    pub fn rewind(&self) -> Result<(), StreamError> {
        self.seek(SeekFrom::Start(0)).map(|_| ())
    }

    pub fn tell(&self) -> Result<u64, StreamError> {
        Ok(self.lock().resource()?.stream_position()?)
    }

    /// True at the end of the stream, and for a detached stream
    pub fn eof(&self) -> bool {
        let mut inner = self.lock();
        let Ok(size) = inner.size() else {
            return true;
        };
        inner
            .resource()
            .and_then(|r| Ok(r.stream_position()?))
            .map_or(true, |pos| pos >= size)
    }

    /// Size in bytes, `None` once detached
    pub fn size(&self) -> Option<u64> {
        self.lock().size().ok()
    }

    /// Everything from the current position to the end
    pub fn contents(&self) -> Result<Bytes, StreamError> {
        let mut inner = self.lock();
        if !inner.mode.is_readable() {
            return Err(StreamError::NotReadable);
        }
        let mut buf = Vec::new();
        inner.resource()?.read_to_end(&mut buf)?;
        Ok(Bytes::from(buf))
    }

    pub fn is_readable(&self) -> bool {
        let inner = self.lock();
        inner.resource.is_some() && inner.mode.is_readable()
    }

    pub fn is_writable(&self) -> bool {
        let inner = self.lock();
        inner.resource.is_some() && inner.mode.is_writable()
    }

    pub fn is_seekable(&self) -> bool {
        self.lock().resource.is_some()
    }

    /// Closes the underlying resource, every handle sees a detached stream afterwards
    pub fn close(&self) {
        if self.lock().resource.take().is_some() {
            log::trace!("stream closed");
        }
    }

    /// Separates the underlying resource from the stream
    pub fn detach(&self) -> Option<Box<dyn Resource>> {
        self.lock().resource.take()
    }
}

impl Default for Stream {
    fn default() -> Self {
        Self::memory()
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Stream")
            .field("mode", &inner.mode)
            .field("detached", &inner.resource.is_none())
            .finish()
    }
}

/// The whole stream from offset 0, empty when it cannot be read
impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rewind().is_err() {
            return Ok(());
        }
        match self.contents() {
            Ok(bytes) => f.write_str(&String::from_utf8_lossy(&bytes)),
            Err(_) => Ok(()),
        }
    }
}

impl StreamInterface for Stream {
    type Chunk = Bytes;
    type Error = StreamError;

    fn read(&self, len: usize) -> Result<Bytes, StreamError> {
        Stream::read(self, len)
    }

    fn write(&self, bytes: &[u8]) -> Result<usize, StreamError> {
        Stream::write(self, bytes)
    }

    fn seek(&self, pos: SeekFrom) -> Result<u64, StreamError> {
        Stream::seek(self, pos)
    }

    fn tell(&self) -> Result<u64, StreamError> {
        Stream::tell(self)
    }

    fn eof(&self) -> bool {
        Stream::eof(self)
    }

    fn size(&self) -> Option<u64> {
        Stream::size(self)
    }

    fn contents(&self) -> Result<Bytes, StreamError> {
        Stream::contents(self)
    }

    fn is_readable(&self) -> bool {
        Stream::is_readable(self)
    }

    fn is_writable(&self) -> bool {
        Stream::is_writable(self)
    }

    fn is_seekable(&self) -> bool {
        Stream::is_seekable(self)
    }

    fn close(&self) {
        Stream::close(self)
    }
}
