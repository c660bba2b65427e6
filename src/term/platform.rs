/// Host platform access: environment variables, OS family, terminal queries.
use std::io::IsTerminal;

/// An output stream that help or error text can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Raw file descriptor number of the stream.
    #[must_use]
    pub const fn fd(self) -> i32 {
        match self {
            Self::Stdout => 1,
            Self::Stderr => 2,
        }
    }
}

/// Everything width resolution needs to know about the host.
///
/// The terminal capability is optional: implementations without a way to
/// query the terminal return `None` from [`Platform::query_columns`].
pub trait Platform {
    /// Read an environment variable. Non-UTF-8 values count as absent.
    fn var(&self, name: &str) -> Option<String>;

    /// Whether the host belongs to the Windows family.
    fn is_windows(&self) -> bool;

    /// Whether `stream` is attached to an interactive terminal.
    fn is_terminal(&self, stream: Stream) -> bool;

    /// Column count reported by the terminal behind `stream`, if the
    /// capability exists and the query succeeds.
    fn query_columns(&self, stream: Stream) -> Option<usize>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlatform;

impl Platform for SystemPlatform {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn is_terminal(&self, stream: Stream) -> bool {
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[cfg(unix)]
    fn query_columns(&self, stream: Stream) -> Option<usize> {
        // SAFETY: `winsize` is plain old data, zero is a valid bit pattern.
        let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
        // SAFETY: TIOCGWINSZ writes a `winsize` through the pointer, which
        // points at a live, properly aligned local.
        let ret = unsafe { libc::ioctl(stream.fd(), libc::TIOCGWINSZ, &raw mut ws) };
        if ret != 0 {
            return None;
        }
        Some(usize::from(ws.ws_col))
    }

    #[cfg(not(unix))]
    fn query_columns(&self, _stream: Stream) -> Option<usize> {
        None
    }
}
