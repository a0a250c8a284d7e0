

pub type Result<T> = std::result::Result<T, Error>;
pub type UnitResult = Result<()>;


/// An error produced by the planner, `unpack`, or `pack`.
/// Every variant corresponds to a violation the engine can detect from its own
/// cursor and shape bookkeeping; there is no I/O and therefore no `Io` variant.
#[derive(Debug, Clone, Eq, PartialEq)] // TODO derive Display?
pub enum Error {

    /// The sample table's line count or per-line pixel counts did not match `x_res`/`y_res`.
    ShapeMismatch(String),

    /// A channel declared a byte width other than 2 (half) or 4 (single).
    UnsupportedWidth { channel: String, byte_width: usize },

    /// The caller-supplied buffer length did not match the length computed by the planner.
    LengthDisagreement { expected: usize, actual: usize },

    /// A cursor would have advanced past the end of a buffer.
    BufferOverrun { channel: String, line: usize, message: String },

    /// The read cursor did not reach the end of the input buffer on a clean exit.
    ShortInput { consumed: usize, total: usize },
}

impl Error {

    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Error::ShapeMismatch(message.into())
    }

    pub fn unsupported_width(channel: impl Into<String>, byte_width: usize) -> Self {
        Error::UnsupportedWidth { channel: channel.into(), byte_width }
    }

    pub fn length_disagreement(expected: usize, actual: usize) -> Self {
        Error::LengthDisagreement { expected, actual }
    }

    pub fn buffer_overrun(channel: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Error::BufferOverrun { channel: channel.into(), line, message: message.into() }
    }

    pub fn short_input(consumed: usize, total: usize) -> Self {
        Error::ShortInput { consumed, total }
    }
}
