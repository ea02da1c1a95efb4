//! Last-line extraction that seeks from the end of a reader.

use std::io::{self, Read, Seek, SeekFrom};

/// Returns the final line of `reader` without scanning the whole stream.
///
/// Walks backwards from the end one byte at a time until it finds the
/// newline terminating the second-to-last line, then reads forward from
/// there. When no newline exists the whole stream is the final line.
/// The returned line has its line ending stripped; an empty stream and
/// a stream ending in consecutive newlines both yield an empty string.
///
/// # Errors
///
/// Returns an error if seeking or reading fails, or if the final line
/// is not valid UTF-8.
pub fn last_line<R: Read + Seek>(reader: &mut R) -> io::Result<String> {
    let len = reader.seek(SeekFrom::End(0))?;
    if len == 0 {
        return Ok(String::new());
    }

    // Scan starts one byte in so a trailing newline is not mistaken
    // for the boundary of the final line.
    let mut start = len - 1;
    while start > 0 {
        reader.seek(SeekFrom::Start(start - 1))?;
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        if byte[0] == b'\n' {
            break;
        }
        start -= 1;
    }

    reader.seek(SeekFrom::Start(start))?;
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let line =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(line.trim_end_matches('\n').trim_end_matches('\r').to_string())
}
