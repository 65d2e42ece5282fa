//! Streamed response accumulation
//!
//! The body of a generate call is a sequence of newline-delimited JSON
//! objects terminated by connection close. This module adapts the raw byte
//! stream into a lazy stream of decoded fragments and folds it into the
//! final response text.

use crate::generate::GenerateChunk;
use crate::{InferenceError, Result};
use futures::{Stream, StreamExt, TryStreamExt, future, stream};

/// Strip an optional trailing `\r` and decode the line bytes
fn into_line(mut raw: Vec<u8>) -> String {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    String::from_utf8_lossy(&raw).into_owned()
}

/// Split a byte-chunk stream into complete lines.
///
/// Lines may span transport chunk boundaries; an unterminated final line is
/// flushed when the body ends.
fn lines<S, B, E>(body: S) -> impl Stream<Item = Result<String>>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<InferenceError>,
{
    let mut buf: Vec<u8> = Vec::new();
    body.map(Some)
        .chain(stream::once(future::ready(None)))
        .flat_map(move |event| {
            let mut out: Vec<Result<String>> = Vec::new();
            match event {
                Some(Ok(chunk)) => {
                    buf.extend_from_slice(chunk.as_ref());
                    while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
                        let mut line: Vec<u8> = buf.drain(..=pos).collect();
                        line.pop();
                        out.push(Ok(into_line(line)));
                    }
                }
                Some(Err(e)) => out.push(Err(e.into())),
                // End of body: flush an unterminated final line
                None => {
                    if !buf.is_empty() {
                        out.push(Ok(into_line(std::mem::take(&mut buf))));
                    }
                }
            }
            stream::iter(out)
        })
}

/// Adapt the raw response body into a lazy stream of decoded fragments.
///
/// Blank lines are skipped; every other line must parse as one JSON
/// fragment. A transport error surfaces as an item in place.
pub fn fragments<S, B, E>(body: S) -> impl Stream<Item = Result<GenerateChunk>>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<InferenceError>,
{
    lines(body).filter_map(|line| {
        future::ready(match line {
            Ok(line) if line.is_empty() => None,
            Ok(line) => {
                Some(serde_json::from_str::<GenerateChunk>(&line).map_err(InferenceError::from))
            }
            Err(e) => Some(Err(e)),
        })
    })
}

/// Accumulate the text fragments of a streamed response in arrival order.
///
/// The assembled text is trimmed of surrounding whitespace. The first
/// transport or decode error aborts the fold; text accumulated before the
/// failure is discarded and only the error is returned.
pub async fn collect_text<S, B, E>(body: S) -> Result<String>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<InferenceError>,
{
    let text = fragments(body)
        .try_fold(String::new(), |mut acc, chunk| {
            if let Some(fragment) = chunk.response {
                acc.push_str(&fragment);
            }
            future::ready(Ok(acc))
        })
        .await?;

    Ok(text.trim().to_string())
}
