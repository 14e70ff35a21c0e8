// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use slidewin_core::StreamItem;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Asserts that `stream` stays silent for `timeout_ms` milliseconds.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Asserts that `stream` completes within `timeout_ms` milliseconds.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected stream to end, but it emitted an element"),
        Err(_) => panic!("Expected stream to end within {timeout_ms} ms"),
    }
}

/// Waits for the next item of `stream`, panicking on completion or timeout.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected an item, but the stream ended"),
        Err(_) => panic!("No item received within {timeout_ms} ms"),
    }
}

/// Extracts the value of a received item, panicking on errors and completion.
pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("Expected a value, got error: {e}"),
        None => panic!("Expected a value, but the stream ended"),
    }
}
