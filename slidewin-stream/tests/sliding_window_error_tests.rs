// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, FusedStream};
use futures::StreamExt;
use slidewin_core::{SlidewinError, StreamItem, WindowPhase};
use slidewin_stream::{IntoWindowedStream, SlidingWindowStreamExt, TryIntoWindowedStream};
use slidewin_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel_with_errors, unwrap_stream,
    unwrap_value, DropProbe, ErrorInjectingStream,
};
use std::io;

#[tokio::test]
async fn test_sliding_window_forwards_error_and_ends() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.sliding_window(2)?;

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Value(2))?;
    tx.send(StreamItem::Value(3))?;
    tx.send(StreamItem::Error(SlidewinError::stream_error("disk gone")))?;

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![1, 2]
    );
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![2, 3]
    );
    assert!(matches!(
        unwrap_stream(&mut result, 500).await,
        StreamItem::Error(SlidewinError::StreamProcessingError { context }) if context == "disk gone"
    ));
    assert_stream_ended(&mut result, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_error_releases_source() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.sliding_window(3)?;

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(SlidewinError::stream_error("boom")))?;
    let item = unwrap_stream(&mut result, 500).await;

    // Assert
    assert!(item.is_error());
    assert!(tx.is_closed());
    assert!(tx.send(StreamItem::Value(2)).is_err());
    assert!(result.is_terminated());
    assert_eq!(result.phase(), WindowPhase::Exhausted);

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_error_while_filling_discards_partial() -> anyhow::Result<()> {
    // Arrange
    let source = ErrorInjectingStream::new(stream::iter(vec![1, 2, 3, 4, 5]), 2);
    let mut result = source.sliding_window(4)?;

    // Act
    let first = result.next().await;

    // Assert
    assert!(matches!(first, Some(StreamItem::Error(_))));
    assert!(result.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_does_not_poll_after_error() -> anyhow::Result<()> {
    // Arrange
    let source = ErrorInjectingStream::new(stream::iter(vec![10, 20, 30, 40]), 3);
    let (source, released) = DropProbe::new(source);
    let mut result = source.sliding_window(2)?;

    // Act
    let items: Vec<StreamItem<Vec<i32>>> = result.by_ref().collect().await;

    // Assert
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], StreamItem::Value(vec![10, 20]));
    assert_eq!(items[1], StreamItem::Value(vec![20, 30]));
    assert!(items[2].is_error());
    assert!(released.is_released());
    assert!(result.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_user_error_keeps_source_error() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![
        Ok(1),
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "short read")),
        Ok(2),
    ])
    .try_into_windowed_stream();
    let mut result = source.sliding_window(1)?;

    // Act
    let first = result.next().await;
    let second = result.next().await;

    // Assert
    assert_eq!(unwrap_value(first), vec![1]);
    let Some(StreamItem::Error(SlidewinError::UserError(inner))) = second else {
        panic!("expected a wrapped user error");
    };
    let io_error = inner
        .downcast_ref::<io::Error>()
        .ok_or_else(|| anyhow::anyhow!("source error type was lost"))?;
    assert_eq!(io_error.kind(), io::ErrorKind::UnexpectedEof);
    assert!(result.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_pending_source_emits_nothing() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut result = stream.sliding_window(2)?;

    // Act
    tx.send(StreamItem::Value(1))?;

    // Assert
    assert_no_element_emitted(&mut result, 100).await;
    assert!(!result.is_terminated());
    assert_eq!(result.phase(), WindowPhase::Filling);

    tx.send(StreamItem::Value(2))?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)),
        vec![1, 2]
    );
    assert_eq!(result.phase(), WindowPhase::Sliding);

    Ok(())
}

#[tokio::test]
async fn test_sliding_window_clean_source_collects_all_windows() -> anyhow::Result<()> {
    // Arrange
    let result = stream::iter(0..6).into_windowed_stream().sliding_window(3)?;

    // Act
    let windows: Vec<Vec<i32>> = result.map(|item| item.unwrap()).collect().await;

    // Assert
    assert_eq!(
        windows,
        vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]
    );

    Ok(())
}
